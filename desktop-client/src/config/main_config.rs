use common::config::Validate;
use serde::{Deserialize, Serialize};

use super::{ClientConfigManager, ConfigManager, FlappyConfig, GameType, SnakeConfig};

const CONFIG_FILE_NAME: &str = "arcade_client_config.yaml";

fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ClientConfigManager {
    ConfigManager::from_yaml_file(&default_config_path())
}

pub fn config_manager_at(path: &str) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub last_game: Option<GameType>,
    pub snake: SnakeConfig,
    pub flappy: FlappyConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.flappy.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{
        ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer,
    };

    fn get_temp_file_path(tag: &str) -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("temp_arcade_client_config_{}_{}.yaml", tag, std::process::id()));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_round_trips_through_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_default_config_round_trips_through_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let provider = FileContentConfigProvider::new(get_temp_file_path("file"));

        let serialized = serializer.serialize(&default_config).unwrap();
        provider.set_config_content(&serialized).unwrap();

        let read_back = provider.get_config_content().unwrap().unwrap();
        let deserialized: Config = serializer.deserialize(&read_back).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_round_trips_through_manager() {
        let config = Config {
            last_game: Some(GameType::Flappy),
            ..Config::default()
        };
        let manager: ClientConfigManager = ConfigManager::new(
            FileContentConfigProvider::new(get_temp_file_path("manager")),
            YamlConfigSerializer::new(),
        );

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_missing_config_file_yields_default() {
        let manager: ClientConfigManager =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_out_of_range_grid_size_is_rejected() {
        let invalid_config_content = r#"
            last_game: null
            snake:
              grid_size: 5
              difficulty: Normal
              color: Green
            flappy:
              difficulty: Normal
        "#;

        let provider = FileContentConfigProvider::new(get_temp_file_path("invalid"));
        provider.set_config_content(invalid_config_content).unwrap();

        let manager: ClientConfigManager =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let provider = FileContentConfigProvider::new(get_temp_file_path("malformed"));
        provider.set_config_content("snake: [not: a config").unwrap();

        let manager: ClientConfigManager =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
    }
}
