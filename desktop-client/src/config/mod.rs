mod flappy_config;
mod game_type;
mod main_config;
mod snake_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use flappy_config::FlappyConfig;
pub use game_type::GameType;
pub use main_config::{config_manager_at, get_config_manager, Config};
pub use snake_config::SnakeConfig;

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;
