use common::config::Validate;
use common::games::flappy::FlappyDifficulty;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct FlappyConfig {
    pub difficulty: FlappyDifficulty,
}

impl Validate for FlappyConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for FlappyConfig {
    fn default() -> Self {
        Self {
            difficulty: FlappyDifficulty::Normal,
        }
    }
}
