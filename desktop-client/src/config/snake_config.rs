use common::config::Validate;
use common::games::snake::SnakeDifficulty;
use serde::{Deserialize, Serialize};

use crate::colors::SnakeColor;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeConfig {
    pub grid_size: u32,
    pub difficulty: SnakeDifficulty,
    pub color: SnakeColor,
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size < 10 || self.grid_size > 50 {
            return Err("grid_size must be between 10 and 50".to_string());
        }
        Ok(())
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            difficulty: SnakeDifficulty::Normal,
            color: SnakeColor::Green,
        }
    }
}
