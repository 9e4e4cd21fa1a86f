use super::types::SnakeDifficulty;

pub const DEFAULT_GRID_SIZE: usize = 20;

#[derive(Clone, Copy, Debug)]
pub struct SnakeSettings {
    pub grid_size: usize,
    pub difficulty: SnakeDifficulty,
}

impl SnakeSettings {
    pub fn new(difficulty: SnakeDifficulty) -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            difficulty,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size < 10 || self.grid_size > 50 {
            return Err("Grid size must be between 10 and 50".to_string());
        }
        Ok(())
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self::new(SnakeDifficulty::Normal)
    }
}
