mod game_state;
mod settings;
mod snake;
mod types;

pub use game_state::SnakeGameState;
pub use settings::{DEFAULT_GRID_SIZE, SnakeSettings};
pub use snake::Snake;
pub use types::{DeathReason, Direction, Food, FoodKind, Point, SnakeDifficulty};
