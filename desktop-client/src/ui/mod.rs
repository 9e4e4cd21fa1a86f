pub mod game;
mod menu;

pub use game::{FlappyGameUi, GameUiAction, SnakeGameUi};
pub use menu::{MenuAction, MenuUi};
