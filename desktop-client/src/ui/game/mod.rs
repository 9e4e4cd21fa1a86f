mod flappy;
mod snake;

pub use flappy::FlappyGameUi;
pub use snake::SnakeGameUi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameUiAction {
    Leave,
}
