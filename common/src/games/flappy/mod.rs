mod game_state;
mod types;

pub use game_state::FlappyGameState;
pub use types::{
    Bird, FlappyDifficulty, FlappyPhase, Pipe, BIRD_HEIGHT, BIRD_WIDTH, BIRD_X, CANVAS_HEIGHT,
    CANVAS_WIDTH, FLAP_STRENGTH, FRAME_TICK, PIPE_MARGIN, PIPE_SPEED, PIPE_WIDTH,
};
