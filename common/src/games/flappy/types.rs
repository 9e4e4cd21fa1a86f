use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const CANVAS_WIDTH: f32 = 480.0;
pub const CANVAS_HEIGHT: f32 = 640.0;

pub const PIPE_WIDTH: f32 = 60.0;
pub const PIPE_SPEED: f32 = 3.0;
/// Minimum distance the gap keeps from the top and bottom of the play field.
pub const PIPE_MARGIN: f32 = 50.0;

pub const BIRD_X: f32 = 80.0;
pub const BIRD_WIDTH: f32 = 34.0;
pub const BIRD_HEIGHT: f32 = 24.0;
pub const FLAP_STRENGTH: f32 = -7.0;

/// Nominal duration of one logical tick. The engine advances its spawn
/// timer by this amount instead of sampling the wall clock, so a tick is
/// the same length no matter how fast frames arrive.
pub const FRAME_TICK: Duration = Duration::from_millis(16);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlappyDifficulty {
    Easy,
    Normal,
    Hard,
}

impl FlappyDifficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Normal, Self::Hard];

    pub fn gravity(&self) -> f32 {
        match self {
            Self::Easy => 0.3,
            Self::Normal => 0.4,
            Self::Hard => 0.5,
        }
    }

    pub fn gap(&self) -> f32 {
        match self {
            Self::Easy => 180.0,
            Self::Normal => 150.0,
            Self::Hard => 120.0,
        }
    }

    pub fn pipe_interval(&self) -> Duration {
        match self {
            Self::Easy => Duration::from_millis(1800),
            Self::Normal => Duration::from_millis(1500),
            Self::Hard => Duration::from_millis(1200),
        }
    }
}

/// Vertical state of the bird. `y` is the top edge of its bounding box;
/// `rotation` is derived from velocity and only used for drawing.
#[derive(Clone, Copy, Debug)]
pub struct Bird {
    pub y: f32,
    pub velocity: f32,
    pub rotation: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Pipe {
    pub x: f32,
    pub top_height: f32,
    pub passed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlappyPhase {
    Ready,
    Playing,
    GameOver,
}
