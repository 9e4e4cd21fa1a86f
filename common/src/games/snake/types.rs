use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeDifficulty {
    Easy,
    Normal,
    Hard,
    Extreme,
}

impl SnakeDifficulty {
    pub const ALL: [Self; 4] = [Self::Easy, Self::Normal, Self::Hard, Self::Extreme];

    pub fn tick_interval(&self) -> Duration {
        match self {
            Self::Easy => Duration::from_millis(150),
            Self::Normal => Duration::from_millis(100),
            Self::Hard | Self::Extreme => Duration::from_millis(70),
        }
    }

    /// Extreme turns the outermost grid ring into a death zone instead of
    /// wrapping movement around the edges.
    pub fn lethal_border(&self) -> bool {
        matches!(self, Self::Extreme)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodKind {
    Apple,
    Banana,
    Meat,
    Berry,
}

impl FoodKind {
    pub fn points(&self) -> u32 {
        match self {
            Self::Apple => 1,
            Self::Banana => 2,
            Self::Meat => 3,
            Self::Berry => 1,
        }
    }

    pub fn pick(roll: f32) -> Self {
        if roll < 0.4 {
            Self::Apple
        } else if roll < 0.7 {
            Self::Banana
        } else if roll < 0.9 {
            Self::Meat
        } else {
            Self::Berry
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Point,
    pub kind: FoodKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    BorderCollision,
    SelfCollision,
    WallCollision,
}
