use std::collections::HashSet;

use crate::games::SessionRng;
use crate::log;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{DeathReason, Direction, Food, FoodKind, Point, SnakeDifficulty};

const PLACEMENT_ATTEMPTS: usize = 100;
const MAX_FOOD_COUNT: u32 = 3;
const FOOD_COUNT_SCORE_STEP: u32 = 5;
const WALL_SCORE_STEP: u32 = 10;

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub snake: Snake,
    pub foods: Vec<Food>,
    pub walls: HashSet<Point>,
    pub grid_size: usize,
    pub difficulty: SnakeDifficulty,
    pub score: u32,
    pub high_score: u32,
    pub game_over: Option<DeathReason>,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSettings, rng: &mut SessionRng) -> Self {
        let center = Point::new(settings.grid_size / 2, settings.grid_size / 2);
        let mut state = Self {
            snake: Snake::new(center, Direction::Right),
            foods: Vec::new(),
            walls: HashSet::new(),
            grid_size: settings.grid_size,
            difficulty: settings.difficulty,
            score: 0,
            high_score: 0,
            game_over: None,
        };
        state.spawn_food(rng);
        state
    }

    pub fn is_running(&self) -> bool {
        self.game_over.is_none()
    }

    pub fn wrapping_inc(value: usize, max: usize) -> usize {
        if value + 1 >= max {
            0
        } else {
            value + 1
        }
    }

    pub fn wrapping_dec(value: usize, max: usize) -> usize {
        if value == 0 {
            max - 1
        } else {
            value - 1
        }
    }

    /// Buffers a turn for the next tick. Requests that would reverse the
    /// snake into itself are ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.game_over.is_none() && !direction.is_opposite(&self.snake.direction) {
            self.snake.pending_direction = Some(direction);
        }
    }

    /// Restarts the round, keeping the session high score and the selected
    /// difficulty.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        let high_score = self.high_score;
        let settings = SnakeSettings {
            grid_size: self.grid_size,
            difficulty: self.difficulty,
        };
        *self = Self::new(&settings, rng);
        self.high_score = high_score;
    }

    pub fn set_difficulty(&mut self, difficulty: SnakeDifficulty, rng: &mut SessionRng) {
        if difficulty != self.difficulty {
            self.difficulty = difficulty;
            self.reset(rng);
        }
    }

    pub fn update(&mut self, rng: &mut SessionRng) {
        if self.game_over.is_some() {
            return;
        }

        let direction = self.snake.pending_direction.unwrap_or(self.snake.direction);

        let next_head = match self.next_head_position(direction) {
            Ok(pos) => pos,
            Err(reason) => {
                self.die(reason);
                return;
            }
        };

        if self.snake.occupies(next_head) {
            self.die(DeathReason::SelfCollision);
            return;
        }
        if self.walls.contains(&next_head) {
            self.die(DeathReason::WallCollision);
            return;
        }

        self.snake.push_head(next_head);

        if let Some(index) = self.foods.iter().position(|f| f.position == next_head) {
            let food = self.foods.remove(index);
            let previous_score = self.score;
            self.score += food.kind.points();
            self.high_score = self.high_score.max(self.score);
            log!(
                "Ate {:?} at ({}, {}). Score: {}",
                food.kind,
                next_head.x,
                next_head.y,
                self.score
            );

            self.replenish_foods(rng);

            if !self.difficulty.lethal_border()
                && previous_score / WALL_SCORE_STEP < self.score / WALL_SCORE_STEP
            {
                self.spawn_wall(rng);
            }
        } else {
            self.snake.pop_tail();
        }

        self.snake.direction = direction;
        self.snake.pending_direction = None;
    }

    fn next_head_position(&self, direction: Direction) -> Result<Point, DeathReason> {
        let head = self.snake.head();
        let next = match direction {
            Direction::Up => Point::new(head.x, Self::wrapping_dec(head.y, self.grid_size)),
            Direction::Down => Point::new(head.x, Self::wrapping_inc(head.y, self.grid_size)),
            Direction::Left => Point::new(Self::wrapping_dec(head.x, self.grid_size), head.y),
            Direction::Right => Point::new(Self::wrapping_inc(head.x, self.grid_size), head.y),
        };

        if self.difficulty.lethal_border() && self.is_border(next) {
            return Err(DeathReason::BorderCollision);
        }
        Ok(next)
    }

    fn is_border(&self, pos: Point) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x == self.grid_size - 1 || pos.y == self.grid_size - 1
    }

    fn die(&mut self, reason: DeathReason) {
        self.game_over = Some(reason);
        log!("Snake died: {:?}. Score: {}", reason, self.score);
    }

    fn target_food_count(&self) -> usize {
        if self.score >= FOOD_COUNT_SCORE_STEP {
            (self.score / FOOD_COUNT_SCORE_STEP).min(MAX_FOOD_COUNT) as usize
        } else {
            1
        }
    }

    fn replenish_foods(&mut self, rng: &mut SessionRng) {
        while self.foods.len() < self.target_food_count() {
            if !self.spawn_food(rng) {
                break;
            }
        }
    }

    fn spawn_food(&mut self, rng: &mut SessionRng) -> bool {
        let Some(position) = self.random_free_cell(rng) else {
            return false;
        };
        let kind = FoodKind::pick(rng.random());
        self.foods.push(Food { position, kind });
        true
    }

    fn spawn_wall(&mut self, rng: &mut SessionRng) {
        if let Some(position) = self.random_free_cell(rng) {
            self.walls.insert(position);
            log!("Wall spawned at ({}, {})", position.x, position.y);
        }
    }

    fn is_cell_free(&self, pos: Point) -> bool {
        if self.snake.occupies(pos) || self.walls.contains(&pos) {
            return false;
        }
        if self.foods.iter().any(|f| f.position == pos) {
            return false;
        }
        // Anything placed on the death ring would be unreachable.
        !(self.difficulty.lethal_border() && self.is_border(pos))
    }

    fn random_free_cell(&self, rng: &mut SessionRng) -> Option<Point> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let pos = Point::new(
                rng.random_range(0..self.grid_size),
                rng.random_range(0..self.grid_size),
            );
            if self.is_cell_free(pos) {
                return Some(pos);
            }
        }

        // The grid is crowded, fall back to scanning what is left.
        let free: Vec<Point> = (0..self.grid_size)
            .flat_map(|y| (0..self.grid_size).map(move |x| Point::new(x, y)))
            .filter(|pos| self.is_cell_free(*pos))
            .collect();

        if free.is_empty() {
            None
        } else {
            Some(free[rng.random_range(0..free.len())])
        }
    }

    #[cfg(test)]
    fn place_snake(&mut self, segments: &[Point], direction: Direction) {
        let mut snake = Snake::new(segments[0], direction);
        for segment in &segments[1..] {
            snake.body.push_back(*segment);
            snake.body_set.insert(*segment);
        }
        self.snake = snake;
    }

    #[cfg(test)]
    fn set_foods(&mut self, foods: Vec<Food>) {
        self.foods = foods;
    }

    #[cfg(test)]
    fn set_score(&mut self, score: u32) {
        self.score = score;
        self.high_score = self.high_score.max(score);
    }
}
