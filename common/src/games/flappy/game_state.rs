use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use std::time::Duration;

use crate::games::SessionRng;
use crate::log;
use super::types::{
    Bird, FlappyDifficulty, FlappyPhase, Pipe, BIRD_HEIGHT, BIRD_WIDTH, BIRD_X, CANVAS_HEIGHT,
    CANVAS_WIDTH, FLAP_STRENGTH, FRAME_TICK, PIPE_MARGIN, PIPE_SPEED, PIPE_WIDTH,
};

#[derive(Clone, Debug)]
pub struct FlappyGameState {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub phase: FlappyPhase,
    pub difficulty: FlappyDifficulty,
    pub score: u32,
    pub high_score: u32,
    spawn_elapsed: Duration,
}

impl FlappyGameState {
    pub fn new(difficulty: FlappyDifficulty) -> Self {
        Self {
            bird: Bird {
                y: CANVAS_HEIGHT / 2.0,
                velocity: 0.0,
                rotation: 0.0,
            },
            pipes: Vec::new(),
            phase: FlappyPhase::Ready,
            difficulty,
            score: 0,
            high_score: 0,
            spawn_elapsed: Duration::ZERO,
        }
    }

    /// The flap impulse replaces the current velocity outright, so jump
    /// height does not depend on how fast the bird was falling. A flap also
    /// starts an idle game, and acknowledges a finished one.
    pub fn flap(&mut self) {
        match self.phase {
            FlappyPhase::Ready => {
                self.phase = FlappyPhase::Playing;
                self.bird.velocity = FLAP_STRENGTH;
            }
            FlappyPhase::Playing => {
                self.bird.velocity = FLAP_STRENGTH;
            }
            FlappyPhase::GameOver => {
                self.reset();
            }
        }
    }

    pub fn reset(&mut self) {
        let high_score = self.high_score;
        *self = Self::new(self.difficulty);
        self.high_score = high_score;
    }

    pub fn set_difficulty(&mut self, difficulty: FlappyDifficulty) {
        if difficulty != self.difficulty {
            self.difficulty = difficulty;
            self.reset();
        }
    }

    pub fn update(&mut self, rng: &mut SessionRng) {
        if self.phase != FlappyPhase::Playing {
            return;
        }

        // The bird moves with the velocity it entered the tick with, then
        // gravity pulls on the next tick's velocity.
        self.bird.y += self.bird.velocity;
        self.bird.velocity += self.difficulty.gravity();
        self.bird.rotation = (self.bird.velocity * 0.1).clamp(-FRAC_PI_4, FRAC_PI_2);

        for pipe in &mut self.pipes {
            pipe.x -= PIPE_SPEED;
        }
        self.pipes.retain(|pipe| pipe.x + PIPE_WIDTH > 0.0);

        self.spawn_elapsed += FRAME_TICK;
        if self.spawn_elapsed >= self.difficulty.pipe_interval() {
            self.spawn_pipe(rng);
            self.spawn_elapsed = Duration::ZERO;
        }

        if self.bird.y < 0.0 || self.bird.y + BIRD_HEIGHT > CANVAS_HEIGHT {
            self.end_game();
            return;
        }

        if self.pipes.iter().any(|pipe| self.bird_hits_pipe(pipe)) {
            self.end_game();
            return;
        }

        for pipe in &mut self.pipes {
            if !pipe.passed && pipe.x + PIPE_WIDTH < BIRD_X {
                pipe.passed = true;
                self.score += 1;
            }
        }
    }

    fn bird_hits_pipe(&self, pipe: &Pipe) -> bool {
        let overlaps_horizontally =
            BIRD_X + BIRD_WIDTH > pipe.x && BIRD_X < pipe.x + PIPE_WIDTH;
        if !overlaps_horizontally {
            return false;
        }

        let gap_bottom = pipe.top_height + self.difficulty.gap();
        self.bird.y < pipe.top_height || self.bird.y + BIRD_HEIGHT > gap_bottom
    }

    fn spawn_pipe(&mut self, rng: &mut SessionRng) {
        let max_top = CANVAS_HEIGHT - self.difficulty.gap() - PIPE_MARGIN;
        let top_height = rng.random_range(PIPE_MARGIN..=max_top);
        self.pipes.push(Pipe {
            x: CANVAS_WIDTH,
            top_height,
            passed: false,
        });
    }

    fn end_game(&mut self) {
        self.phase = FlappyPhase::GameOver;
        self.high_score = self.high_score.max(self.score);
        log!(
            "Flappy game over. Score: {}, best: {}",
            self.score,
            self.high_score
        );
    }

    #[cfg(test)]
    fn set_spawn_elapsed(&mut self, elapsed: Duration) {
        self.spawn_elapsed = elapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn playing_state(difficulty: FlappyDifficulty) -> FlappyGameState {
        let mut state = FlappyGameState::new(difficulty);
        state.phase = FlappyPhase::Playing;
        state
    }

    fn pipe_at(x: f32, top_height: f32) -> Pipe {
        Pipe {
            x,
            top_height,
            passed: false,
        }
    }

    #[test]
    fn test_new_state_is_idle_and_centered() {
        let state = FlappyGameState::new(FlappyDifficulty::Normal);
        assert_eq!(state.phase, FlappyPhase::Ready);
        assert!((state.bird.y - 320.0).abs() < EPS);
        assert_eq!(state.bird.velocity, 0.0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_first_tick_from_rest() {
        let mut rng = SessionRng::new(42);
        let mut state = playing_state(FlappyDifficulty::Normal);

        state.update(&mut rng);
        assert!((state.bird.y - 320.0).abs() < EPS);
        assert!((state.bird.velocity - 0.4).abs() < EPS);
        assert!((state.bird.rotation - 0.04).abs() < EPS);
    }

    #[test]
    fn test_flap_replaces_velocity() {
        let mut state = playing_state(FlappyDifficulty::Normal);

        state.bird.velocity = 12.5;
        state.flap();
        assert_eq!(state.bird.velocity, FLAP_STRENGTH);

        state.bird.velocity = -3.0;
        state.flap();
        assert_eq!(state.bird.velocity, FLAP_STRENGTH);
    }

    #[test]
    fn test_flap_starts_idle_game() {
        let mut state = FlappyGameState::new(FlappyDifficulty::Easy);
        state.flap();
        assert_eq!(state.phase, FlappyPhase::Playing);
        assert_eq!(state.bird.velocity, FLAP_STRENGTH);
    }

    #[test]
    fn test_pipes_scroll_left_and_drop_off_screen() {
        let mut rng = SessionRng::new(42);
        let mut state = playing_state(FlappyDifficulty::Normal);
        state.bird.velocity = FLAP_STRENGTH;
        state.pipes = vec![pipe_at(300.0, 250.0), pipe_at(-PIPE_WIDTH + 1.0, 250.0)];

        state.update(&mut rng);
        assert_eq!(state.pipes.len(), 1);
        assert!((state.pipes[0].x - (300.0 - PIPE_SPEED)).abs() < EPS);
    }

    #[test]
    fn test_pipe_spawns_after_interval() {
        let mut rng = SessionRng::new(42);
        let mut state = playing_state(FlappyDifficulty::Normal);
        let interval = state.difficulty.pipe_interval();
        state.set_spawn_elapsed(interval - FRAME_TICK);

        state.update(&mut rng);
        assert_eq!(state.pipes.len(), 1);

        let pipe = state.pipes[0];
        assert!((pipe.x - CANVAS_WIDTH).abs() < EPS);
        assert!(pipe.top_height >= PIPE_MARGIN);
        assert!(pipe.top_height <= CANVAS_HEIGHT - state.difficulty.gap() - PIPE_MARGIN);
        assert!(!pipe.passed);

        // Timer restarts, no second pipe on the next tick.
        state.update(&mut rng);
        assert_eq!(state.pipes.len(), 1);
    }

    #[test]
    fn test_ceiling_is_terminal() {
        let mut rng = SessionRng::new(42);
        let mut state = playing_state(FlappyDifficulty::Normal);
        state.bird.y = 2.0;
        state.bird.velocity = -5.0;

        state.update(&mut rng);
        assert_eq!(state.phase, FlappyPhase::GameOver);
    }

    #[test]
    fn test_floor_is_terminal() {
        let mut rng = SessionRng::new(42);
        let mut state = playing_state(FlappyDifficulty::Normal);
        state.bird.y = CANVAS_HEIGHT - BIRD_HEIGHT - 1.0;
        state.bird.velocity = 5.0;

        state.update(&mut rng);
        assert_eq!(state.phase, FlappyPhase::GameOver);
    }

    #[test]
    fn test_boundary_beats_pipe_state() {
        let mut rng = SessionRng::new(42);
        let mut state = playing_state(FlappyDifficulty::Normal);
        // A perfectly safe pipe gap around the bird does not matter once the
        // bird leaves the play field.
        state.pipes = vec![pipe_at(BIRD_X, 0.0)];
        state.bird.y = -20.0;

        state.update(&mut rng);
        assert_eq!(state.phase, FlappyPhase::GameOver);
    }

    #[test]
    fn test_hitting_top_pipe_is_terminal() {
        let mut rng = SessionRng::new(42);
        let mut state = playing_state(FlappyDifficulty::Normal);
        state.bird.y = 100.0;
        state.bird.velocity = 0.0;
        state.pipes = vec![pipe_at(BIRD_X + 10.0, 200.0)];

        state.update(&mut rng);
        assert_eq!(state.phase, FlappyPhase::GameOver);
    }

    #[test]
    fn test_hitting_bottom_pipe_is_terminal() {
        let mut rng = SessionRng::new(42);
        let mut state = playing_state(FlappyDifficulty::Normal);
        let gap_bottom = 200.0 + state.difficulty.gap();
        state.bird.y = gap_bottom - 5.0;
        state.bird.velocity = 0.0;
        state.pipes = vec![pipe_at(BIRD_X + 10.0, 200.0)];

        state.update(&mut rng);
        assert_eq!(state.phase, FlappyPhase::GameOver);
    }

    #[test]
    fn test_bird_survives_inside_gap() {
        let mut rng = SessionRng::new(42);
        let mut state = playing_state(FlappyDifficulty::Normal);
        state.bird.y = 250.0;
        state.bird.velocity = 0.0;
        state.pipes = vec![pipe_at(BIRD_X + 10.0, 200.0)];

        state.update(&mut rng);
        assert_eq!(state.phase, FlappyPhase::Playing);
    }

    #[test]
    fn test_pipe_scores_once_when_cleared() {
        let mut rng = SessionRng::new(42);
        let mut state = playing_state(FlappyDifficulty::Normal);
        state.bird.velocity = FLAP_STRENGTH;
        // One tick of scrolling moves the trailing edge past the bird.
        state.pipes = vec![pipe_at(BIRD_X - PIPE_WIDTH - 1.0, 250.0)];

        state.update(&mut rng);
        assert_eq!(state.score, 1);
        assert!(state.pipes[0].passed);

        state.update(&mut rng);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_passed_pipe_never_scores_again() {
        let mut rng = SessionRng::new(42);
        let mut state = playing_state(FlappyDifficulty::Normal);
        state.bird.velocity = FLAP_STRENGTH;
        let mut pipe = pipe_at(BIRD_X - PIPE_WIDTH - 10.0, 250.0);
        pipe.passed = true;
        state.pipes = vec![pipe];

        state.update(&mut rng);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_game_over_records_high_score() {
        let mut rng = SessionRng::new(42);
        let mut state = playing_state(FlappyDifficulty::Normal);
        state.score = 7;
        state.high_score = 4;
        state.bird.y = -10.0;

        state.update(&mut rng);
        assert_eq!(state.phase, FlappyPhase::GameOver);
        assert_eq!(state.high_score, 7);
    }

    #[test]
    fn test_flap_after_game_over_resets_to_idle() {
        let mut state = playing_state(FlappyDifficulty::Hard);
        state.score = 3;
        state.high_score = 3;
        state.phase = FlappyPhase::GameOver;
        state.pipes = vec![pipe_at(200.0, 250.0)];

        state.flap();
        assert_eq!(state.phase, FlappyPhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 3);
        assert_eq!(state.difficulty, FlappyDifficulty::Hard);
        assert!(state.pipes.is_empty());
        assert!((state.bird.y - 320.0).abs() < EPS);
    }

    #[test]
    fn test_no_updates_while_idle_or_dead() {
        let mut rng = SessionRng::new(42);
        let mut state = FlappyGameState::new(FlappyDifficulty::Normal);

        state.update(&mut rng);
        assert_eq!(state.bird.velocity, 0.0);

        state.phase = FlappyPhase::GameOver;
        state.bird.y = 100.0;
        state.update(&mut rng);
        assert!((state.bird.y - 100.0).abs() < EPS);
    }

    #[test]
    fn test_difficulty_change_resets_round() {
        let mut state = playing_state(FlappyDifficulty::Normal);
        state.score = 5;
        state.high_score = 5;

        state.set_difficulty(FlappyDifficulty::Hard);
        assert_eq!(state.phase, FlappyPhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 5);
        assert_eq!(state.difficulty, FlappyDifficulty::Hard);
    }
}
