use std::time::Instant;

use common::games::snake::{
    Direction, FoodKind, Point, SnakeDifficulty, SnakeGameState, SnakeSettings,
};
use common::games::SessionRng;
use eframe::egui;
use egui::{Align, Layout};

use crate::colors::SnakeColor;
use super::GameUiAction;

const SWIPE_THRESHOLD: f32 = 50.0;

pub struct SnakeGameUi {
    state: SnakeGameState,
    rng: SessionRng,
    color: SnakeColor,
    last_tick: Instant,
    paused: bool,
    swipe_origin: Option<egui::Pos2>,
}

impl SnakeGameUi {
    pub fn new(
        settings: SnakeSettings,
        color: SnakeColor,
        high_score: u32,
        mut rng: SessionRng,
    ) -> Self {
        let mut state = SnakeGameState::new(&settings, &mut rng);
        state.high_score = high_score;

        Self {
            state,
            rng,
            color,
            last_tick: Instant::now(),
            paused: false,
            swipe_origin: None,
        }
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }

    pub fn difficulty(&self) -> SnakeDifficulty {
        self.state.difficulty
    }

    pub fn render_game(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) -> Option<GameUiAction> {
        let mut action = self.handle_input(ctx);
        self.advance(ctx);

        if self.render_top_bar(ui) {
            action = Some(GameUiAction::Leave);
        }
        self.render_canvas(ui);
        self.render_touch_controls(ui);
        self.render_status(ui);

        action
    }

    fn handle_input(&mut self, ctx: &egui::Context) -> Option<GameUiAction> {
        let mut action = None;

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) {
                action = Some(GameUiAction::Leave);
            }
            if i.key_pressed(egui::Key::P) && self.state.is_running() {
                self.toggle_pause();
            }
            if i.key_pressed(egui::Key::Enter) && !self.state.is_running() {
                self.restart();
            }

            if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                self.state.set_direction(Direction::Up);
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                self.state.set_direction(Direction::Down);
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                self.state.set_direction(Direction::Left);
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                self.state.set_direction(Direction::Right);
            }

            if i.pointer.any_pressed() {
                self.swipe_origin = i.pointer.latest_pos();
            }
            if i.pointer.any_released()
                && let Some(origin) = self.swipe_origin.take()
                && let Some(pos) = i.pointer.latest_pos()
                && let Some(direction) = swipe_direction(pos - origin)
            {
                self.state.set_direction(direction);
            }
        });

        action
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if !self.paused {
            // Do not replay the time spent paused as instant ticks.
            self.last_tick = Instant::now();
        }
    }

    fn restart(&mut self) {
        self.state.reset(&mut self.rng);
        self.last_tick = Instant::now();
        self.paused = false;
    }

    /// One logical tick fires once enough wall-clock time has passed;
    /// frames below the threshold only redraw. While paused or dead the
    /// repaint loop is left alone and input events drive the UI.
    fn advance(&mut self, ctx: &egui::Context) {
        if self.paused || !self.state.is_running() {
            return;
        }

        if self.last_tick.elapsed() >= self.state.difficulty.tick_interval() {
            self.state.update(&mut self.rng);
            self.last_tick = Instant::now();
        }
        ctx.request_repaint();
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) -> bool {
        let mut leave = false;

        ui.horizontal(|ui| {
            ui.heading("Snake");
            ui.separator();
            ui.label(format!("Score: {}", self.state.score));
            ui.label(format!("Best: {}", self.state.high_score));
            ui.separator();

            let mut difficulty = self.state.difficulty;
            egui::ComboBox::from_id_salt("snake_game_difficulty")
                .selected_text(format!("{:?}", difficulty))
                .show_ui(ui, |ui| {
                    for option in SnakeDifficulty::ALL {
                        ui.selectable_value(&mut difficulty, option, format!("{:?}", option));
                    }
                });
            if difficulty != self.state.difficulty {
                self.state.set_difficulty(difficulty, &mut self.rng);
                self.last_tick = Instant::now();
                self.paused = false;
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Menu (Esc)").clicked() {
                    leave = true;
                }
            });
        });
        ui.separator();

        leave
    }

    fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let grid = self.state.grid_size as f32;
        let reserved = 170.0;
        let side = ui
            .available_width()
            .min((ui.available_height() - reserved).max(240.0));
        let cell = (side / grid).floor().max(8.0);
        let canvas = cell * grid;

        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - canvas).max(0.0) / 2.0);

            let (response, painter) =
                ui.allocate_painter(egui::Vec2::splat(canvas), egui::Sense::hover());
            let rect = response.rect;

            painter.rect_filled(rect, 4.0, egui::Color32::from_rgb(0x17, 0x21, 0x17));

            let cell_rect = |pos: Point| {
                egui::Rect::from_min_size(
                    rect.min + egui::vec2(pos.x as f32 * cell, pos.y as f32 * cell),
                    egui::Vec2::splat(cell),
                )
            };

            if self.state.difficulty.lethal_border() {
                let border = egui::Color32::from_rgb(0x55, 0x1d, 0x1d);
                let last = self.state.grid_size - 1;
                for i in 0..self.state.grid_size {
                    painter.rect_filled(cell_rect(Point::new(i, 0)), 0.0, border);
                    painter.rect_filled(cell_rect(Point::new(i, last)), 0.0, border);
                    painter.rect_filled(cell_rect(Point::new(0, i)), 0.0, border);
                    painter.rect_filled(cell_rect(Point::new(last, i)), 0.0, border);
                }
            }

            for wall in &self.state.walls {
                painter.rect_filled(
                    cell_rect(*wall).shrink(1.0),
                    2.0,
                    egui::Color32::from_rgb(0x6e, 0x6e, 0x6e),
                );
            }

            for food in &self.state.foods {
                painter.circle_filled(
                    cell_rect(food.position).center(),
                    cell * 0.38,
                    food_color(food.kind),
                );
            }

            for (index, segment) in self.state.snake.body.iter().enumerate() {
                let color = if index == 0 {
                    self.color.head()
                } else {
                    self.color.body()
                };
                painter.rect_filled(cell_rect(*segment).shrink(1.0), 3.0, color);
            }

            if self.paused {
                self.render_overlay(&painter, rect, "Paused", "Press P to continue");
            } else if !self.state.is_running() {
                self.render_overlay(
                    &painter,
                    rect,
                    "Game Over",
                    &format!("Score {}. Press Enter to play again", self.state.score),
                );
            }
        });
    }

    fn render_overlay(&self, painter: &egui::Painter, rect: egui::Rect, title: &str, line: &str) {
        painter.rect_filled(rect, 4.0, egui::Color32::from_black_alpha(160));
        painter.text(
            rect.center() - egui::vec2(0.0, 14.0),
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(30.0),
            egui::Color32::WHITE,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 18.0),
            egui::Align2::CENTER_CENTER,
            line,
            egui::FontId::proportional(15.0),
            egui::Color32::LIGHT_GRAY,
        );
    }

    fn render_touch_controls(&mut self, ui: &mut egui::Ui) {
        let button = |label: &str| {
            egui::Button::new(egui::RichText::new(label).size(16.0))
                .min_size(egui::vec2(44.0, 32.0))
        };

        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            if ui.add(button("▲")).clicked() {
                self.state.set_direction(Direction::Up);
            }
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 3.0 * 48.0).max(0.0) / 2.0);
                if ui.add(button("◀")).clicked() {
                    self.state.set_direction(Direction::Left);
                }
                if ui.add(button("▼")).clicked() {
                    self.state.set_direction(Direction::Down);
                }
                if ui.add(button("▶")).clicked() {
                    self.state.set_direction(Direction::Right);
                }
            });
        });
    }

    fn render_status(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(4.0);
            if !self.state.is_running() {
                if ui.button("Play Again (Enter)").clicked() {
                    self.restart();
                }
            } else {
                ui.label(
                    egui::RichText::new("Arrows, WASD or swipe to steer. P pauses.")
                        .color(egui::Color32::GRAY),
                );
            }
        });
    }
}

fn swipe_direction(delta: egui::Vec2) -> Option<Direction> {
    if delta.x.abs() < SWIPE_THRESHOLD && delta.y.abs() < SWIPE_THRESHOLD {
        return None;
    }

    if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    } else if delta.y > 0.0 {
        Some(Direction::Down)
    } else {
        Some(Direction::Up)
    }
}

fn food_color(kind: FoodKind) -> egui::Color32 {
    match kind {
        FoodKind::Apple => egui::Color32::from_rgb(0xe5, 0x39, 0x35),
        FoodKind::Banana => egui::Color32::from_rgb(0xfd, 0xd8, 0x35),
        FoodKind::Meat => egui::Color32::from_rgb(0x8d, 0x5b, 0x3a),
        FoodKind::Berry => egui::Color32::from_rgb(0xab, 0x47, 0xbc),
    }
}
