use common::games::flappy::{
    FlappyDifficulty, FlappyGameState, FlappyPhase, BIRD_HEIGHT, BIRD_WIDTH, BIRD_X,
    CANVAS_HEIGHT, CANVAS_WIDTH, PIPE_WIDTH,
};
use common::games::SessionRng;
use eframe::egui;
use egui::{Align, Layout};

use super::GameUiAction;

const SKY_TOP: egui::Color32 = egui::Color32::from_rgb(0x46, 0xb4, 0xc8);
const SKY_BOTTOM: egui::Color32 = egui::Color32::from_rgb(0xbe, 0xe8, 0xf5);
const PIPE_BODY: egui::Color32 = egui::Color32::from_rgb(0x64, 0xaa, 0x28);
const PIPE_CAP: egui::Color32 = egui::Color32::from_rgb(0x4a, 0x7a, 0x1a);
const BIRD_BODY: egui::Color32 = egui::Color32::from_rgb(0xf5, 0xc8, 0x42);
const BIRD_BEAK: egui::Color32 = egui::Color32::from_rgb(0xe1, 0x4b, 0x23);

pub struct FlappyGameUi {
    state: FlappyGameState,
    rng: SessionRng,
}

impl FlappyGameUi {
    pub fn new(difficulty: FlappyDifficulty, high_score: u32, rng: SessionRng) -> Self {
        let mut state = FlappyGameState::new(difficulty);
        state.high_score = high_score;

        Self { state, rng }
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }

    pub fn difficulty(&self) -> FlappyDifficulty {
        self.state.difficulty
    }

    pub fn render_game(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) -> Option<GameUiAction> {
        let mut action = self.handle_input(ctx);

        // Flappy ticks every frame; the repaint loop stops with the game.
        if self.state.phase == FlappyPhase::Playing {
            self.state.update(&mut self.rng);
            ctx.request_repaint();
        }

        if self.render_top_bar(ui) {
            action = Some(GameUiAction::Leave);
        }
        self.render_canvas(ui);

        action
    }

    fn handle_input(&mut self, ctx: &egui::Context) -> Option<GameUiAction> {
        let mut action = None;

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) {
                action = Some(GameUiAction::Leave);
            }
            if i.key_pressed(egui::Key::Space) || i.key_pressed(egui::Key::ArrowUp) {
                self.state.flap();
            }
        });

        action
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) -> bool {
        let mut leave = false;

        ui.horizontal(|ui| {
            ui.heading("Flappy");
            ui.separator();
            ui.label(format!("Score: {}", self.state.score));
            ui.label(format!("Best: {}", self.state.high_score));
            ui.separator();

            let mut difficulty = self.state.difficulty;
            egui::ComboBox::from_id_salt("flappy_game_difficulty")
                .selected_text(format!("{:?}", difficulty))
                .show_ui(ui, |ui| {
                    for option in FlappyDifficulty::ALL {
                        ui.selectable_value(&mut difficulty, option, format!("{:?}", option));
                    }
                });
            if difficulty != self.state.difficulty {
                self.state.set_difficulty(difficulty);
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
        let scale = (ui.available_width() / CANVAS_WIDTH)
            .min(ui.available_height() / CANVAS_HEIGHT)
            .clamp(0.3, 1.5);
        let size = egui::vec2(CANVAS_WIDTH * scale, CANVAS_HEIGHT * scale);

        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() - size.x).max(0.0) / 2.0);

            let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
            if response.clicked() {
                self.state.flap();
            }

            let rect = response.rect;
            let painter = painter.with_clip_rect(rect);
            let to_screen =
                |x: f32, y: f32| rect.min + egui::vec2(x, y) * scale;

            self.render_sky(&painter, rect);
            self.render_pipes(&painter, scale, &to_screen);
            self.render_bird(&painter, scale, &to_screen);

            painter.text(
                to_screen(CANVAS_WIDTH / 2.0, 40.0),
                egui::Align2::CENTER_CENTER,
                self.state.score.to_string(),
                egui::FontId::proportional(36.0 * scale.max(0.7)),
                egui::Color32::WHITE,
            );

            match self.state.phase {
                FlappyPhase::Ready => {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Space or click to flap",
                        egui::FontId::proportional(20.0),
                        egui::Color32::WHITE,
                    );
                }
                FlappyPhase::GameOver => {
                    painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(150));
                    painter.text(
                        rect.center() - egui::vec2(0.0, 24.0),
                        egui::Align2::CENTER_CENTER,
                        "Game Over",
                        egui::FontId::proportional(30.0),
                        egui::Color32::WHITE,
                    );
                    painter.text(
                        rect.center() + egui::vec2(0.0, 10.0),
                        egui::Align2::CENTER_CENTER,
                        format!("Score {}, best {}", self.state.score, self.state.high_score),
                        egui::FontId::proportional(16.0),
                        egui::Color32::LIGHT_GRAY,
                    );
                    painter.text(
                        rect.center() + egui::vec2(0.0, 36.0),
                        egui::Align2::CENTER_CENTER,
                        "Flap to try again",
                        egui::FontId::proportional(14.0),
                        egui::Color32::LIGHT_GRAY,
                    );
                }
                FlappyPhase::Playing => {}
            }
        });
    }

    fn render_sky(&self, painter: &egui::Painter, rect: egui::Rect) {
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(rect.left_top(), SKY_TOP);
        mesh.colored_vertex(rect.right_top(), SKY_TOP);
        mesh.colored_vertex(rect.left_bottom(), SKY_BOTTOM);
        mesh.colored_vertex(rect.right_bottom(), SKY_BOTTOM);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(2, 1, 3);
        painter.add(egui::Shape::mesh(mesh));
    }

    fn render_pipes(
        &self,
        painter: &egui::Painter,
        scale: f32,
        to_screen: &dyn Fn(f32, f32) -> egui::Pos2,
    ) {
        let gap = self.state.difficulty.gap();
        let cap_height = 16.0;
        let cap_overhang = 4.0;

        for pipe in &self.state.pipes {
            let gap_bottom = pipe.top_height + gap;

            let top_body = egui::Rect::from_min_max(
                to_screen(pipe.x, 0.0),
                to_screen(pipe.x + PIPE_WIDTH, pipe.top_height),
            );
            let bottom_body = egui::Rect::from_min_max(
                to_screen(pipe.x, gap_bottom),
                to_screen(pipe.x + PIPE_WIDTH, CANVAS_HEIGHT),
            );
            painter.rect_filled(top_body, 0.0, PIPE_BODY);
            painter.rect_filled(bottom_body, 0.0, PIPE_BODY);

            let top_cap = egui::Rect::from_min_max(
                to_screen(pipe.x - cap_overhang, pipe.top_height - cap_height),
                to_screen(pipe.x + PIPE_WIDTH + cap_overhang, pipe.top_height),
            );
            let bottom_cap = egui::Rect::from_min_max(
                to_screen(pipe.x - cap_overhang, gap_bottom),
                to_screen(pipe.x + PIPE_WIDTH + cap_overhang, gap_bottom + cap_height),
            );
            painter.rect_filled(top_cap, 2.0 * scale, PIPE_CAP);
            painter.rect_filled(bottom_cap, 2.0 * scale, PIPE_CAP);
        }
    }

    fn render_bird(
        &self,
        painter: &egui::Painter,
        scale: f32,
        to_screen: &dyn Fn(f32, f32) -> egui::Pos2,
    ) {
        let bird = &self.state.bird;
        let center = to_screen(BIRD_X + BIRD_WIDTH / 2.0, bird.y + BIRD_HEIGHT / 2.0);
        let (sin, cos) = bird.rotation.sin_cos();
        let rotate = |dx: f32, dy: f32| {
            center + egui::vec2(dx * cos - dy * sin, dx * sin + dy * cos) * scale
        };

        let half_w = BIRD_WIDTH / 2.0;
        let half_h = BIRD_HEIGHT / 2.0;

        let body = vec![
            rotate(-half_w, -half_h),
            rotate(half_w, -half_h),
            rotate(half_w, half_h),
            rotate(-half_w, half_h),
        ];
        painter.add(egui::Shape::convex_polygon(
            body,
            BIRD_BODY,
            egui::Stroke::NONE,
        ));

        let beak = vec![
            rotate(half_w, -4.0),
            rotate(half_w + 10.0, 0.0),
            rotate(half_w, 4.0),
        ];
        painter.add(egui::Shape::convex_polygon(
            beak,
            BIRD_BEAK,
            egui::Stroke::NONE,
        ));

        painter.circle_filled(rotate(half_w * 0.35, -half_h * 0.35), 4.5 * scale, egui::Color32::WHITE);
        painter.circle_filled(rotate(half_w * 0.5, -half_h * 0.35), 2.0 * scale, egui::Color32::BLACK);
    }
}
