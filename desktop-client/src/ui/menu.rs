use common::games::flappy::FlappyDifficulty;
use common::games::snake::SnakeDifficulty;
use eframe::egui;

use crate::colors::SnakeColor;
use crate::config::{Config, GameType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play(GameType),
}

pub struct MenuUi;

impl MenuUi {
    pub fn new() -> Self {
        Self
    }

    pub fn render_menu(
        &mut self,
        ui: &mut egui::Ui,
        config: &mut Config,
        snake_high_score: u32,
        flappy_high_score: u32,
    ) -> Option<MenuAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.heading(egui::RichText::new("Arcade Games").size(34.0));
            ui.label("Two tiny games, one canvas");
            ui.add_space(24.0);
        });

        ui.columns(2, |columns| {
            if self.render_snake_card(&mut columns[0], config, snake_high_score) {
                action = Some(MenuAction::Play(GameType::Snake));
            }
            if self.render_flappy_card(&mut columns[1], config, flappy_high_score) {
                action = Some(MenuAction::Play(GameType::Flappy));
            }
        });

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                egui::RichText::new(
                    "Snake: arrows / WASD / swipe. Flappy: space or click. Escape leaves a game.",
                )
                .color(egui::Color32::GRAY),
            );
        });

        action
    }

    fn render_snake_card(
        &mut self,
        ui: &mut egui::Ui,
        config: &mut Config,
        high_score: u32,
    ) -> bool {
        let mut play = false;

        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Snake");
                ui.label(format!("High score: {}", high_score));
                ui.add_space(8.0);

                egui::ComboBox::from_id_salt("snake_difficulty")
                    .selected_text(format!("{:?}", config.snake.difficulty))
                    .show_ui(ui, |ui| {
                        for difficulty in SnakeDifficulty::ALL {
                            ui.selectable_value(
                                &mut config.snake.difficulty,
                                difficulty,
                                format!("{:?}", difficulty),
                            );
                        }
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.add_space((ui.available_width() - 5.0 * 30.0).max(0.0) / 2.0);
                    for color in SnakeColor::ALL {
                        self.render_color_swatch(ui, config, color);
                    }
                });

                ui.add_space(12.0);
                if ui
                    .add(egui::Button::new(egui::RichText::new("Play").size(18.0)))
                    .clicked()
                {
                    play = true;
                }
                ui.add_space(4.0);
            });
        });

        play
    }

    fn render_color_swatch(&mut self, ui: &mut egui::Ui, config: &mut Config, color: SnakeColor) {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(26.0, 26.0), egui::Sense::click());

        if config.snake.color == color {
            ui.painter()
                .rect_filled(rect, 6.0, egui::Color32::WHITE);
        }
        ui.painter()
            .rect_filled(rect.shrink(2.0), 5.0, color.body());

        if response.clicked() {
            config.snake.color = color;
        }
        response.on_hover_text(color.label());
    }

    fn render_flappy_card(
        &mut self,
        ui: &mut egui::Ui,
        config: &mut Config,
        high_score: u32,
    ) -> bool {
        let mut play = false;

        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Flappy");
                ui.label(format!("High score: {}", high_score));
                ui.add_space(8.0);

                egui::ComboBox::from_id_salt("flappy_difficulty")
                    .selected_text(format!("{:?}", config.flappy.difficulty))
                    .show_ui(ui, |ui| {
                        for difficulty in FlappyDifficulty::ALL {
                            ui.selectable_value(
                                &mut config.flappy.difficulty,
                                difficulty,
                                format!("{:?}", difficulty),
                            );
                        }
                    });

                // Same card height as the snake column.
                ui.add_space(8.0 + 26.0);

                ui.add_space(12.0);
                if ui
                    .add(egui::Button::new(egui::RichText::new("Play").size(18.0)))
                    .clicked()
                {
                    play = true;
                }
                ui.add_space(4.0);
            });
        });

        play
    }
}
