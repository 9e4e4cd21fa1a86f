use common::games::snake::SnakeSettings;
use common::games::SessionRng;
use common::log;
use eframe::egui;

use crate::config::{ClientConfigManager, Config, GameType};
use crate::ui::{FlappyGameUi, GameUiAction, MenuAction, MenuUi, SnakeGameUi};

enum Screen {
    Menu,
    Snake(SnakeGameUi),
    Flappy(FlappyGameUi),
}

pub struct ArcadeApp {
    screen: Screen,
    menu: MenuUi,
    config_manager: ClientConfigManager,
    config: Config,
    seed: Option<u64>,
    snake_high_score: u32,
    flappy_high_score: u32,
}

impl ArcadeApp {
    pub fn new(
        config_manager: ClientConfigManager,
        seed: Option<u64>,
        launch_game: Option<GameType>,
    ) -> Self {
        let config = config_manager.get_config().unwrap_or_else(|e| {
            log!("Using default config: {}", e);
            Config::default()
        });

        let mut app = Self {
            screen: Screen::Menu,
            menu: MenuUi::new(),
            config_manager,
            config,
            seed,
            snake_high_score: 0,
            flappy_high_score: 0,
        };

        if let Some(game) = launch_game {
            app.start_game(game);
        }
        app
    }

    fn session_rng(&self) -> SessionRng {
        match self.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        }
    }

    fn start_game(&mut self, game: GameType) {
        self.config.last_game = Some(game);
        self.save_config();

        let rng = self.session_rng();
        log!("Starting {:?} (seed {})", game, rng.seed());

        self.screen = match game {
            GameType::Snake => {
                let settings = SnakeSettings {
                    grid_size: self.config.snake.grid_size as usize,
                    difficulty: self.config.snake.difficulty,
                };
                Screen::Snake(SnakeGameUi::new(
                    settings,
                    self.config.snake.color,
                    self.snake_high_score,
                    rng,
                ))
            }
            GameType::Flappy => Screen::Flappy(FlappyGameUi::new(
                self.config.flappy.difficulty,
                self.flappy_high_score,
                rng,
            )),
        };
    }

    fn save_config(&self) {
        if let Err(e) = self.config_manager.set_config(&self.config) {
            log!("Failed to save config: {}", e);
        }
    }
}

impl eframe::App for ArcadeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut play: Option<GameType> = None;
        let mut leave = false;
        let mut config_changed = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            match &mut self.screen {
                Screen::Menu => {
                    let before = self.config.clone();
                    if let Some(MenuAction::Play(game)) = self.menu.render_menu(
                        ui,
                        &mut self.config,
                        self.snake_high_score,
                        self.flappy_high_score,
                    ) {
                        play = Some(game);
                    }
                    config_changed = self.config != before;
                }
                Screen::Snake(game_ui) => {
                    let action = game_ui.render_game(ui, ctx);
                    self.snake_high_score = game_ui.high_score();
                    if self.config.snake.difficulty != game_ui.difficulty() {
                        self.config.snake.difficulty = game_ui.difficulty();
                        config_changed = true;
                    }
                    leave = action == Some(GameUiAction::Leave);
                }
                Screen::Flappy(game_ui) => {
                    let action = game_ui.render_game(ui, ctx);
                    self.flappy_high_score = game_ui.high_score();
                    if self.config.flappy.difficulty != game_ui.difficulty() {
                        self.config.flappy.difficulty = game_ui.difficulty();
                        config_changed = true;
                    }
                    leave = action == Some(GameUiAction::Leave);
                }
            }
        });

        if config_changed {
            self.save_config();
        }
        if leave {
            self.screen = Screen::Menu;
        }
        if let Some(game) = play {
            self.start_game(game);
        }
    }
}
