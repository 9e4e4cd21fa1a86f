mod app;
mod colors;
mod config;
mod ui;

use clap::Parser;
use common::logger::init_logger;
use eframe::egui;

use app::ArcadeApp;
use config::GameType;

#[derive(Parser, Debug)]
#[command(name = "arcade_client", about = "Grid snake and a flappy bird clone")]
struct Args {
    /// Seed for the session RNG, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Jump straight into a game instead of the menu
    #[arg(long, value_enum)]
    game: Option<GameType>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(None);

    let config_manager = match args.config.as_deref() {
        Some(path) => config::config_manager_at(path),
        None => config::get_config_manager(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 820.0])
            .with_title("Arcade Games"),
        ..Default::default()
    };

    eframe::run_native(
        "Arcade Games",
        options,
        Box::new(move |_cc| Ok(Box::new(ArcadeApp::new(config_manager, args.seed, args.game)))),
    )?;

    Ok(())
}
