mod app;
mod chart;
mod color;
mod config;
mod controller;
mod data;
mod notify;
mod state;
mod ui;

use app::ChartpadApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        log::warn!("{e:#}; using default configuration");
        AppConfig::default()
    });

    let app = match ChartpadApp::new(&config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Chartpad – Dataset Charts",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
