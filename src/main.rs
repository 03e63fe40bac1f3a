// Learning Journey Application
// Main entry point

use anyhow::{anyhow, Result};
use learning_journey::services::settings::SettingsService;
use learning_journey::ui_egui::JourneyApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Learning Journey");

    let settings_service = SettingsService::from_environment();
    log::info!("Reading settings from {}", settings_service.path().display());
    let settings = settings_service.load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Learning Journey")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Learning Journey",
        options,
        Box::new(move |cc| Ok(Box::new(JourneyApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow!("Failed to run application: {}", e))
}
