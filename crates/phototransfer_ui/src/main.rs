//! Photo Transfer - Main entry point
//!
//! Handles:
//! - Configuration loading
//! - Application-level logging initialization
//! - Directory creation
//! - Application launch

use std::path::PathBuf;

use phototransfer_core::config::ConfigManager;
use phototransfer_core::logging::init_tracing_with_file;

mod app;
mod handlers;
mod pages;
mod theme;
mod workers;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> iced::Result {
    // Config first, it names the logs folder
    let config_path = default_config_path();
    let mut config_manager = ConfigManager::new(&config_path);

    let config_error = config_manager.load_or_create().err();
    if let Some(ref e) = config_error {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    let _log_guard = init_tracing_with_file(
        config_manager.settings().logging.level,
        &config_manager.logs_folder(),
    );

    tracing::info!("Photo Transfer starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", phototransfer_core::version());
    if let Some(e) = config_error {
        tracing::warn!("Config not loaded, running on defaults: {}", e);
    }

    if let Err(e) = config_manager.ensure_dirs_exist() {
        tracing::error!("Failed to create directories: {}", e);
        eprintln!("Warning: Failed to create directories: {}", e);
    }

    iced::application(
        move || App::boot(config_manager.clone()),
        App::update,
        App::view,
    )
    .title("Photo Transfer")
    .subscription(App::subscription)
    .window_size((940.0, 680.0))
    .run()
}
