mod app;
mod dataset;
mod host;
mod paths;
mod settings;
mod state;

use std::fs::{self, File};
use std::process::ExitCode;

use simplelog::{Config, LevelFilter, WriteLogger};

use settings::DemoSettings;

fn init_logging() {
    paths::rotate_logs();

    let Some(log_path) = paths::log_file() else {
        return;
    };
    if let Some(parent) = log_path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match File::create(&log_path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Failed to initialize logger: {e}");
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {e}", log_path.display()),
    }
}

fn load_settings() -> DemoSettings {
    let Some(path) = paths::settings_file() else {
        log::warn!("No config directory, using default settings");
        return DemoSettings::default();
    };
    if !path.exists() {
        let defaults = DemoSettings::default();
        if let Err(e) = defaults.save(&path) {
            log::warn!("Failed to write default settings to {}: {e}", path.display());
        }
        return defaults;
    }
    match DemoSettings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Invalid settings in {}: {e}, using defaults", path.display());
            DemoSettings::default()
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let settings = load_settings();

    match app::run(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Demo exited with error: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
