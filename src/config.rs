// std imports
use std::path::PathBuf;

// third-party imports
use once_cell::sync::{Lazy, OnceCell};

// local imports
use crate::{
    error::Result,
    settings::{Settings, Source},
};

// ---

pub const APP_NAME: &str = "wgrep";
pub const CONFIG_ENV: &str = "WGREP_CONFIG";

static CONFIG: OnceCell<Settings> = OnceCell::new();
static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Returns the installed settings, or the defaults if none were installed.
pub fn get() -> &'static Settings {
    CONFIG.get().unwrap_or_else(|| default())
}

pub fn default() -> &'static Settings {
    &DEFAULT
}

/// Loads settings from the embedded defaults and the user configuration file.
pub fn load() -> Result<Settings> {
    Settings::load(sources(std::env::var_os(CONFIG_ENV).map(PathBuf::from), dirs::config_dir()))
}

/// Resolves the user configuration source.
///
/// An explicit path must exist, an empty one disables the user configuration.
/// Otherwise `config.{yaml,toml,json}` is looked up in the application config directory.
pub fn sources(explicit: Option<PathBuf>, config_dir: Option<PathBuf>) -> Vec<Source> {
    match explicit {
        Some(path) if path.as_os_str().is_empty() => Vec::new(),
        Some(path) => vec![Source::File(path)],
        None => config_dir
            .map(|dir| Source::OptionalFile(dir.join(APP_NAME).join("config")))
            .into_iter()
            .collect(),
    }
}

pub mod global {
    use super::*;

    /// Installs process-wide settings, only the first call has effect.
    pub fn initialize(settings: Settings) {
        if CONFIG.set(settings).is_err() {
            log::warn!("settings are already initialized");
        }
    }
}
