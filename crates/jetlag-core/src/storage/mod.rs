mod config;

pub use config::{Config, DebtConfig, DisplayConfig, WindowConfig};

use std::path::PathBuf;

/// Returns `~/.config/jetlag[-dev]/` based on JETLAG_ENV.
///
/// Set JETLAG_ENV=dev to use the development config directory. The
/// directory is not created; a missing config file simply means defaults.
pub fn config_dir() -> PathBuf {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("JETLAG_ENV").unwrap_or_else(|_| "production".to_string());

    if env == "dev" {
        base_dir.join("jetlag-dev")
    } else {
        base_dir.join("jetlag")
    }
}

/// Config file location: `$JETLAG_CONFIG` if set, otherwise
/// `config.toml` inside [`config_dir`].
pub fn config_path() -> PathBuf {
    match std::env::var_os("JETLAG_CONFIG") {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => config_dir().join("config.toml"),
    }
}
