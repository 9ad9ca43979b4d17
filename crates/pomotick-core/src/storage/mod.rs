mod config;

pub use config::{Config, NotificationsConfig, ScheduleConfig, UiConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the settings directory, creating it if needed.
///
/// `POMOTICK_HOME` wins when set. Otherwise `~/.config/pomotick[-dev]/`
/// based on `POMOTICK_ENV` (set `POMOTICK_ENV=dev` for a development
/// directory).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("POMOTICK_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("POMOTICK_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("pomotick-dev")
            } else {
                base_dir.join("pomotick")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
