// In crates/app-config/src/lib.rs

use config::{Config, Environment, File};
use std::path::Path;

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AlphaVantageSettings, OutputSize, ReportSettings, Settings};

/// Loads the application settings from the `config/` directory.
pub fn load_settings() -> Result<Settings> {
    load_settings_from("config")
}

/// Loads the application settings from `config_dir`.
///
/// Sources are layered, later ones winning:
/// 1. `base.toml`.
/// 2. An environment-specific file named after `APP_ENVIRONMENT`
///    (e.g., `development.toml`), if present.
/// 3. Environment variables with the `APP` prefix and `__` separator
///    (e.g., `APP__ALPHA_VANTAGE__API_KEY=...`).
pub fn load_settings_from(config_dir: impl AsRef<Path>) -> Result<Settings> {
    let dir = config_dir.as_ref();
    // Get the current environment. Default to "development" if not set.
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let settings = Config::builder()
        .add_source(File::with_name(&dir.join("base").to_string_lossy()))
        .add_source(File::with_name(&dir.join(&environment).to_string_lossy()).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .set_override("app.environment", environment)?
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    validate(&settings)?;

    Ok(settings)
}

fn validate(settings: &Settings) -> Result<()> {
    if settings.alpha_vantage.api_key.trim().is_empty() {
        return Err(Error::Invalid(
            "alpha_vantage.api_key is empty; set APP__ALPHA_VANTAGE__API_KEY".into(),
        ));
    }
    if settings.alpha_vantage.timeout_secs == 0 {
        return Err(Error::Invalid("alpha_vantage.timeout_secs must be positive".into()));
    }
    Ok(())
}
