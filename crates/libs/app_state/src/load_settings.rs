use crate::{AppSettings, RawSettings};
use color_eyre::eyre::{Context, Result};
use std::path::Path;
use tracing::info;

/// Load settings from `config/settings.yaml`, overridden by `APP__*` environment variables.
pub fn load_app_settings() -> Result<AppSettings> {
    load_settings_from_path(Path::new("config/settings.yaml"), Some(Path::new(".env")))
}

/// Load settings from a specific yaml file.
///
/// When `env_file` is given it is read into the process environment first, so values in it
/// take part in the `APP__` override layer.
pub fn load_settings_from_path(config_path: &Path, env_file: Option<&Path>) -> Result<AppSettings> {
    if let Some(env_file) = env_file {
        dotenv::from_path(env_file).ok();
    }
    let config_path = config_path
        .canonicalize()
        .wrap_err_with(|| format!("Settings file not found: {}", config_path.display()))?;
    info!("Loading settings from {}", config_path.display());

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    AppSettings::try_from(raw_settings)
}
