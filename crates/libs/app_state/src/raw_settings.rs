use serde::Deserialize;
use std::path::PathBuf;

/// Settings as they appear in `config/settings.yaml`, before paths are resolved.
#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub database: DatabaseSettings,
    pub api: ApiSettings,
    pub users: UserListSettings,
    pub uploads: RawUploadSettings,
    pub logging: LoggingSettings,
}

/// Database connection and pool configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Seconds.
    pub max_lifetime: u64,
    /// Seconds.
    pub idle_timeout: u64,
    /// Seconds.
    pub acquire_timeout: u64,
}

/// Configuration for the HTTP server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
    pub public_url: String,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UserListSettings {
    /// Number of user cards per listing page, shared by every listing route.
    pub page_size: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawUploadSettings {
    pub folder: PathBuf,
    pub public_prefix: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}
