use crate::{
    ApiSettings, DatabaseSettings, LoggingSettings, RawSettings, RawUploadSettings,
    UserListSettings,
};
use color_eyre::eyre::{Report, Result, bail};
use std::path::{PathBuf, absolute};

/// Validated settings. Only built from [`RawSettings`], never deserialised directly.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database: DatabaseSettings,
    pub api: ApiSettings,
    pub users: UserListSettings,
    pub uploads: UploadSettings,
    pub logging: LoggingSettings,
}

/// Where uploaded photos live on disk and under which URL prefix they are served.
#[derive(Debug, Clone)]
pub struct UploadSettings {
    /// Absolute path of the upload directory.
    pub folder: PathBuf,
    /// URL prefix without trailing slash, e.g. `/uploads`.
    pub public_prefix: String,
}

impl TryFrom<RawSettings> for AppSettings {
    type Error = Report;

    fn try_from(raw: RawSettings) -> Result<Self> {
        if raw.users.page_size == 0 {
            bail!("users.page_size must be at least 1");
        }

        Ok(Self {
            database: raw.database,
            api: raw.api,
            users: raw.users,
            uploads: raw.uploads.try_into()?,
            logging: raw.logging,
        })
    }
}

impl TryFrom<RawUploadSettings> for UploadSettings {
    type Error = Report;

    fn try_from(raw: RawUploadSettings) -> Result<Self> {
        let prefix = raw.public_prefix.trim_end_matches('/');
        if !prefix.starts_with('/') {
            bail!("uploads.public_prefix must start with '/': {}", raw.public_prefix);
        }

        Ok(Self {
            folder: absolute(&raw.folder)?,
            public_prefix: prefix.to_owned(),
        })
    }
}

impl AppSettings {
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
