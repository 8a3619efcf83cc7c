use app_state::UploadSettings;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// Uploaded profile photos on disk.
///
/// Files are stored flat in one folder and referenced from the database by their public URL
/// path (`<public_prefix>/<file name>`).
#[derive(Debug, Clone)]
pub struct PhotoStore {
    folder: PathBuf,
    public_prefix: String,
}

impl PhotoStore {
    pub fn new(folder: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            public_prefix: public_prefix.into(),
        }
    }

    #[must_use]
    pub fn from_settings(settings: &UploadSettings) -> Self {
        Self::new(&settings.folder, &settings.public_prefix)
    }

    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Write `bytes` under a fresh unique name that keeps the extension of `original_name`.
    /// Returns the public path to store on the user row.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> io::Result<String> {
        fs::create_dir_all(&self.folder).await?;
        let file_name = unique_file_name(original_name);
        fs::write(self.folder.join(&file_name), bytes).await?;
        Ok(format!("{}/{}", self.public_prefix, file_name))
    }

    /// Remove the file behind a public path. A missing file is not an error.
    pub async fn delete(&self, public_path: &str) -> io::Result<()> {
        let Some(file_path) = self.local_path(public_path) else {
            return Ok(());
        };
        match fs::remove_file(&file_path).await {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            result => result,
        }
    }

    /// File on disk for a public path. Only the last path component is used, so a stored path
    /// can never point outside the upload folder.
    #[must_use]
    pub fn local_path(&self, public_path: &str) -> Option<PathBuf> {
        let file_name = Path::new(public_path).file_name()?;
        Some(self.folder.join(file_name))
    }
}

fn unique_file_name(original_name: &str) -> String {
    let id = Uuid::new_v4();
    match Path::new(original_name).extension().and_then(|e| e.to_str()) {
        Some(extension) if !extension.is_empty() => format!("{id}.{extension}"),
        _ => id.to_string(),
    }
}
