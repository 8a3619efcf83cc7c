use app_state::AppSettings;
use color_eyre::eyre::Result;
use std::net::TcpListener;
use tempfile::TempDir;

/// Point a copy of the base settings at a fresh port, database file and upload folder.
///
/// The returned `TempDir` owns the database and the uploads; keep it alive for the run.
pub fn create_test_settings(base_settings: &AppSettings) -> Result<(AppSettings, TempDir)> {
    let mut settings = base_settings.clone();
    let data_dir = TempDir::new()?;

    let port = get_free_port()?;
    settings.api.host = "127.0.0.1".to_owned();
    settings.api.port = port;
    settings.api.public_url = format!("http://127.0.0.1:{port}");

    settings.database.url = format!(
        "sqlite://{}?mode=rwc",
        data_dir.path().join("gallery_test.db").display()
    );
    settings.uploads.folder = data_dir.path().join("uploads");

    println!("DB URL: {}", settings.database.url);

    Ok((settings, data_dir))
}

pub fn get_free_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}
