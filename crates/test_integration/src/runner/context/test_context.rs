use crate::runner::context::context_utils::create_test_settings;
use app_state::{AppSettings, load_settings_from_path};
use color_eyre::eyre::{Result, eyre};
use common_services::database::{get_db_pool, run_migrations};
use reqwest::Client;
use reqwest::redirect::Policy;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// The main context for our integration tests.
#[allow(dead_code)]
pub struct TestContext {
    pub pool: SqlitePool,
    pub settings: AppSettings,
    /// Does not follow redirects, so tests can assert on `303 See Other` directly.
    pub http_client: Client,
    // Private fields for cleanup on Drop
    data_dir: TempDir,
    api_handle: JoinHandle<()>,
}

impl TestContext {
    /// Sets up a dedicated database and upload folder, then starts the API against them.
    pub async fn new() -> Result<Self> {
        info!("Setting up test environment...");

        let settings_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("assets/settings.yaml")
            .canonicalize()?;
        let base_settings = load_settings_from_path(&settings_path, None)?;

        // 1. Generate the settings for this test run
        let (settings, data_dir) = create_test_settings(&base_settings)?;

        // 2. Set up the test database
        let pool = get_db_pool(&settings.database).await?;
        run_migrations(&pool).await?;
        info!("Finished database migrations for {}", settings.database.url);

        // 3. Spawn the API as a background task
        let api_pool = pool.clone();
        let api_settings = settings.clone();
        let api_handle = tokio::spawn(async move {
            if let Err(e) = gallery_api::serve(api_pool, api_settings).await {
                error!("API server failed: {}", e);
            }
        });

        // 4. Wait for the API to be ready to accept traffic
        let http_client = Client::builder().redirect(Policy::none()).build()?;
        Self::wait_for_healthy_api(&settings, &http_client).await?;

        info!("Test environment is ready.");
        Ok(Self {
            pool,
            settings,
            http_client,
            data_dir,
            api_handle,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.api.public_url, path)
    }

    /// Polls the `/health` endpoint until it receives a successful response or times out.
    async fn wait_for_healthy_api(settings: &AppSettings, http_client: &Client) -> Result<()> {
        for attempt in 1..=20 {
            info!("Health check attempt {}...", attempt);
            let health_url = format!("{}/health", &settings.api.public_url);
            match http_client.get(&health_url).send().await {
                Ok(response) if response.status().is_success() => {
                    info!("API is healthy!");
                    return Ok(());
                }
                Ok(response) => {
                    warn!(
                        "API health check returned non-success status: {}",
                        response.status()
                    );
                }
                Err(e) => {
                    warn!("API health check failed: {:?}. Retrying...", e);
                }
            }
            tokio::time::sleep(Duration::from_millis(250)).await;
        }
        Err(eyre!(
            "API did not become healthy within the timeout period."
        ))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.api_handle.abort();
        info!("Teardown complete.");
    }
}
