use crate::api_state::ApiContext;
use crate::create_router;
use app_state::AppSettings;
use axum::extract::DefaultBodyLimit;
use color_eyre::Result;
use sqlx::SqlitePool;
use tokio::fs;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Serve the gallery until the process is stopped.
pub async fn serve(pool: SqlitePool, settings: AppSettings) -> Result<()> {
    info!("🚀 Initializing server...");
    let uploads = settings.uploads.clone();
    fs::create_dir_all(&uploads.folder).await?;

    let bind_address = settings.bind_address();
    let max_upload_bytes = settings.api.max_upload_bytes;
    let api_state = ApiContext::new(pool, settings);

    // Uploaded photos are served straight from disk.
    let serve_dir = ServeDir::new(&uploads.folder);

    let app = create_router(api_state)
        .nest_service(&uploads.public_prefix, serve_dir)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http().on_request(()));

    let listener = TcpListener::bind(&bind_address).await?;
    info!("🐸 Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
