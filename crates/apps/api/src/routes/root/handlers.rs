use axum::extract::State;
use axum::http::StatusCode;
use common_services::api::users::error::UsersError;
use sqlx::SqlitePool;
use tracing::error;

/// Readiness probe: 200 "OK" while the database answers, 503 otherwise.
pub async fn health_check(State(pool): State<SqlitePool>) -> Result<&'static str, StatusCode> {
    match sqlx::query("SELECT 1").fetch_one(&pool).await {
        Ok(_) => Ok("OK"),
        Err(e) => {
            error!("Health check failed: database connection error: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Anything no route claims, including a known path with the wrong method.
pub async fn not_found() -> UsersError {
    UsersError::PageNotFound
}
