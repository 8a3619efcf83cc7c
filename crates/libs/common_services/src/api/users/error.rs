use crate::database::DbError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum UsersError {
    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error("photo storage error")]
    Storage(#[from] std::io::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),

    #[error("User Not Found")]
    UserNotFound(i64),

    #[error("File upload failed.")]
    MissingPhoto,

    #[error("{0}")]
    InvalidForm(String),

    #[error("Invalid form data: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Page Not Found")]
    PageNotFound,
}

fn log_error(error: &UsersError) {
    match error {
        UsersError::Database(e) => error!("Database query failed: {}", e),
        UsersError::Storage(e) => error!("Photo storage failed: {}", e),
        UsersError::Internal(e) => error!("Internal error: {:?}", e),
        UsersError::UserNotFound(id) => warn!("User not found: {}", id),
        UsersError::MissingPhoto => warn!("Add user rejected: no photo uploaded"),
        UsersError::InvalidForm(message) => warn!("Invalid user form: {}", message),
        UsersError::Multipart(e) => warn!("Malformed multipart body: {}", e),
        UsersError::PageNotFound => {}
    }
}

impl IntoResponse for UsersError {
    fn into_response(self) -> Response {
        log_error(&self);

        match self {
            // Server-side failures never leak details to the client.
            Self::Database(_) | Self::Storage(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            Self::UserNotFound(_) | Self::PageNotFound => {
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
            Self::MissingPhoto | Self::InvalidForm(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            Self::Multipart(e) => (e.status(), e.body_text()).into_response(),
        }
    }
}

impl From<DbError> for UsersError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(sql_err) => Self::Database(sql_err),
            DbError::Migrate(err) => Self::Internal(eyre::Report::new(err)),
        }
    }
}
