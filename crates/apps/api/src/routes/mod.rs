pub mod root;
pub mod users;

use crate::api_state::ApiContext;
use crate::root::handlers::not_found;
use crate::root::router::root_public_router;
use crate::users::router::users_router;
use axum::Router;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(root_public_router())
        .merge(users_router())
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(api_state)
}
