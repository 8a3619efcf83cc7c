use app_state::AppSettings;
use axum::extract::FromRef;
use common_services::photo_store::PhotoStore;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ApiContext {
    pub pool: SqlitePool,
    pub settings: AppSettings,
    pub photo_store: PhotoStore,
}

impl ApiContext {
    #[must_use]
    pub fn new(pool: SqlitePool, settings: AppSettings) -> Self {
        let photo_store = PhotoStore::from_settings(&settings.uploads);
        Self {
            pool,
            settings,
            photo_store,
        }
    }
}

// Lets handlers extract just the part of the state they need.
impl FromRef<ApiContext> for SqlitePool {
    fn from_ref(state: &ApiContext) -> Self {
        state.pool.clone()
    }
}

impl FromRef<ApiContext> for PhotoStore {
    fn from_ref(state: &ApiContext) -> Self {
        state.photo_store.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}
