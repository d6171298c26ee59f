mod handlers;
mod page;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::SelectionStore;

/// Shared state for the hosting UI.
///
/// `cycle` serializes interaction cycles: one load → collect → save pass
/// finishes before the next starts.
#[derive(Clone)]
pub struct AppState {
    store: Arc<SelectionStore>,
    cycle: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: SelectionStore) -> Self {
        Self {
            store: Arc::new(store),
            cycle: Arc::new(Mutex::new(())),
        }
    }
}

pub fn create_router(store: SelectionStore) -> Router {
    let api = Router::new()
        .route("/snapshot", get(handlers::get_snapshot))
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::show_form))
        .route("/save", post(handlers::save_selections))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(store))
}
