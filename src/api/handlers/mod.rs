use std::collections::{HashMap, HashSet};

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Form, Json,
};

use super::page::render_page;
use super::AppState;
use crate::models::*;

/// Banner shown after both files have been written.
pub const SAVED_MESSAGE: &str =
    "Selections saved. Uncheck boxes to clear selections and click Save again.";

// ============================================================
// Error Handling
// ============================================================

/// Log a store fault and return a generic failure to the client.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Toggle Source
// ============================================================

/// Checkbox values from a submitted form.
///
/// Browsers only send checked boxes, so a field's presence is its value and
/// the prior default does not apply. Field names that are not toggle keys
/// are ignored.
struct SubmittedForm {
    checked: HashSet<ToggleKey>,
}

impl SubmittedForm {
    fn new(fields: &HashMap<String, String>) -> Self {
        Self {
            checked: fields.keys().filter_map(|name| ToggleKey::parse(name)).collect(),
        }
    }
}

impl ToggleControls for SubmittedForm {
    fn toggle(&mut self, key: &ToggleKey, _default: bool) -> bool {
        self.checked.contains(key)
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Checklist Form
// ============================================================

pub async fn show_form(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let _cycle = state.cycle.lock().await;

    let prior = state.store.load().map_err(internal_error)?;
    let selection = state.store.collect(&prior, Untouched);

    Ok(Html(render_page(state.store.catalog(), &selection, None)))
}

pub async fn save_selections(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let _cycle = state.cycle.lock().await;

    let prior = state.store.load().map_err(internal_error)?;
    let selection = state
        .store
        .collect(&prior, SubmittedForm::new(&fields));
    state.store.save(&selection).map_err(internal_error)?;

    Ok(Html(render_page(
        state.store.catalog(),
        &selection,
        Some(SAVED_MESSAGE),
    )))
}

// ============================================================
// Snapshot
// ============================================================

pub async fn get_snapshot(
    State(state): State<AppState>,
) -> Result<Json<PersistedSnapshot>, (StatusCode, String)> {
    let _cycle = state.cycle.lock().await;

    state
        .store
        .load_snapshot()
        .map_err(internal_error)?
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "No snapshot saved".to_string()))
}
