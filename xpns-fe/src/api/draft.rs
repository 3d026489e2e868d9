//! Draft editing endpoints
//!
//! The draft lives server-side for the editing session; the form UI
//! patches individual fields as the user edits.

use axum::{extract::State, Json};
use tracing::debug;

use xpns_common::{DraftPatch, ExpenseDraft};

use crate::AppState;

/// GET /api/draft
pub async fn get_draft(State(state): State<AppState>) -> Json<ExpenseDraft> {
    Json(state.form.read().await.current().clone())
}

/// PATCH /api/draft
///
/// Applies a partial update. Unknown fields and out-of-enumeration
/// categories are rejected by deserialization (422) before they reach
/// the form state.
pub async fn patch_draft(
    State(state): State<AppState>,
    Json(patch): Json<DraftPatch>,
) -> Json<ExpenseDraft> {
    let mut form = state.form.write().await;
    form.apply(patch);
    debug!(
        submittable = form.current().is_submittable(),
        "Draft updated"
    );
    Json(form.current().clone())
}

/// POST /api/draft/reset
pub async fn reset_draft(State(state): State<AppState>) -> Json<ExpenseDraft> {
    let mut form = state.form.write().await;
    form.reset();
    Json(form.current().clone())
}
