//! Submission endpoint
//!
//! Snapshots the current draft and runs the pipeline on it. The advisory
//! in-flight guard lives here, on the caller side; the pipeline itself
//! imposes no mutual exclusion.

use std::sync::atomic::Ordering;

use axum::{extract::State, http::StatusCode, Json};
use tracing::warn;

use xpns_common::SubmissionResult;

use crate::AppState;

/// POST /api/submit
///
/// Always answers with a `SubmissionResult` body; pipeline failures are
/// result values (HTTP 200), not HTTP faults. A submission racing an
/// in-flight one is refused with 409 before the pipeline is invoked.
pub async fn submit_expense(State(state): State<AppState>) -> (StatusCode, Json<SubmissionResult>) {
    if state
        .submitting
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        warn!("Refusing concurrent submission");
        return (
            StatusCode::CONFLICT,
            Json(SubmissionResult::failure(
                "A submission is already in progress",
            )),
        );
    }

    // Snapshot under the read lock so a concurrent PATCH cannot tear the
    // payload mid-submission.
    let draft = state.form.read().await.current().clone();
    let result = state.client.submit(&draft).await;

    // Only success clears the form; a failed draft stays editable.
    if result.success {
        state.form.write().await.reset();
    }

    state.submitting.store(false, Ordering::SeqCst);
    (StatusCode::OK, Json(result))
}
