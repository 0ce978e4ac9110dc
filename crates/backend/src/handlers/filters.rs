use axum::extract::{Path, State};
use axum::Json;
use contracts::shared::date_range::DateRange;

use crate::state::AppState;

/// Distinct states for the dashboard filter dropdown.
pub async fn list_states(State(app): State<AppState>) -> Json<Vec<String>> {
    Json(app.store.distinct_states())
}

/// Distinct customer ids for the dashboard filter dropdown.
pub async fn list_customer_ids(State(app): State<AppState>) -> Json<Vec<String>> {
    Json(app.store.distinct_customer_ids())
}

/// Order date bounds for one state. Both bounds are empty strings when the
/// state has no records.
pub async fn date_range_for_state(
    State(app): State<AppState>,
    Path(state): Path<String>,
) -> Json<DateRange> {
    Json(app.store.date_range_for_state(&state))
}

/// Order date bounds for one customer, same contract as for states.
pub async fn date_range_for_customer(
    State(app): State<AppState>,
    Path(customer_id): Path<String>,
) -> Json<DateRange> {
    Json(app.store.date_range_for_customer(&customer_id))
}
