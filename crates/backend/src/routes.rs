use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

/// All application routes.
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // FILTER POPULATION
        // ========================================
        .route("/api/states", get(handlers::filters::list_states))
        .route(
            "/api/customer-ids",
            get(handlers::filters::list_customer_ids),
        )
        .route(
            "/api/date-range/:state",
            get(handlers::filters::date_range_for_state),
        )
        .route(
            "/api/date-range-customer/:customer_id",
            get(handlers::filters::date_range_for_customer),
        )
        // ========================================
        // DASHBOARDS
        // ========================================
        // D100 Sales Overview Dashboard
        .route(
            "/api/dashboard-data",
            get(handlers::d100_sales_overview::get_dashboard_data),
        )
        .fallback_service(ServeDir::new("dist"))
        .with_state(state)
}
