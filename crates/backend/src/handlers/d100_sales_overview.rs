use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::dashboards::d100_sales_overview::SalesOverviewData;
use serde::Deserialize;

use crate::dashboards::d100_sales_overview::service::{self, DashboardQuery};
use crate::shared::dates::parse_iso_date;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardParams {
    pub state: String,
    pub from_date: String,
    pub to_date: String,
    #[serde(default)]
    pub customer_id: Option<String>,
}

pub async fn get_dashboard_data(
    State(app): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<SalesOverviewData>, StatusCode> {
    let from = match parse_iso_date(&params.from_date) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!("Invalid fromDate '{}': {}", params.from_date, e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };
    let to = match parse_iso_date(&params.to_date) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!("Invalid toDate '{}': {}", params.to_date, e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    // An empty customerId means "all customers", same as omitting it.
    let customer_id = params.customer_id.as_deref().filter(|id| !id.is_empty());

    let query = DashboardQuery {
        state: &params.state,
        from,
        to,
        customer_id,
    };

    Ok(Json(service::compute_overview(&app.store, &query)))
}
