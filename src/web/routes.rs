use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::state::{AppState, ViewState};
use super::views::render_pricing_page;
use crate::catalog::{self, BillingCycle, Plan};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pricing_page))
        .route("/plans/select", post(select_plan))
        .route("/api/plans", get(list_plans))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn pricing_page(
    State(state): State<AppState>,
    Query(view): Query<ViewState>,
) -> Html<String> {
    debug!(
        billing = ?view.billing,
        theme = ?view.theme,
        compare = view.comparison_open,
        "rendering pricing page"
    );
    Html(render_pricing_page(view, state.settings()))
}

#[derive(Debug, Deserialize)]
struct SelectPlanRequest {
    plan: String,
}

async fn select_plan(
    Form(request): Form<SelectPlanRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let name = request.plan.trim();
    // Plan names do not depend on the billing cycle.
    match catalog::find_plan(BillingCycle::default(), name) {
        Some(plan) => {
            info!(plan = %plan.name, "plan selected");
            Ok(StatusCode::NO_CONTENT)
        }
        None => {
            warn!(plan = %name, "selection for unknown plan");
            Err((StatusCode::NOT_FOUND, format!("Unknown plan `{name}`")))
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PlansQuery {
    #[serde(default)]
    billing: BillingCycle,
}

async fn list_plans(Query(query): Query<PlansQuery>) -> Json<Vec<Plan>> {
    Json(catalog::plans(query.billing))
}

async fn healthz() -> &'static str {
    "ok"
}
