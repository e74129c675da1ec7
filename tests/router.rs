//! Drives the pricing page router end to end.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use pricing_page::web::{router, AppState, PageSettings};
use pricing_page::FeatureUniverse;

fn app() -> Router {
    router(AppState::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("router should respond");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    send(
        app,
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
}

async fn select(plan: &str) -> StatusCode {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/plans/select")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("plan={plan}")))
        .expect("request");
    send(app(), request).await.0
}

#[tokio::test]
async fn initial_load_is_monthly_light_and_closed() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<div class="page theme-light">"#));
    assert!(body.contains("$229"));
    assert!(body.contains("$459"));
    assert!(body.contains("50% off"));
    assert!(body.contains("Try Now"));
    assert!(!body.contains("<dialog"));
}

#[tokio::test]
async fn switching_to_annual_updates_numeric_plans() {
    let (status, body) = get(app(), "/?billing=annual").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("$2290"));
    assert!(body.contains("$4590"));
    assert!(body.contains("$4990"));
    assert!(!body.contains("$229<"));
    assert!(body.contains(r#"<span class="literal">Try Now</span>"#));
    assert!(body.contains(r#"<span class="literal">Contact Us</span>"#));
}

#[tokio::test]
async fn comparison_dialog_keeps_billing_and_theme() {
    let (status, body) = get(app(), "/?billing=annual&theme=dark&compare=true").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<dialog open"));
    assert!(body.contains(r#"<div class="page theme-dark">"#));
    assert!(body.contains(r#"href="/?billing=annual&amp;theme=dark&amp;compare=false""#));
    assert!(body.contains("Private Slack Channel</td>"));
}

#[tokio::test]
async fn first_plan_rows_drop_other_features() {
    let settings = PageSettings {
        universe: FeatureUniverse::FirstPlanOnly,
        ..PageSettings::default()
    };
    let app = router(AppState::new(settings));
    let (status, body) = get(app, "/?compare=true").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<td>25+ data sources</td>"));
    assert!(!body.contains("<td>Private Slack Channel</td>"));
}

#[tokio::test]
async fn unknown_query_values_are_rejected() {
    let (status, _) = get(app(), "/?billing=weekly").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(app(), "/?theme=sepia").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn selecting_plans() {
    assert_eq!(select("Growth").await, StatusCode::NO_CONTENT);
    assert_eq!(select("Enterprise").await, StatusCode::NO_CONTENT);
    assert_eq!(select("Platinum").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn plans_api_follows_billing_cycle() {
    let (status, body) = get(app(), "/api/plans?billing=annual").await;
    assert_eq!(status, StatusCode::OK);

    let plans: Value = serde_json::from_str(&body).expect("json body");
    let plans = plans.as_array().expect("array of plans");
    assert_eq!(plans.len(), 4);

    let growth = plans
        .iter()
        .find(|plan| plan["name"] == "Growth")
        .expect("growth plan");
    assert_eq!(growth["price"], 2290);
    assert_eq!(growth["original_price"], 4590);

    let trial = plans
        .iter()
        .find(|plan| plan["name"] == "Trial")
        .expect("trial plan");
    assert_eq!(trial["price"], "Try Now");
    assert!(trial.get("original_price").is_none());
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, body) = get(app(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
