use super::*;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use tower::ServiceExt;

use crate::config::Capabilities;
use crate::state::test_helpers::{self, MemoryReports, StubSubcategories};

async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn app_with(reports: Arc<MemoryReports>) -> Router {
    app_with_capabilities(reports, Capabilities::default())
}

fn app_with_capabilities(reports: Arc<MemoryReports>, capabilities: Capabilities) -> Router {
    let subcategories = Arc::new(StubSubcategories::ok(vec![test_helpers::subcategory("behavioral")]));
    api_routes(test_helpers::test_app_state_with(subcategories, reports, capabilities))
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, _) = send(api_routes(test_helpers::test_app_state()), Method::GET, "/healthz", "").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn subcategories_route_lists_and_rejects_other_methods() {
    let reports = Arc::new(MemoryReports::default());

    let (status, body) = send(app_with(reports.clone()), Method::GET, "/api/subcategories", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"behavioral\""));

    let (status, body) = send(app_with(reports), Method::POST, "/api/subcategories", "{}").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, r#"{"success":false,"error":"Method not allowed"}"#);
}

#[tokio::test]
async fn disabled_report_routes_answer_501_through_the_router() {
    let reports = Arc::new(MemoryReports::default());

    let (status, body) = send(app_with(reports.clone()), Method::GET, "/api/reports/init", "garbage").await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert!(body.contains("Report init not available in AI Interviewer SaaS."));

    let (status, body) =
        send(app_with(reports.clone()), Method::DELETE, "/api/reports/s-1/ai-analysis", "").await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert!(body.contains("AI analysis not available in AI Interviewer SaaS."));

    assert_eq!(reports.call_count(), 0);
}

#[tokio::test]
async fn disabled_report_init_answers_501_before_buffering_an_oversized_body() {
    let reports = Arc::new(MemoryReports::default());
    let oversized = "x".repeat(3 * 1024 * 1024);

    let (status, body) = send(app_with(reports.clone()), Method::POST, "/api/reports/init", &oversized).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body, r#"{"success":false,"error":"Report init not available in AI Interviewer SaaS."}"#);
    assert_eq!(reports.call_count(), 0);
}

#[tokio::test]
async fn disabled_ai_analysis_answers_501_for_a_non_utf8_token() {
    let reports = Arc::new(MemoryReports::default());

    let (status, body) = send(app_with(reports.clone()), Method::POST, "/api/reports/%FF/ai-analysis", "").await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body, r#"{"success":false,"error":"AI analysis not available in AI Interviewer SaaS."}"#);
    assert_eq!(reports.call_count(), 0);
}

#[tokio::test]
async fn enabled_report_init_passes_through_the_gate() {
    let reports = Arc::new(MemoryReports::default());
    let enabled = Capabilities { report_init: true, ai_analysis: false };

    let (status, body) =
        send(app_with_capabilities(reports.clone(), enabled), Method::POST, "/api/reports/init", r#"{"session_token":"s-9"}"#)
            .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.contains("\"s-9\""));

    let (status, _) = send(app_with_capabilities(reports, enabled), Method::POST, "/api/reports/s-9/ai-analysis", "").await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn report_lookup_requires_session() {
    let reports = Arc::new(MemoryReports::with(vec![test_helpers::report("s-1")]));
    let (status, body) = send(app_with(reports.clone()), Method::GET, "/api/reports/s-1", "").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("\"success\":false"));
    assert_eq!(reports.call_count(), 0);
}

#[tokio::test]
async fn unknown_api_path_is_404() {
    let (status, _) = send(api_routes(test_helpers::test_app_state()), Method::GET, "/api/nope", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
