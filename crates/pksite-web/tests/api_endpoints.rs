//! Integration tests for the HTTP endpoints

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use pksite_types::SiteConfig;
use std::sync::Arc;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, String) {
    let router = pksite_web::create_router(Arc::new(SiteConfig::default()));

    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_index_serves_prerendered_header() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"alt="CA Firm Logo""#));
    assert!(body.contains(r#"aria-label="Open menu""#));
    assert!(body.contains(r#"<script id="pk-config" type="application/json">"#));
    assert!(!body.contains("pk-mobile-panel"));
}

#[tokio::test]
async fn test_menu_endpoint_preserves_order() {
    let (status, json) = get_json("/api/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["primary"], serde_json::json!(["Home", "About Us", "Our Team"]));
    assert_eq!(json["groups"][0]["id"], "services");
    assert_eq!(
        json["groups"][0]["items"],
        serde_json::json!(["Tax Consulting", "Audit & Assurance", "Company Formation"])
    );
    assert_eq!(json["groups"][2]["title"], "Quick Links");
    assert_eq!(json["mobile_trailing"], "Useful Links");
}

#[tokio::test]
async fn test_header_endpoint_renders_hovered_panel() {
    let (status, json) = get_json("/api/header?hover=knowledge").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"]["hovered"], "knowledge");
    assert_eq!(json["state"]["mobile_menu_open"], false);

    let nav = &json["tree"]["children"][0]["children"][1];
    let knowledge = &nav["children"][4];
    assert_eq!(knowledge["group"], "knowledge");
    let links: Vec<_> = knowledge["children"][0]["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["text"].as_str().unwrap())
        .collect();
    assert_eq!(links, vec!["Articles", "Case Studies"]);
}

#[tokio::test]
async fn test_header_endpoint_mobile_state() {
    let (status, json) = get_json("/api/header?menu=true&expand=services").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"]["accordion"]["services"], true);
    assert_eq!(json["state"]["accordion"]["knowledge"], false);
    assert_eq!(json["tree"]["children"][1]["type"], "mobile_panel");
}

#[tokio::test]
async fn test_header_endpoint_rejects_unknown_group() {
    let (status, json) = get_json("/api/header?hover=bogus").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("bogus"));
}

#[tokio::test]
async fn test_stylesheet_served() {
    let (status, body) = get("/static/pksite.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("@keyframes pk-slide-in"));
}
