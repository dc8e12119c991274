//! Router-level tests driving the HTTP surface without a socket.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use std::sync::Arc;
use strategy_coach::coach::RuleBasedCoach;
use strategy_coach::config::Config;
use strategy_coach::http::{AppState, router};
use strategy_coach::store::CascadeStore;
use tower::ServiceExt;

fn test_router() -> axum::Router {
    router(test_state(Config::default()))
}

fn test_state(config: Config) -> AppState {
    AppState::new(
        Arc::new(config),
        Arc::new(RuleBasedCoach::instant()),
        Arc::new(CascadeStore::new()),
    )
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_responds_ok() {
    let response = test_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn info_lists_the_five_steps() {
    let response = test_router()
        .oneshot(Request::builder().uri("/info").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let steps = body["coach"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0]["key"], "winningAspiration");
    assert_eq!(steps[0]["minChars"], 50);
    assert_eq!(steps[1]["minChars"], 40);
}

#[tokio::test]
async fn feedback_wraps_response_in_envelope() {
    let request = post_json(
        "/coach/feedback",
        json!({
            "step": "winningAspiration",
            "cascade": { "winningAspiration": "Win rural pharmacy delivery in three states by 2027" }
        }),
    );
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["stepName"], "Winning Aspiration");
    assert_eq!(body["data"]["questions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_step_is_a_client_error() {
    let request = post_json(
        "/coach/feedback",
        json!({ "step": "somethingElse", "cascade": {} }),
    );
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "unknown_step");
}

#[tokio::test]
async fn validate_returns_errors_as_data() {
    let request = post_json(
        "/coach/validate",
        json!({ "step": "winningAspiration", "text": "be the best" }),
    );
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["valid"], false);
    assert_eq!(body["data"]["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn cascade_records_are_owner_scoped() {
    let app = test_router();

    let mut request = post_json("/cascades", json!({ "name": "Q3 plan" }));
    request
        .headers_mut()
        .insert("x-owner-id", "alice".parse().unwrap());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["name"], "Q3 plan");

    // Same id under another owner reads as missing.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/cascades/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let mut request = Request::builder()
        .uri(format!("/cascades/{id}"))
        .body(Body::empty())
        .unwrap();
    request
        .headers_mut()
        .insert("x-owner-id", "alice".parse().unwrap());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let mut request = post_json(
        &format!("/cascades/{id}"),
        json!({ "cascade": { "howToWin": "same-day underwriting" } }),
    );
    *request.method_mut() = axum::http::Method::PATCH;
    request
        .headers_mut()
        .insert("x-owner-id", "alice".parse().unwrap());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["cascade"]["howToWin"], "same-day underwriting");

    let mut request = Request::builder()
        .method("DELETE")
        .uri(format!("/cascades/{id}"))
        .body(Body::empty())
        .unwrap();
    request
        .headers_mut()
        .insert("x-owner-id", "alice".parse().unwrap());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn export_is_a_plain_text_attachment() {
    let request = post_json(
        "/export",
        json!({
            "name": "North Plan",
            "cascade": { "winningAspiration": "Win rural delivery" },
            "coachComments": [
                { "step": "Winning Aspiration", "message": "Add a timeframe." }
            ]
        }),
    );
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"strategy-cascade.txt\""
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("North Plan"));
    assert!(text.contains("Win rural delivery"));
    assert!(text.contains("[Winning Aspiration] Add a timeframe."));
}

#[tokio::test]
async fn bearer_token_guards_everything_but_health() {
    let mut config = Config::default();
    config.server.bearer_token = Some("secret".to_string());
    let app = router(test_state(config));

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/info").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/info")
                .header(header::AUTHORIZATION, "Bearer secret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
