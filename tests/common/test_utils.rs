use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use gemini_relay::{
    gemini::{GeminiClient, GenerativeClient},
    server::{self, AppState, RELAY_PATH},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

pub const TEST_API_KEY: &str = "test-secret-key-123";
pub const TEST_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Upstream path the real client posts to for `TEST_MODEL`
pub fn upstream_path() -> String {
    format!("/v1beta/models/{}:generateContent", TEST_MODEL)
}

/// Router backed by the given generator
pub fn app_with(generator: Arc<dyn GenerativeClient>) -> Router {
    server::router(AppState {
        generator: Some(generator),
    })
}

/// Router whose credential was never configured
pub fn app_without_credential() -> Router {
    server::router(AppState { generator: None })
}

/// Router using the real client against `base_uri` (e.g. a wiremock server)
pub fn app_for_upstream(base_uri: &str) -> Router {
    let client = GeminiClient::new(&format!("{}/v1beta", base_uri), TEST_MODEL, TEST_API_KEY);
    app_with(Arc::new(client))
}

pub fn json_request(method: Method, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(RELAY_PATH)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_prompt(prompt: &str) -> Request<Body> {
    json_request(
        Method::POST,
        &serde_json::json!({ "prompt": prompt }).to_string(),
    )
}

/// Sends `request` and returns status, raw body text and parsed JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let json = serde_json::from_str(&text).unwrap_or(Value::Null);
    (status, text, json)
}
