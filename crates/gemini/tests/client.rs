//! Tests for `GeminiClient` against a local stand-in for the REST API.
//!
//! Each test binds an Axum server on an ephemeral port that replays a canned
//! `generateContent` response, then points the client at it.

use assert_matches::assert_matches;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use taskdeck_gemini::{GeminiClient, GeminiConfig, GeminiError, GenerativeModel, UpstreamErrorKind};

const MODEL: &str = "gemini-test";

/// Serve `router` on 127.0.0.1 and return its base URL.
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1beta")
}

fn client(base: String, key: Option<&str>) -> GeminiClient {
    GeminiClient::new(GeminiConfig::new(key.map(String::from), MODEL, base)).unwrap()
}

fn route(status: StatusCode, body: Value) -> Router {
    Router::new().route(
        "/v1beta/models/{method}",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    )
}

// ---------------------------------------------------------------------------
// Test: successful completion returns the candidate text
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_returns_candidate_text() {
    let router = Router::new().route(
        "/v1beta/models/{method}",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            assert_eq!(headers["x-goog-api-key"], "secret");
            let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap().to_string();
            Json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": format!("echo: {prompt}")}]},
                    "finishReason": "STOP"
                }]
            }))
        }),
    );
    let base = spawn_server(router).await;

    let text = client(base, Some("secret")).generate("ping").await.unwrap();
    assert_eq!(text, "echo: ping");
}

// ---------------------------------------------------------------------------
// Test: missing key fails without any HTTP call
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_key_fails_fast() {
    let client = client("http://127.0.0.1:9/v1beta".into(), None);
    let err = client.generate("ping").await.unwrap_err();
    assert_matches!(err, GeminiError::MissingApiKey);
    assert_eq!(err.kind(), UpstreamErrorKind::MissingApiKey);
}

// ---------------------------------------------------------------------------
// Test: error bodies are parsed into structured kinds
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_key_error_is_structured() {
    let base = spawn_server(route(
        StatusCode::BAD_REQUEST,
        json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT",
                "details": [{"reason": "API_KEY_INVALID"}]
            }
        }),
    ))
    .await;

    let err = client(base, Some("bad")).generate("ping").await.unwrap_err();
    assert_matches!(
        &err,
        GeminiError::Api { status: 400, reason: Some(reason), .. } if reason == "API_KEY_INVALID"
    );
    assert_eq!(err.kind(), UpstreamErrorKind::InvalidApiKey);
}

#[tokio::test]
async fn unknown_model_maps_to_model_not_found() {
    let base = spawn_server(route(
        StatusCode::NOT_FOUND,
        json!({
            "error": {
                "code": 404,
                "message": "models/gemini-test is not found for API version v1beta",
                "status": "NOT_FOUND"
            }
        }),
    ))
    .await;

    let err = client(base, Some("k")).generate("ping").await.unwrap_err();
    assert_eq!(err.kind(), UpstreamErrorKind::ModelNotFound);
}

#[tokio::test]
async fn server_error_is_unclassified() {
    let base = spawn_server(route(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": {"code": 500, "message": "Internal error", "status": "INTERNAL"}}),
    ))
    .await;

    let err = client(base, Some("k")).generate("ping").await.unwrap_err();
    assert_eq!(err.kind(), UpstreamErrorKind::Other);
}

// ---------------------------------------------------------------------------
// Test: a response with no text is reported with its finish reason
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blocked_response_is_empty_response_error() {
    let base = spawn_server(route(
        StatusCode::OK,
        json!({"candidates": [{"finishReason": "SAFETY"}]}),
    ))
    .await;

    let err = client(base, Some("k")).generate("ping").await.unwrap_err();
    assert_matches!(err, GeminiError::EmptyResponse(reason) if reason == "SAFETY");
}

#[test]
fn model_name_comes_from_config() {
    let client = client("http://localhost/v1beta".into(), Some("k"));
    assert_eq!(client.model_name(), MODEL);
}
