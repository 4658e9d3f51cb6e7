//! API integration tests for the Gemini chat proxy
//!
//! Drives the real router with axum-test while wiremock plays the upstream
//! generateContent endpoint.

mod common;

use axum::http::{Method, StatusCode};
use common::{GENERATE_PATH, TEST_KEY, mock_gemini_response, server_with_config, test_config, test_server};
use rstest::rstest;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn upstream_call_count(mock_server: &MockServer) -> usize {
    mock_server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}

// ============= Method Handling =============

#[rstest]
#[case(Method::GET)]
#[case(Method::PUT)]
#[case(Method::DELETE)]
#[case(Method::PATCH)]
#[tokio::test]
async fn test_non_post_is_method_not_allowed(#[case] http_method: Method) {
    let mock_server = MockServer::start().await;
    let server = test_server(&mock_server);

    let response = server.method(http_method, "/api/call-gemini").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_text("Method Not Allowed");
    assert_eq!(upstream_call_count(&mock_server).await, 0);
}

#[tokio::test]
async fn test_non_post_ignores_malformed_body() {
    let mock_server = MockServer::start().await;
    let server = test_server(&mock_server);

    let response = server
        .put("/api/call-gemini")
        .text("{ this is not json")
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_non_post_with_oversized_body_is_method_not_allowed() {
    let mock_server = MockServer::start().await;
    let mut config = test_config(&mock_server);
    config.server.body_limit_bytes = 64;
    let server = server_with_config(config, Some(TEST_KEY));

    let response = server
        .get("/api/call-gemini")
        .text("x".repeat(512))
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_text("Method Not Allowed");
    assert_eq!(upstream_call_count(&mock_server).await, 0);
}

// ============= Successful Forwarding =============

#[tokio::test]
async fn test_forwards_prompt_with_empty_history() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", TEST_KEY))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "hello"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_gemini_response("Hi!")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let server = test_server(&mock_server);
    let response = server
        .post("/api/call-gemini")
        .json(&json!({"prompt": "hello", "history": []}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, mock_gemini_response("Hi!"));
}

#[tokio::test]
async fn test_history_order_is_preserved() {
    let mock_server = MockServer::start().await;

    let history = json!([
        {"role": "user", "parts": [{"text": "What is the Enneagram?"}]},
        {"role": "model", "parts": [{"text": "A model of personality."}]},
        {"role": "user", "parts": [{"text": "Tell me more"}, {"text": "briefly"}]},
        {"role": "model", "parts": [{"text": "Nine types."}]}
    ]);

    let mut expected = history.as_array().cloned().unwrap();
    expected.push(json!({"role": "user", "parts": [{"text": "Which type am I?"}]}));

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_json(json!({ "contents": expected })))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_gemini_response("Let's find out.")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let server = test_server(&mock_server);
    let response = server
        .post("/api/call-gemini")
        .json(&json!({"prompt": "Which type am I?", "history": history}))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_success_body_is_relayed_verbatim() {
    let mock_server = MockServer::start().await;
    let upstream_body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Calm."}]}}],"zeta":1,"alpha":{"nested":[3,2,1]}}"#;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(upstream_body, "application/json"))
        .mount(&mock_server)
        .await;

    let server = test_server(&mock_server);
    let response = server
        .post("/api/call-gemini")
        .json(&json!({"prompt": "hello", "history": []}))
        .await;

    response.assert_status_ok();
    response.assert_text(upstream_body);
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn test_configured_model_is_used() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_gemini_response("ok")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server);
    config.upstream.model = "gemini-1.5-pro".to_string();
    let server = server_with_config(config, Some(TEST_KEY));

    server
        .post("/api/call-gemini")
        .json(&json!({"prompt": "hello", "history": []}))
        .await
        .assert_status_ok();
}

// ============= Upstream Failures =============

#[rstest]
#[case(400)]
#[case(403)]
#[case(429)]
#[case(500)]
#[case(503)]
#[tokio::test]
async fn test_upstream_status_is_propagated(#[case] status: u16) {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_json(json!({"error": {"code": status, "message": "upstream detail"}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let server = test_server(&mock_server);
    let response = server
        .post("/api/call-gemini")
        .json(&json!({"prompt": "hello", "history": []}))
        .await;

    response.assert_status(StatusCode::from_u16(status).unwrap());
    response.assert_json(&json!({
        "error": format!("API call failed with status: {}", status)
    }));
}

#[tokio::test]
async fn test_upstream_non_json_success_is_internal_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let server = test_server(&mock_server);
    let response = server
        .post("/api/call-gemini")
        .json(&json!({"prompt": "hello", "history": []}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unreachable_upstream_is_internal_error() {
    let mock_server = MockServer::start().await;
    let mut config = test_config(&mock_server);
    // Nothing listens on the discard port
    config.upstream.base_url = "http://127.0.0.1:9".to_string();
    let server = server_with_config(config, Some(TEST_KEY));

    let response = server
        .post("/api/call-gemini")
        .json(&json!({"prompt": "hello", "history": []}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(!message.contains(TEST_KEY), "error leaked the key: {}", message);
}

#[tokio::test]
async fn test_upstream_timeout_is_internal_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock_gemini_response("late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server);
    config.upstream.timeout_secs = Some(1);
    let server = server_with_config(config, Some(TEST_KEY));

    let response = server
        .post("/api/call-gemini")
        .json(&json!({"prompt": "hello", "history": []}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

// ============= Request / Configuration Errors =============

#[tokio::test]
async fn test_malformed_json_is_internal_error() {
    let mock_server = MockServer::start().await;
    let server = test_server(&mock_server);

    let response = server
        .post("/api/call-gemini")
        .text("{\"prompt\": \"hello\", ")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert_eq!(upstream_call_count(&mock_server).await, 0);
}

#[tokio::test]
async fn test_missing_prompt_is_internal_error() {
    let mock_server = MockServer::start().await;
    let server = test_server(&mock_server);

    let response = server
        .post("/api/call-gemini")
        .json(&json!({"history": []}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("prompt"));
}

#[rstest]
#[case(json!({"prompt": "hello"}))]
#[case(json!({"prompt": "hello", "history": null}))]
#[tokio::test]
async fn test_missing_history_is_internal_error(#[case] request: serde_json::Value) {
    let mock_server = MockServer::start().await;
    let server = test_server(&mock_server);

    let response = server.post("/api/call-gemini").json(&request).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert_eq!(upstream_call_count(&mock_server).await, 0);
}

#[tokio::test]
async fn test_missing_credential_is_internal_error() {
    let mock_server = MockServer::start().await;
    let server = server_with_config(test_config(&mock_server), None);

    let response = server
        .post("/api/call-gemini")
        .json(&json!({"prompt": "hello", "history": []}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({
        "error": "GEMINI_API_KEY is not set in environment variables."
    }));
    assert_eq!(upstream_call_count(&mock_server).await, 0);
}

#[tokio::test]
async fn test_body_over_limit_is_rejected() {
    let mock_server = MockServer::start().await;
    let mut config = test_config(&mock_server);
    config.server.body_limit_bytes = 64;
    let server = server_with_config(config, Some(TEST_KEY));

    let response = server
        .post("/api/call-gemini")
        .json(&json!({"prompt": "x".repeat(512), "history": []}))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(upstream_call_count(&mock_server).await, 0);
}

// ============= Service Endpoints =============

#[tokio::test]
async fn test_health_check() {
    let mock_server = MockServer::start().await;
    let server = test_server(&mock_server);

    let response = server.get("/api/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_openapi_document_lists_proxy() {
    let mock_server = MockServer::start().await;
    let server = test_server(&mock_server);

    let response = server.get("/api/openapi.json").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["paths"]["/api/call-gemini"]["post"].is_object());
    assert!(body["paths"]["/api/health"]["get"].is_object());
}

#[tokio::test]
async fn test_unknown_path_without_ui_is_not_found() {
    let mock_server = MockServer::start().await;
    let server = test_server(&mock_server);

    server
        .get("/discover")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
