//! Shared helpers for integration tests.
//!
//! Every test server talks to a wiremock `MockServer` standing in for the
//! Gemini API, so no test needs network access or a real key.

#![allow(dead_code)]

use axum_test::TestServer;
use kairos::{
    AppState, GeminiClient, KairosConfig, StaticCredential, api::routes::create_app,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-gemini-key";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

/// Configuration pointing at the mock upstream, with no UI bundle
pub fn test_config(upstream: &MockServer) -> KairosConfig {
    let mut config = KairosConfig::default();
    config.upstream.base_url = upstream.uri();
    config.ui.static_dir = PathBuf::from("target/kairos-tests/no-ui");
    config
}

/// Build a test server from a config and an optional key
pub fn server_with_config(config: KairosConfig, key: Option<&str>) -> TestServer {
    let gemini = GeminiClient::from_config(&config.upstream).expect("Failed to build client");
    let credentials = Arc::new(StaticCredential::new(
        config.upstream.api_key_env.clone(),
        key.map(str::to_string),
    ));
    let state = AppState::new(config, gemini, credentials);

    TestServer::new(create_app(state)).expect("Failed to create test server")
}

/// Test server with the default test key configured
pub fn test_server(upstream: &MockServer) -> TestServer {
    server_with_config(test_config(upstream), Some(TEST_KEY))
}

/// A typical successful generateContent response
pub fn mock_gemini_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{"text": text}],
                "role": "model"
            },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 4,
            "candidatesTokenCount": 8,
            "totalTokenCount": 12
        },
        "modelVersion": "gemini-2.0-flash"
    })
}
