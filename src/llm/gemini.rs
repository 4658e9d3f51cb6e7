//! Gemini `generateContent` client
//!
//! A thin reqwest wrapper: one POST per call, no retries, no streaming. The
//! success body is returned as raw JSON so the proxy can relay it untouched.

use crate::types::{AppError, GenerateContentRequest, Result};
use crate::utils::toml_config::UpstreamConfig;
use serde_json::value::RawValue;
use tracing::{debug, warn};

/// Client for a single Gemini model endpoint
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Build a client from the `[upstream]` section, applying its timeout if set
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Endpoint URL without the key query parameter
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Send one `generateContent` call.
    ///
    /// Non-2xx statuses become [`AppError::UpstreamStatus`] and the upstream
    /// body is dropped. A 2xx body that is not JSON is an
    /// [`AppError::InvalidBody`].
    pub async fn generate_content(
        &self,
        api_key: &str,
        payload: &GenerateContentRequest,
    ) -> Result<Box<RawValue>> {
        debug!(
            model = %self.model,
            turns = payload.contents.len(),
            "Calling generateContent"
        );

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(model = %self.model, status = status.as_u16(), "Upstream rejected request");
            return Err(AppError::UpstreamStatus(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(e.without_url()))?;
        let raw: Box<RawValue> = serde_json::from_slice(&body)?;

        Ok(raw)
    }
}
