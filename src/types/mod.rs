use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= Proxy Request Types =============

/// Body accepted by the chat proxy endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub prompt: String,
    /// Prior conversation turns, forwarded to the upstream API unchanged.
    /// Required; send `[]` for a fresh conversation.
    pub history: Vec<Content>,
}

/// One conversation turn in the upstream wire format.
///
/// `role` is passed through as given; the upstream API decides what it accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Part {
    pub text: String,
}

impl Content {
    /// A single-part turn authored by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Payload sent to `models/<model>:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl From<ChatRequest> for GenerateContentRequest {
    /// Appends the prompt as a new user turn after the supplied history.
    fn from(request: ChatRequest) -> Self {
        let mut contents = request.history;
        contents.push(Content::user(request.prompt));
        Self { contents }
    }
}

/// Error body shared by every failing proxy response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Body could not be read, e.g. over the configured size limit
    #[error(transparent)]
    BodyRejected(#[from] axum::extract::rejection::BytesRejection),

    #[error("{0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("{0} is not set in environment variables.")]
    MissingCredential(String),

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("API call failed with status: {}", .0.as_u16())]
    UpstreamStatus(axum::http::StatusCode),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        // axum's own rejection carries the right status (413 for oversize bodies).
        if let AppError::BodyRejected(rejection) = self {
            return rejection.into_response();
        }

        let status = match &self {
            AppError::MethodNotAllowed => {
                return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
            }
            AppError::UpstreamStatus(status) => *status,
            AppError::BodyRejected(rejection) => rejection.status(),
            // Configuration, parse and transport failures share one external shape.
            AppError::InvalidBody(_) | AppError::MissingCredential(_) | AppError::Upstream(_) => {
                tracing::error!(error = %self, "Error in chat proxy");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
