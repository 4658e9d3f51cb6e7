//! HTTP API Handlers and Routes
//!
//! The API layer is built on the Axum web framework and is mounted under
//! `/api`; everything else falls through to the static UI bundle.
//!
//! # API Endpoints
//!
//! - `POST /api/call-gemini` - Forward a prompt and history to the Gemini API
//! - `GET /api/health` - Health check endpoint
//! - `GET /api/openapi.json` - OpenAPI description of the above
//!
//! # OpenAPI Documentation
//!
//! When the `swagger-ui` feature is enabled, interactive API documentation
//! is available at `/swagger-ui/`.

use crate::types::{ChatRequest, Content, ErrorResponse, HealthResponse, Part};
use utoipa::OpenApi;

/// Request handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::proxy::call_gemini, handlers::health::health),
    components(schemas(ChatRequest, Content, Part, ErrorResponse, HealthResponse)),
    tags(
        (name = "chat", description = "Generative-language proxy"),
        (name = "health", description = "Service status")
    )
)]
pub struct ApiDoc;
