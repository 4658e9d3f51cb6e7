//! API request handlers.

/// Health check and API description handlers.
pub mod health;
/// Gemini chat proxy handler.
pub mod proxy;
