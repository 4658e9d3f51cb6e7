//! Upstream generative-language API access
//!
//! - [`GeminiClient`] - issues `generateContent` calls against one model
//! - [`CredentialSource`] - supplies the API key at request time
//!
//! # Example
//!
//! ```ignore
//! use kairos::llm::{CredentialSource, EnvCredential, GeminiClient};
//! use kairos::types::{Content, GenerateContentRequest};
//!
//! let client = GeminiClient::new("https://generativelanguage.googleapis.com", "gemini-2.0-flash");
//! let key = EnvCredential::new("GEMINI_API_KEY").api_key().unwrap();
//!
//! let payload = GenerateContentRequest { contents: vec![Content::user("Hello")] };
//! let body = client.generate_content(&key, &payload).await?;
//! println!("{}", body.get());
//! ```

/// API key lookup.
pub mod credential;
/// Gemini `generateContent` HTTP client.
pub mod gemini;

pub use credential::{CredentialSource, EnvCredential, StaticCredential};
pub use gemini::GeminiClient;
