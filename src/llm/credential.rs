//! Upstream credential lookup
//!
//! The proxy resolves its API key on every request, never at startup. A
//! missing key fails only the requests that need it.

use std::fmt;

/// Source of the secret key attached to upstream calls.
pub trait CredentialSource: Send + Sync {
    /// Name reported when the key is missing (never the key itself).
    fn name(&self) -> &str;

    /// Current key, or `None` when it is unset or empty.
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from a process environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredential {
    fn name(&self) -> &str {
        &self.var
    }

    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|key| !key.is_empty())
    }
}

/// Fixed key, for embedding the proxy in tests or other binaries.
#[derive(Clone)]
pub struct StaticCredential {
    name: String,
    key: Option<String>,
}

impl StaticCredential {
    pub fn new(name: impl Into<String>, key: Option<String>) -> Self {
        Self {
            name: name.into(),
            key,
        }
    }
}

impl fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredential")
            .field("name", &self.name)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl CredentialSource for StaticCredential {
    fn name(&self) -> &str {
        &self.name
    }

    fn api_key(&self) -> Option<String> {
        self.key.clone().filter(|key| !key.is_empty())
    }
}
