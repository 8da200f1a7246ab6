//! Correlation types for request tracking
//!
//! Every mutation entering the engine gets a `RequestContext` so that its
//! start/end log events and any resulting error can be tied together.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single store operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new time-ordered RequestId (UUIDv7)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Context carried through one engine operation
///
/// `actor_email` names the user on whose behalf the operation runs, when the
/// caller knows it. The store never authorizes on it; it is log context only.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub actor_email: Option<String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the acting user's email
    pub fn with_actor(mut self, email: impl Into<String>) -> Self {
        self.actor_email = Some(email.into());
        self
    }
}
