//! Uniform JSON response envelope.
//!
//! Every response carries exactly one of `data` (success) or `error`
//! (failure), never both. The error body has a fixed four-tag taxonomy with
//! per-tag nullability rules: a developer fault carries a free-text
//! diagnostic and no code; the other three carry a code and no text.

use serde::{Deserialize, Serialize};

/// Client-visible error categories. Exactly these four exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Internal/unexpected fault (developer error)
    #[serde(rename = "DEV")]
    Dev,
    /// The client sent something invalid
    #[serde(rename = "USER")]
    User,
    /// A usage quota was reached
    #[serde(rename = "QUOTA")]
    Quota,
    /// A rate or size limitation was reached
    #[serde(rename = "LIMIT")]
    Limit,
}

/// The `error` half of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error category tag
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    /// Machine-readable code; null for developer faults
    pub code: Option<i64>,
    /// Free-text diagnostic; null for everything but developer faults
    pub data: Option<String>,
}

impl ErrorBody {
    /// Developer fault: free-text diagnostic, no code.
    pub fn dev(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Dev,
            code: None,
            data: Some(message.into()),
        }
    }

    /// User fault: coded, no text.
    pub fn user(code: i64) -> Self {
        Self {
            kind: ErrorKind::User,
            code: Some(code),
            data: None,
        }
    }

    /// Quota fault: coded, no text.
    pub fn quota(code: i64) -> Self {
        Self {
            kind: ErrorKind::Quota,
            code: Some(code),
            data: None,
        }
    }

    /// Limitation fault: coded, no text.
    pub fn limit(code: i64) -> Self {
        Self {
            kind: ErrorKind::Limit,
            code: Some(code),
            data: None,
        }
    }
}

/// Response envelope: `{ "data": ... }` or `{ "error": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseEnvelope<T> {
    /// Successful outcome carrying the payload
    Success {
        /// The payload handed to the client
        data: T,
    },
    /// Failed outcome carrying the typed error body
    Failure {
        /// The typed error body
        error: ErrorBody,
    },
}

impl<T> ResponseEnvelope<T> {
    /// Wrap a payload in the success envelope.
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Wrap an error body in the failure envelope.
    pub fn failure(error: ErrorBody) -> Self {
        Self::Failure { error }
    }
}
