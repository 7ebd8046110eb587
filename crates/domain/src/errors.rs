//! Error types used throughout the client

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single error entry reported inside a GraphQL response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Map<String, serde_json::Value>>,
}

impl fmt::Display for GraphQlErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) if !path.is_empty() => {
                let segments: Vec<String> = path
                    .iter()
                    .map(|segment| match segment {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect();
                write!(f, "{} (at {})", self.message, segments.join("."))
            }
            _ => f.write_str(&self.message),
        }
    }
}

/// Categories of client errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Client was built without the configuration it needs
    Config,
    /// Network, DNS, timeout or cancellation failure
    Transport,
    /// Credential exchange rejected by the auth endpoint
    Authentication,
    /// Non-200 status from the GraphQL endpoint
    Http,
    /// Malformed JSON at the envelope or data level
    Decode,
    /// Server-reported GraphQL errors
    GraphQl,
    /// Expected entity missing from a mutation response
    NotFound,
    /// Caller-supplied arguments rejected before any request was sent
    Validation,
}

/// Main error type for the client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Authentication failed with status {status}: {}", describe_body(.body))]
    Auth { status: u16, body: String },

    #[error("Request failed with status {status}: {}", describe_body(.body))]
    Http { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("GraphQL errors: {}", join_messages(.0))]
    GraphQl(Vec<GraphQlErrorEntry>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),
}

impl ClientError {
    /// Get the error category for this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::Config,
            Self::Transport(_) | Self::Timeout(_) | Self::Cancelled => ErrorCategory::Transport,
            Self::Auth { .. } => ErrorCategory::Authentication,
            Self::Http { .. } => ErrorCategory::Http,
            Self::Decode(_) => ErrorCategory::Decode,
            Self::GraphQl(_) => ErrorCategory::GraphQl,
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::Validation(_) => ErrorCategory::Validation,
        }
    }

    /// HTTP status carried by auth and HTTP failures
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } | Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Stable label suitable for structured log fields
    pub fn label(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Config => "config",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Authentication => "auth",
            ErrorCategory::Http => "http",
            ErrorCategory::Decode => "decode",
            ErrorCategory::GraphQl => "graphql",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Validation => "validation",
        }
    }
}

fn describe_body(body: &str) -> String {
    if body.is_empty() {
        "(empty response body)".to_string()
    } else {
        body.to_string()
    }
}

fn join_messages(entries: &[GraphQlErrorEntry]) -> String {
    entries.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
