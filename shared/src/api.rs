//! API client types for the GraphQL data layer
//!
//! The console talks to a single GraphQL endpoint. These types describe the
//! request and response envelopes and the two payloads the console reads.

use crate::record::Record;
use crate::session::SessionTokens;
use serde::{Deserialize, Serialize};

/// API error types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiError {
    /// Network or connection error
    Network(String),
    /// Server returned an error status
    Server { status: u16, message: String },
    /// Failed to parse response
    Parse(String),
    /// Authentication required or failed
    Auth(String),
    /// The endpoint answered with GraphQL errors
    GraphQl(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Auth(msg) => write!(f, "Auth error: {}", msg),
            ApiError::GraphQl(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => ApiError::Auth(message.into()),
            _ => ApiError::Server {
                status,
                message: message.into(),
            },
        }
    }
}

/// Body of a GraphQL POST
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Any reported error wins over partial data.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.errors.is_empty() {
            let messages: Vec<_> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(ApiError::GraphQl(messages.join("; ")));
        }
        self.data
            .ok_or_else(|| ApiError::Parse("response carried no data".to_string()))
    }
}

/// Payload of the OSSC listing query
#[derive(Debug, Clone, Deserialize)]
pub struct OsscListing {
    pub base_ossc: Vec<Record>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignedInUser {
    pub id: serde_json::Value,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignIn {
    #[serde(default)]
    pub data: Option<SignedInUser>,
    pub tokens: SessionTokens,
}

/// Payload of the sign-in mutation
#[derive(Debug, Clone, Deserialize)]
pub struct SignInPayload {
    #[serde(rename = "signIn")]
    pub sign_in: Option<SignIn>,
}
