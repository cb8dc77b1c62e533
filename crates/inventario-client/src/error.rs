//! # Client Error Types
//!
//! Error taxonomy for everything that can go wrong between a view and the
//! backend, normalized in one place so every form and list handles failures
//! the same way.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │ Authentication  │  │   Validation    │  │     Business            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Unauthorized   │  │  field → [msg]  │  │  single message,        │ │
//! │  │  (401/403,      │  │  map from 422,  │  │  surfaced verbatim      │ │
//! │  │  generic msg)   │  │  kept verbatim  │  │  (cancel refusals etc.) │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Transport     │  │     Server      │  │  Local (non-network)    │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  timeout,       │  │  5xx            │  │  Decode, Storage,       │ │
//! │  │  connection loss│  │                 │  │  Config                 │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal to the process: every failure is scoped to the
//! operation that triggered it and leaves the rest of the UI usable.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Result type alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified error for gateway calls, session storage and configuration.
#[derive(Debug, Error)]
pub enum ApiError {
    // =========================================================================
    // Backend Responses
    // =========================================================================
    /// 401/403. Deliberately generic: the backend (and this client) never
    /// distinguish "user not found" from "wrong password" or "token expired".
    /// The gateway does NOT clear the session or navigate on this - that
    /// decision belongs to the calling view.
    #[error("not authorized (invalid credentials or expired session)")]
    Unauthorized,

    /// 404 for a concrete resource.
    #[error("{0}")]
    NotFound(String),

    /// 422 with the backend's field-level payload, kept verbatim so forms
    /// can map field name → error message list.
    #[error("{}", .message.as_deref().unwrap_or("validation failed"))]
    Validation {
        /// Top-level message, when the backend sends one.
        message: Option<String>,
        /// field name → list of messages for that field.
        errors: BTreeMap<String, Vec<String>>,
    },

    /// Any other 4xx: a business-rule rejection (cancel an already-cancelled
    /// sale, insufficient stock, ...). The backend's message is surfaced
    /// verbatim and the caller's state is not discarded.
    #[error("{0}")]
    Business(String),

    /// 5xx responses.
    #[error("server error (HTTP {status})")]
    Server { status: u16 },

    // =========================================================================
    // Local Failures
    // =========================================================================
    /// Network/transport failure: timeout, connection refused, TLS, DNS.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered 2xx but the body was not the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Session/config file I/O failure.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Invalid or unloadable configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

// =============================================================================
// Response Normalization
// =============================================================================

/// The backend's error envelope. Laravel-style: both fields optional, 422
/// carries `errors`, business rejections usually carry only `message`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiError {
    /// Classifies a non-2xx response into the taxonomy above.
    ///
    /// Pure function of (status, body) so the mapping is unit-testable
    /// without a live backend.
    pub fn from_response(status: StatusCode, body: &str) -> ApiError {
        // Tolerant parse: a proxy may answer with HTML, an empty body, etc.
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
            StatusCode::NOT_FOUND => {
                ApiError::NotFound(parsed.message.unwrap_or_else(|| "not found".to_string()))
            }
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation {
                message: parsed.message,
                errors: parsed.errors.unwrap_or_default(),
            },
            s if s.is_server_error() => ApiError::Server { status: s.as_u16() },
            s => ApiError::Business(
                parsed
                    .message
                    .unwrap_or_else(|| format!("request rejected (HTTP {})", s.as_u16())),
            ),
        }
    }

    /// True for 401/403 classifications.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// True for 422 classifications.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation { .. })
    }

    /// The field → messages map of a validation failure, if any.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            ApiError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ApiError {
    fn from(err: toml::de::Error) -> Self {
        ApiError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::Config(err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_and_403_are_generic_unauthorized() {
        let body = r#"{"message": "Token has expired"}"#;
        assert!(ApiError::from_response(StatusCode::UNAUTHORIZED, body).is_unauthorized());
        assert!(ApiError::from_response(StatusCode::FORBIDDEN, "").is_unauthorized());

        // The generic message never leaks which part of the credential failed.
        let display = ApiError::from_response(StatusCode::UNAUTHORIZED, body).to_string();
        assert!(!display.contains("Token has expired"));
    }

    #[test]
    fn test_422_preserves_field_errors_verbatim() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "items.0.quantity": ["La cantidad supera el stock disponible."],
                "customer_name": ["must be a string"]
            }
        }"#;

        let err = ApiError::from_response(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert!(err.is_validation());

        let fields = err.field_errors().unwrap();
        assert_eq!(
            fields["items.0.quantity"],
            vec!["La cantidad supera el stock disponible."]
        );
        assert_eq!(err.to_string(), "The given data was invalid.");
    }

    #[test]
    fn test_422_without_errors_map_still_validation() {
        // The sale endpoint answers 422 with only a message on stock shortage.
        let body = r#"{"message": "Stock insuficiente para Coca-Cola 330ml"}"#;
        let err = ApiError::from_response(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Stock insuficiente para Coca-Cola 330ml");
        assert!(err.field_errors().unwrap().is_empty());
    }

    #[test]
    fn test_business_rejection_message_surfaced_verbatim() {
        let body = r#"{"message": "La venta ya fue cancelada"}"#;
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.to_string(), "La venta ya fue cancelada");
    }

    #[test]
    fn test_server_errors_keep_status() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert!(matches!(err, ApiError::Server { status: 502 }));
    }

    #[test]
    fn test_non_json_body_does_not_panic() {
        let err = ApiError::from_response(StatusCode::CONFLICT, "plain text");
        assert_eq!(err.to_string(), "request rejected (HTTP 409)");
    }
}
