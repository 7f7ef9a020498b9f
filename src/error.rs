//! Error types for calls against the classifieds API.
//!
//! The service reports two kinds of rejections, and [`ApiError`] keeps them apart:
//! - [`ApiError::Validation`]: HTTP 400, malformed or missing input
//! - [`ApiError::NotFound`]: HTTP 404, a well-formed identifier nobody knows
//!
//! Everything else (transport failures, undecodable bodies, surprising status
//! codes) has its own variant so a scenario failure says what actually broke.
//!
//! # Example
//!
//! ```rust
//! use classifieds_api_suite::error::{ApiError, ErrorCategory};
//!
//! fn describe(err: &ApiError) -> &'static str {
//!     match err.category() {
//!         ErrorCategory::Client => "request rejected",
//!         ErrorCategory::NotFound => "no such item",
//!         _ => "service or transport problem",
//!     }
//! }
//! ```

use crate::logging::{log_error, log_warn};
use crate::types::ErrorResponse;
use thiserror::Error;

/// High-level categorization of errors for routing assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request was rejected as invalid (400).
    Client,

    /// The request was valid but referenced an unknown resource (404).
    NotFound,

    /// The service misbehaved or could not be reached.
    External,

    /// The suite itself is misconfigured.
    Configuration,
}

/// Convenient result type for API calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the classifieds API.
///
/// | Variant | Category | HTTP status |
/// |---------|----------|-------------|
/// | `Configuration` | Configuration | - |
/// | `RequestFailed` | External | - |
/// | `ResponseParsing` | External | - |
/// | `Validation` | Client | 400 |
/// | `NotFound` | NotFound | 404 |
/// | `UnexpectedStatus` | External | any other |
/// | `InvalidConfirmation` | External | 200 |
#[derive(Error, Debug)]
pub enum ApiError {
    /// Suite configuration is invalid (empty or non-HTTP base URL).
    #[error("Suite configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP exchange itself failed (connection refused, TLS, body read).
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The response body was not the JSON shape we expected.
    #[error("Response parsing failed: {message}")]
    ResponseParsing {
        /// Details about the parsing failure.
        message: String,
    },

    /// The service rejected the input (HTTP 400).
    #[error("Validation error: {message}")]
    Validation {
        /// The service's `result.message`, or the raw body when it had none.
        message: String,
        /// The decoded error body, when it had the standard shape.
        response: Option<ErrorResponse>,
    },

    /// The identifier was well-formed but unknown (HTTP 404).
    #[error("Not found: {message}")]
    NotFound {
        /// The service's `result.message`, or the raw body when it had none.
        message: String,
        /// The decoded error body, when it had the standard shape.
        response: Option<ErrorResponse>,
    },

    /// Any other non-success status.
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// Numeric HTTP status.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A create call succeeded but its status text carried no item identifier.
    #[error("Create confirmation carries no item id: {status}")]
    InvalidConfirmation {
        /// The `status` text the service returned.
        status: String,
    },
}

impl ApiError {
    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ResponseParsing { .. } => ErrorCategory::External,
            Self::Validation { .. } => ErrorCategory::Client,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::UnexpectedStatus { .. } => ErrorCategory::External,
            Self::InvalidConfirmation { .. } => ErrorCategory::External,
        }
    }

    /// HTTP status carried by the error, if the service answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Validation { .. } => Some(400),
            Self::NotFound { .. } => Some(404),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::InvalidConfirmation { .. } => Some(200),
            _ => None,
        }
    }

    /// The decoded error body for 400/404 errors.
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Validation { response, .. } | Self::NotFound { response, .. } => {
                response.as_ref()
            }
            _ => None,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration",
            message = %message,
            "Suite configuration validation failed"
        );
        Self::Configuration { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "API request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing",
            message = %message,
            "API response format invalid"
        );
        Self::ResponseParsing { message }
    }

    /// Create a validation error (logs at WARN level, 400s are routine here).
    pub fn validation(message: impl Into<String>, response: Option<ErrorResponse>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "validation",
            message = %message,
            "API rejected request input"
        );
        Self::Validation { message, response }
    }

    pub fn not_found(message: impl Into<String>, response: Option<ErrorResponse>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "not_found",
            message = %message,
            "API resource not found"
        );
        Self::NotFound { message, response }
    }

    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        log_error!(
            error_type = "unexpected_status",
            status = status,
            body = %body,
            "API returned unexpected status"
        );
        Self::UnexpectedStatus { status, body }
    }

    pub fn invalid_confirmation(status: impl Into<String>) -> Self {
        let status = status.into();
        log_warn!(
            error_type = "invalid_confirmation",
            status = %status,
            "Create confirmation has no parsable item id"
        );
        Self::InvalidConfirmation { status }
    }
}
