//! # API Error Type
//!
//! Unified error type for portal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Orderdesk                              │
//! │                                                                         │
//! │  UI Layer                       Portal                                  │
//! │  ────────                       ──────                                  │
//! │                                                                         │
//! │  submit_order("PO-1")                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Gateway Error? ── GatewayError::SubmissionFailed ──┐            │  │
//! │  │         │            (detail → log, generic → user) │            │  │
//! │  │         ▼                                           ▼            │  │
//! │  │  Domain Error? ──── CoreError::EmptyCart ───────── ApiError ───► │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) {                                                            │
//! │    // e.message = "Failed to submit order. Please try again."           │
//! │    // e.code = "GATEWAY_ERROR"                                          │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use orderdesk_core::CoreError;
use orderdesk_gateway::GatewayError;

/// The generic retry message shown when a submission fails.
///
/// The transport-level detail is logged; the user only ever sees this.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit order. Please try again.";

/// API error returned from portal commands.
///
/// ## Serialization
/// This is what the UI layer receives when a command fails:
/// ```json
/// {
///   "code": "UNAUTHENTICATED",
///   "message": "Invalid credentials. Please contact your account manager."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// No session, or the credentials were rejected
    Unauthenticated,

    /// A conflicting operation is still in flight (single logical writer)
    OperationPending,

    /// The remote boundary reported a failure
    GatewayError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unauthenticated error.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Unauthenticated, message)
    }

    /// Creates a pending-operation error.
    pub fn busy(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::OperationPending, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCart => ApiError::validation(err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts gateway errors to API errors.
impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::InvalidCredentials => {
                ApiError::new(ErrorCode::Unauthenticated, err.to_string())
            }
            GatewayError::SubmissionFailed(detail) => {
                // Log the actual error but return a generic message
                tracing::error!("Sales order submission failed: {}", detail);
                ApiError::new(ErrorCode::GatewayError, SUBMIT_FAILED_MESSAGE)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
