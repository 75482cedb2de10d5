//! # Gateway Error Types
//!
//! Errors crossing the simulated remote boundary. The portal maps these to
//! its API error codes; the messages here are the user-facing strings.

use thiserror::Error;

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors from credential verification and sales-order submission.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Sign-in was rejected.
    ///
    /// One fixed message for every rejection (unknown email, wrong secret),
    /// so the response never leaks which half was wrong.
    #[error("Invalid credentials. Please contact your account manager.")]
    InvalidCredentials,

    /// The sales-order submission did not go through.
    ///
    /// Carries the transport-level detail for the log; the portal shows its
    /// own generic retry message instead.
    #[error("Sales order submission failed: {0}")]
    SubmissionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_fixed() {
        assert_eq!(
            GatewayError::InvalidCredentials.to_string(),
            "Invalid credentials. Please contact your account manager."
        );
    }

    #[test]
    fn test_submission_failed_carries_detail() {
        let err = GatewayError::SubmissionFailed("connection reset".to_string());
        assert_eq!(
            err.to_string(),
            "Sales order submission failed: connection reset"
        );
    }
}
