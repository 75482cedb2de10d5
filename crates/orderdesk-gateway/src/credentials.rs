//! # Credential Verification
//!
//! The sign-in seam. `SessionState` only knows the [`CredentialVerifier`]
//! trait; the fixed demo pair lives in one implementation here, so a real
//! identity backend can slot in without touching the session holder.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, warn};

use orderdesk_core::CustomerAccount;

use crate::error::{GatewayError, GatewayResult};

/// Simulated credential-check latency for demo runs.
pub const DEFAULT_VERIFY_LATENCY: Duration = Duration::from_millis(1000);

/// Verifies sign-in attempts against some identity backend.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Checks a credential pair, returning the account on success.
    ///
    /// Rejections use [`GatewayError::InvalidCredentials`] regardless of
    /// which half of the pair was wrong.
    async fn verify(&self, email: &str, secret: &str) -> GatewayResult<CustomerAccount>;
}

/// Verifier backed by a single fixed credential pair.
///
/// The prototype stand-in for a real identity backend. The email compares
/// case-insensitively, the secret must match exactly, and every attempt
/// costs the configured latency whether it succeeds or not.
pub struct FixedCredentialVerifier {
    email: String,
    secret: String,
    account: CustomerAccount,
    latency: Duration,
}

impl FixedCredentialVerifier {
    /// Creates a verifier accepting exactly this pair.
    pub fn new(email: &str, secret: &str, account: CustomerAccount) -> Self {
        FixedCredentialVerifier {
            email: email.to_string(),
            secret: secret.to_string(),
            account,
            latency: DEFAULT_VERIFY_LATENCY,
        }
    }

    /// Overrides the simulated latency. Tests run at zero.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl CredentialVerifier for FixedCredentialVerifier {
    async fn verify(&self, email: &str, secret: &str) -> GatewayResult<CustomerAccount> {
        debug!(email = %email, "Verifying credentials");
        sleep(self.latency).await;

        if email.eq_ignore_ascii_case(&self.email) && secret == self.secret {
            Ok(self.account.clone())
        } else {
            warn!(email = %email, "Credential verification rejected");
            Err(GatewayError::InvalidCredentials)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_account() -> CustomerAccount {
        CustomerAccount {
            id: "user-1".to_string(),
            name: "Demo Customer".to_string(),
            email: "customer@example.com".to_string(),
            customer_id: "cust-456789".to_string(),
        }
    }

    fn verifier() -> FixedCredentialVerifier {
        FixedCredentialVerifier::new("customer@example.com", "password123", demo_account())
            .with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_accepts_fixed_pair() {
        let account = verifier()
            .verify("customer@example.com", "password123")
            .await
            .unwrap();
        assert_eq!(account.customer_id, "cust-456789");
    }

    #[tokio::test]
    async fn test_email_is_case_insensitive() {
        let account = verifier()
            .verify("Customer@Example.COM", "password123")
            .await
            .unwrap();
        assert_eq!(account.id, "user-1");
    }

    #[tokio::test]
    async fn test_wrong_secret_rejected_with_fixed_message() {
        let err = verifier()
            .verify("customer@example.com", "hunter2")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid credentials. Please contact your account manager."
        );
    }

    #[tokio::test]
    async fn test_unknown_email_gets_same_message() {
        let wrong_user = verifier()
            .verify("intruder@example.com", "password123")
            .await
            .unwrap_err();
        let wrong_secret = verifier()
            .verify("customer@example.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(wrong_user.to_string(), wrong_secret.to_string());
    }
}
