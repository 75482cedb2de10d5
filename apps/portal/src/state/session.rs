//! # Session State
//!
//! Holds the authenticated identity for the current portal session.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │            login(email, secret)                                         │
//! │  ┌───────────┐ ──── ok ─────► ┌───────────────┐                        │
//! │  │ anonymous │                │ authenticated │                         │
//! │  └───────────┘ ◄── logout ─── └───────────────┘                        │
//! │        ▲                                                                │
//! │        └── login rejected (session unchanged)                          │
//! │                                                                         │
//! │  No automatic expiry. A second login while one is verifying is         │
//! │  rejected fast with OPERATION_PENDING rather than queued.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The account slot uses a `std::sync::Mutex` (reads and swaps are quick and
//! never held across an await). The in-flight login gate is a
//! `tokio::sync::Mutex` because it IS held across the verifier's await.

use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use orderdesk_core::CustomerAccount;
use orderdesk_gateway::CredentialVerifier;

use crate::error::ApiError;
use crate::events::{EventBus, PortalEvent};

/// The session holder: at most one authenticated identity at a time.
///
/// Verification is delegated to a [`CredentialVerifier`], so this type never
/// learns what a valid credential pair looks like.
pub struct SessionState {
    account: Mutex<Option<CustomerAccount>>,
    verifier: Arc<dyn CredentialVerifier>,
    /// Held for the duration of one login attempt.
    login_gate: tokio::sync::Mutex<()>,
    events: EventBus,
}

impl SessionState {
    /// Creates an anonymous session backed by the given verifier.
    pub fn new(verifier: Arc<dyn CredentialVerifier>, events: EventBus) -> Self {
        SessionState {
            account: Mutex::new(None),
            verifier,
            login_gate: tokio::sync::Mutex::new(()),
            events,
        }
    }

    /// Attempts to establish a session.
    ///
    /// ## Behavior
    /// - Rejects immediately with `OPERATION_PENDING` if another login is
    ///   still verifying
    /// - On success, stores the account and emits `SessionChanged`
    /// - On rejection, the session is left exactly as it was
    pub async fn login(&self, email: &str, secret: &str) -> Result<CustomerAccount, ApiError> {
        let _gate = self.login_gate.try_lock().map_err(|_| {
            warn!("Login rejected: another attempt is still verifying");
            ApiError::busy("A sign-in attempt is already in progress.")
        })?;

        let account = self.verifier.verify(email, secret).await?;

        info!(customer_id = %account.customer_id, "Session established");
        *self.account.lock().expect("Session mutex poisoned") = Some(account.clone());
        self.events
            .emit(PortalEvent::SessionChanged { authenticated: true });

        Ok(account)
    }

    /// Clears the session synchronously. Logging out while anonymous is fine.
    pub fn logout(&self) {
        let previous = self
            .account
            .lock()
            .expect("Session mutex poisoned")
            .take();

        if previous.is_some() {
            info!("Session cleared");
        }
        self.events
            .emit(PortalEvent::SessionChanged { authenticated: false });
    }

    /// True when an identity is stored.
    pub fn is_authenticated(&self) -> bool {
        self.account
            .lock()
            .expect("Session mutex poisoned")
            .is_some()
    }

    /// The current identity, if any.
    pub fn current(&self) -> Option<CustomerAccount> {
        self.account.lock().expect("Session mutex poisoned").clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
