//! # Session Commands

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::Portal;

/// What the UI layer sees of the session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub authenticated: bool,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub customer_id: Option<String>,
}

impl SessionView {
    fn from_portal(portal: &Portal) -> Self {
        match portal.session.current() {
            Some(account) => SessionView {
                authenticated: true,
                display_name: Some(account.name),
                email: Some(account.email),
                customer_id: Some(account.customer_id),
            },
            None => SessionView {
                authenticated: false,
                display_name: None,
                email: None,
                customer_id: None,
            },
        }
    }
}

/// Signs in with a credential pair.
///
/// Verification runs through the portal's [`CredentialVerifier`] and takes
/// the simulated latency; a rejection carries the fixed user-facing message
/// and leaves the session anonymous.
///
/// [`CredentialVerifier`]: orderdesk_gateway::CredentialVerifier
pub async fn login(portal: &Portal, email: &str, secret: &str) -> Result<SessionView, ApiError> {
    debug!(email = %email, "login command");

    portal.session.login(email, secret).await?;
    Ok(SessionView::from_portal(portal))
}

/// Signs out. Always succeeds, even when already anonymous.
pub fn logout(portal: &Portal) -> SessionView {
    debug!("logout command");

    portal.session.logout();
    SessionView::from_portal(portal)
}

/// The current session state, for header rendering and route guards.
pub fn current_session(portal: &Portal) -> SessionView {
    debug!("current_session command");

    SessionView::from_portal(portal)
}
