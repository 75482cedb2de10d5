//! # Orderdesk Portal Library
//!
//! The state engine behind the wholesale ordering portal. A UI (or the demo
//! binary) builds one [`Portal`], drives it through the command layer, and
//! subscribes to the event bus for change notification.
//!
//! ## Module Organization
//! ```text
//! orderdesk_portal/
//! ├── lib.rs          ◄─── You are here (Portal wiring & tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Session holder (login/logout)
//! │   └── orders.rs   ◄─── Cart/order state container
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── session.rs  ◄─── Sign-in/out commands
//! │   ├── catalog.rs  ◄─── Browse/search commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── order.rs    ◄─── Submission workflow & history
//! ├── events.rs       ◄─── Broadcast event bus
//! ├── config.rs       ◄─── PortalConfig (env overrides)
//! ├── seed.rs         ◄─── Demo catalog/history/account
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Portal Startup                                    │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • PortalConfig::from_env() (ORDERDESK_* overrides)                  │
//! │                                                                         │
//! │  3. Build the Portal ─────────────────────────────────────────────────► │
//! │     • Catalog from seed data (immutable)                                │
//! │     • SessionState with the fixed demo verifier                         │
//! │     • OrderState seeded with the demo history                           │
//! │     • DryRunGateway for submissions                                     │
//! │     • One EventBus shared by every holder                               │
//! │                                                                         │
//! │  4. Drive it through commands ────────────────────────────────────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod seed;
pub mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use orderdesk_core::Catalog;
use orderdesk_gateway::{
    CredentialVerifier, DryRunGateway, FixedCredentialVerifier, SalesOrderGateway,
};

pub use config::PortalConfig;
pub use error::{ApiError, ErrorCode};
pub use events::{EventBus, PortalEvent, View};
pub use state::{OrderState, SessionState};

/// The assembled portal: configuration, catalog, state holders and seams.
///
/// Fields are public for reads; mutation still flows through the named
/// operations on the state holders (their internals are private).
pub struct Portal {
    pub config: PortalConfig,
    pub catalog: Catalog,
    pub session: SessionState,
    pub orders: OrderState,
    pub gateway: Arc<dyn SalesOrderGateway>,
    pub events: EventBus,
    /// Held for the duration of one submission. Commands take it with
    /// `try_lock` so overlapping submissions fail fast instead of queuing.
    pub(crate) submit_gate: tokio::sync::Mutex<()>,
}

impl Portal {
    /// Wires the seeded demo portal: demo catalog, demo history, the fixed
    /// credential pair, and the dry-run gateway with configured latencies.
    pub fn new(config: PortalConfig) -> Self {
        let verifier = Arc::new(
            FixedCredentialVerifier::new(seed::DEMO_EMAIL, seed::DEMO_SECRET, seed::demo_account())
                .with_latency(config.login_latency),
        );
        let gateway = Arc::new(DryRunGateway::new().with_latency(config.submit_latency));

        Portal::with_parts(
            config,
            seed::demo_catalog(),
            seed::demo_history(),
            verifier,
            gateway,
        )
    }

    /// Wires a portal from custom parts. This is the test seam: pass an
    /// empty history, a zero-latency verifier, or a failing gateway double.
    pub fn with_parts(
        config: PortalConfig,
        catalog: Catalog,
        history: Vec<orderdesk_core::Order>,
        verifier: Arc<dyn CredentialVerifier>,
        gateway: Arc<dyn SalesOrderGateway>,
    ) -> Self {
        let events = EventBus::default();

        Portal {
            config,
            catalog,
            session: SessionState::new(verifier, events.clone()),
            orders: OrderState::new(history, events.clone()),
            gateway,
            events,
            submit_gate: tokio::sync::Mutex::new(()),
        }
    }

    /// Subscribes to portal events (convenience over `events.subscribe()`).
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<PortalEvent> {
        self.events.subscribe()
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=orderdesk=trace` - Show trace for orderdesk crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,orderdesk=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
