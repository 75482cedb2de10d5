//! # orderdesk-gateway: Simulated ERP Boundary
//!
//! Everything that pretends to leave the process lives here: credential
//! verification and sales-order submission, both behind dyn-safe async
//! traits so the portal never learns whether the backend is real.
//!
//! ## Seams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Gateway Seams                                      │
//! │                                                                         │
//! │  SessionState ──► CredentialVerifier::verify(email, secret)            │
//! │                   └── FixedCredentialVerifier (demo pair, ~1s)         │
//! │                                                                         │
//! │  submit_order ──► SalesOrderGateway::submit(&SalesOrderPayload)        │
//! │                   └── DryRunGateway (log + ~1.5s sleep + ack)          │
//! │                                                                         │
//! │  Both fixtures take `with_latency` so tests run at zero.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod credentials;
pub mod error;
pub mod orders;
pub mod payload;

pub use credentials::{CredentialVerifier, FixedCredentialVerifier, DEFAULT_VERIFY_LATENCY};
pub use error::{GatewayError, GatewayResult};
pub use orders::{DryRunGateway, SalesOrderGateway, SubmissionAck, DEFAULT_SUBMIT_LATENCY};
pub use payload::{CustomField, PayloadLine, SalesOrderPayload, CUSTOMER_PO_LABEL};
