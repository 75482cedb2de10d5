//! # Sales Order Submission
//!
//! The outbound seam for sales orders. The portal workflow only knows the
//! [`SalesOrderGateway`] trait; the dry-run implementation here logs what a
//! real client would send and acknowledges after a simulated round trip.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::info;

use crate::error::GatewayResult;
use crate::payload::SalesOrderPayload;

/// Simulated submission latency for demo runs.
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

/// Acknowledgment returned by a gateway submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    /// Backend order reference, when the gateway assigns one synchronously.
    /// The dry-run gateway never does; seeded history shows what accepted
    /// orders look like once the ERP has one.
    pub erp_order_id: Option<String>,
}

/// Submits sales orders to the distributor's ERP.
///
/// Implementations must not mutate portal state: callers commit the cart to
/// history only after the ack comes back, so a failed submission leaves
/// everything as it was.
#[async_trait]
pub trait SalesOrderGateway: Send + Sync {
    /// Sends one sales order, returning the backend acknowledgment.
    async fn submit(&self, payload: &SalesOrderPayload) -> GatewayResult<SubmissionAck>;
}

/// Gateway that logs the payload it would send and acknowledges.
///
/// The prototype's mock network call: serialize, log, sleep, ack. It never
/// fails; failure handling is exercised through test doubles.
pub struct DryRunGateway {
    latency: Duration,
}

impl DryRunGateway {
    pub fn new() -> Self {
        DryRunGateway {
            latency: DEFAULT_SUBMIT_LATENCY,
        }
    }

    /// Overrides the simulated latency. Tests run at zero.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for DryRunGateway {
    fn default() -> Self {
        DryRunGateway::new()
    }
}

#[async_trait]
impl SalesOrderGateway for DryRunGateway {
    async fn submit(&self, payload: &SalesOrderPayload) -> GatewayResult<SubmissionAck> {
        let json = serde_json::to_string_pretty(payload)
            .unwrap_or_else(|e| format!("<payload failed to serialize: {e}>"));
        info!(
            customer_id = %payload.customer_id,
            lines = payload.line_items.len(),
            "Submitting sales order:\n{json}"
        );

        sleep(self.latency).await;

        info!("Sales order acknowledged (dry run)");
        Ok(SubmissionAck::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
