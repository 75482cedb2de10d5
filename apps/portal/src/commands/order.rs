//! # Order Commands
//!
//! The submission workflow and history reads.
//!
//! ## Submission Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    submit_order(customer_po)                            │
//! │                                                                         │
//! │  1. Require a session ──────────────── UNAUTHENTICATED if anonymous    │
//! │  2. Take the submission gate ───────── OPERATION_PENDING if busy       │
//! │  3. Normalize the PO reference ─────── blank → none, cap 50 chars      │
//! │  4. Snapshot cart → payload ────────── EmptyCart if nothing to send    │
//! │  5. Await the gateway ──────────────── failure: cart+history untouched │
//! │  6. Commit via submit_cart() ───────── prepend history, clear cart     │
//! │  7. NavigateTo(Success) + receipt                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The payload is built from the same catalog join the commit uses, and the
//! gate plus the single-writer rule keep the cart stable between the two.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use orderdesk_core::validation::validate_po_reference;
use orderdesk_core::{CoreError, Order};
use orderdesk_gateway::SalesOrderPayload;

use crate::commands::cart::{cart_view, CartLineView, CartView};
use crate::error::ApiError;
use crate::events::{PortalEvent, View};
use crate::state::OrderDraft;
use crate::Portal;

/// What the caller gets back from a successful submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_no: String,
    /// ISO date (YYYY-MM-DD).
    pub date: String,
    pub line_count: usize,
    pub total_quantity: u64,
    pub customer_po: Option<String>,
}

/// One historical order as the history view renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_no: String,
    pub erp_order_id: Option<String>,
    /// ISO date (YYYY-MM-DD).
    pub date: String,
    pub customer_po: Option<String>,
    pub status: String,
    pub line_items: Vec<CartLineView>,
}

impl From<Order> for OrderSummary {
    fn from(order: Order) -> Self {
        OrderSummary {
            order_no: order.order_no,
            erp_order_id: order.erp_order_id,
            date: order.date.to_string(),
            customer_po: order.customer_po,
            status: format!("{:?}", order.status),
            line_items: order
                .line_items
                .into_iter()
                .map(CartLineView::from)
                .collect(),
        }
    }
}

/// Submits the current cart as a sales order.
///
/// On any failure the cart and history are left exactly as they were; the
/// caller sees a typed [`ApiError`] with a user-facing message.
pub async fn submit_order(portal: &Portal, customer_po: &str) -> Result<OrderReceipt, ApiError> {
    debug!("submit_order command");

    let account = portal
        .session
        .current()
        .ok_or_else(|| ApiError::unauthenticated("Sign in to submit an order."))?;

    let _gate = portal.submit_gate.try_lock().map_err(|_| {
        warn!("Submission rejected: another one is still in flight");
        ApiError::busy("An order submission is already in progress.")
    })?;

    let customer_po = validate_po_reference(customer_po).map_err(CoreError::from)?;

    let cart = portal.orders.cart();
    if cart.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    let date = Utc::now().date_naive();
    let lines = cart.snapshot_lines(&portal.catalog);
    let payload = SalesOrderPayload::from_lines(
        &account.customer_id,
        date,
        &lines,
        customer_po.as_deref(),
    );

    // The remote call. On Err the `?` returns before any state changes.
    let ack = portal.gateway.submit(&payload).await?;

    let order = portal.orders.submit_cart(
        &portal.catalog,
        OrderDraft {
            order_no: generate_order_no(),
            erp_order_id: ack.erp_order_id,
            date,
            customer_po,
            customer_id: account.customer_id,
        },
    )?;

    portal.events.emit(PortalEvent::NavigateTo(View::Success));
    info!(order_no = %order.order_no, lines = order.line_count(), "Order submitted");

    Ok(OrderReceipt {
        order_no: order.order_no.clone(),
        date: order.date.to_string(),
        line_count: order.line_count(),
        total_quantity: order.total_quantity(),
        customer_po: order.customer_po,
    })
}

/// The order history, newest first.
pub fn order_history(portal: &Portal) -> Vec<OrderSummary> {
    debug!("order_history command");

    portal
        .orders
        .history()
        .into_iter()
        .map(OrderSummary::from)
        .collect()
}

/// Rebuilds the cart from a historical order.
///
/// An unknown `order_no` logs a warning and returns the cart unchanged, so
/// a UI can still toast; the state container itself stays silent.
pub fn reorder(portal: &Portal, order_no: &str) -> CartView {
    debug!(order_no = %order_no, "reorder command");

    if !portal.orders.reorder(order_no) {
        warn!(order_no = %order_no, "Reorder skipped: order not found");
    }
    cart_view(portal)
}

/// Generates a portal-local order reference: `SO-` plus four digits taken
/// from the clock's subsecond nanos. Locally unique enough for a session;
/// the ERP reference is the durable one.
fn generate_order_no() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    format!("SO-{:04}", nanos % 10000)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use orderdesk_gateway::{
        DryRunGateway, FixedCredentialVerifier, GatewayError, GatewayResult, SalesOrderGateway,
        SubmissionAck,
    };

    use crate::commands;
    use crate::config::PortalConfig;
    use crate::error::ErrorCode;
    use crate::seed;
    use crate::Portal;

    /// Gateway double that always reports a transport failure.
    struct FailingGateway;

    #[async_trait]
    impl SalesOrderGateway for FailingGateway {
        async fn submit(&self, _payload: &SalesOrderPayload) -> GatewayResult<SubmissionAck> {
            Err(GatewayError::SubmissionFailed("connection reset".to_string()))
        }
    }

    /// Gateway double that never resolves, for overlap tests.
    struct StallingGateway;

    #[async_trait]
    impl SalesOrderGateway for StallingGateway {
        async fn submit(&self, _payload: &SalesOrderPayload) -> GatewayResult<SubmissionAck> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(SubmissionAck::default())
        }
    }

    fn demo_portal(gateway: Arc<dyn SalesOrderGateway>) -> Portal {
        let verifier = Arc::new(
            FixedCredentialVerifier::new(seed::DEMO_EMAIL, seed::DEMO_SECRET, seed::demo_account())
                .with_latency(Duration::ZERO),
        );
        Portal::with_parts(
            PortalConfig::default(),
            seed::demo_catalog(),
            seed::demo_history(),
            verifier,
            gateway,
        )
    }

    async fn signed_in_portal(gateway: Arc<dyn SalesOrderGateway>) -> Portal {
        let portal = demo_portal(gateway);
        commands::session::login(&portal, seed::DEMO_EMAIL, seed::DEMO_SECRET)
            .await
            .unwrap();
        portal
    }

    fn dry_run() -> Arc<dyn SalesOrderGateway> {
        Arc::new(DryRunGateway::new().with_latency(Duration::ZERO))
    }

    #[tokio::test]
    async fn test_submit_requires_session() {
        let portal = demo_portal(dry_run());
        portal.orders.set_quantity("201", 2);

        let err = submit_order(&portal, "PO-1").await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Unauthenticated);
        assert_eq!(portal.orders.quantity_of("201"), 2);
    }

    #[tokio::test]
    async fn test_submit_scenario_with_po() {
        let portal = signed_in_portal(dry_run()).await;
        let seeded = portal.orders.order_count();
        portal.orders.set_quantity("201", 2);
        portal.orders.set_quantity("207", 1);

        let receipt = submit_order(&portal, "PO-1").await.unwrap();

        assert!(receipt.order_no.starts_with("SO-"));
        assert_eq!(receipt.line_count, 2);
        assert_eq!(receipt.total_quantity, 3);
        assert_eq!(receipt.customer_po.as_deref(), Some("PO-1"));
        assert!(portal.orders.is_cart_empty());

        let history = portal.orders.history();
        assert_eq!(history.len(), seeded + 1);
        let head = &history[0];
        assert_eq!(head.customer_po.as_deref(), Some("PO-1"));
        let lines: Vec<_> = head
            .line_items
            .iter()
            .map(|li| (li.item_id.as_str(), li.quantity))
            .collect();
        assert_eq!(lines, vec![("201", 2), ("207", 1)]);
    }

    #[tokio::test]
    async fn test_submit_blank_po_becomes_none() {
        let portal = signed_in_portal(dry_run()).await;
        portal.orders.set_quantity("202", 5);

        let receipt = submit_order(&portal, "   ").await.unwrap();

        assert_eq!(receipt.customer_po, None);
        assert_eq!(portal.orders.history()[0].customer_po, None);
    }

    #[tokio::test]
    async fn test_submit_empty_cart_rejected() {
        let portal = signed_in_portal(dry_run()).await;

        let err = submit_order(&portal, "").await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_gateway_failure_leaves_state_untouched() {
        let portal = signed_in_portal(Arc::new(FailingGateway)).await;
        let seeded = portal.orders.order_count();
        portal.orders.set_quantity("201", 2);

        let err = submit_order(&portal, "PO-1").await.unwrap_err();

        assert_eq!(err.code, ErrorCode::GatewayError);
        assert_eq!(err.message, "Failed to submit order. Please try again.");
        assert_eq!(portal.orders.quantity_of("201"), 2);
        assert_eq!(portal.orders.order_count(), seeded);
    }

    #[tokio::test]
    async fn test_concurrent_submit_rejected() {
        let portal = Arc::new(signed_in_portal(Arc::new(StallingGateway)).await);
        portal.orders.set_quantity("201", 1);

        let first = {
            let portal = Arc::clone(&portal);
            tokio::spawn(async move { submit_order(&portal, "").await })
        };
        tokio::task::yield_now().await;

        let err = submit_order(&portal, "").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OperationPending);

        first.abort();
    }

    #[tokio::test]
    async fn test_submit_emits_success_navigation() {
        let portal = signed_in_portal(dry_run()).await;
        portal.orders.set_quantity("201", 1);

        let mut rx = portal.subscribe();
        submit_order(&portal, "").await.unwrap();

        let mut saw_success_nav = false;
        while let Ok(event) = rx.try_recv() {
            if event == PortalEvent::NavigateTo(View::Success) {
                saw_success_nav = true;
            }
        }
        assert!(saw_success_nav);
    }

    #[tokio::test]
    async fn test_reorder_unknown_returns_unchanged_cart() {
        let portal = signed_in_portal(dry_run()).await;
        portal.orders.set_quantity("201", 3);

        let view = reorder(&portal, "SO-0000");

        assert_eq!(view.line_count, 1);
        assert_eq!(view.lines[0].quantity, 3);
    }

    #[tokio::test]
    async fn test_reorder_seeded_order_rebuilds_cart() {
        let portal = signed_in_portal(dry_run()).await;

        let view = reorder(&portal, "SO-8845");

        assert_eq!(view.line_count, 2);
        assert_eq!(portal.orders.quantity_of("208"), 20);
        assert_eq!(portal.orders.quantity_of("219"), 5);
    }

    #[tokio::test]
    async fn test_order_history_newest_first() {
        let portal = signed_in_portal(dry_run()).await;
        portal.orders.set_quantity("224", 1);
        submit_order(&portal, "").await.unwrap();

        let history = order_history(&portal);
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].status, "Submitted");
        assert_eq!(history[1].order_no, "SO-8892");
        assert_eq!(history[2].order_no, "SO-8845");
    }

    #[test]
    fn test_order_no_format() {
        let order_no = generate_order_no();
        assert!(order_no.starts_with("SO-"));
        assert_eq!(order_no.len(), 7);
        assert!(order_no[3..].chars().all(|c| c.is_ascii_digit()));
    }
}
