//! # Order State
//!
//! The cart/order state container: one lock over the draft cart and the
//! order history, so a submission swaps both atomically.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order State Operations                               │
//! │                                                                         │
//! │  UI Action               Operation                State Change          │
//! │  ─────────               ─────────                ────────────          │
//! │                                                                         │
//! │  Stepper +/- ──────────► adjust_quantity() ─────► cart line ±delta     │
//! │                                                                         │
//! │  Type quantity ────────► set_quantity() ────────► cart line = n        │
//! │                          (0 removes the line)                           │
//! │                                                                         │
//! │  Clear cart ───────────► clear_cart() ──────────► cart = {}            │
//! │                                                                         │
//! │  Submit ───────────────► submit_cart() ─────────► history.prepend,     │
//! │                          (snapshot derived         cart = {}            │
//! │                           under the lock)                               │
//! │                                                                         │
//! │  Reorder ──────────────► reorder() ─────────────► cart = order lines   │
//! │                          (replace, never merge)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why One Mutex?
//! Submission must prepend to history and clear the cart as one step; two
//! locks would open a window where observers see one without the other.

use std::collections::BTreeSet;
use std::sync::Mutex;

use chrono::NaiveDate;
use tracing::{debug, info};

use orderdesk_core::{Cart, Catalog, CoreError, CoreResult, Order, OrderStatus};

use crate::events::{EventBus, PortalEvent, View};

/// The cart and history guarded together.
#[derive(Debug, Default)]
struct OrderBook {
    cart: Cart,
    /// Newest first. Submissions prepend; nothing else writes.
    history: Vec<Order>,
}

/// The fields a submission supplies; everything else (snapshot lines,
/// status, cart clearing) is derived inside [`OrderState::submit_cart`].
#[derive(Debug, Clone)]
pub struct OrderDraft {
    /// Portal-local reference, generated by the submission workflow.
    pub order_no: String,

    /// Backend reference, when the gateway acknowledged with one.
    pub erp_order_id: Option<String>,

    /// Business date of the order.
    pub date: NaiveDate,

    /// Normalized customer PO reference (already trimmed, blank → None).
    pub customer_po: Option<String>,

    /// ERP customer reference of the submitting account.
    pub customer_id: String,
}

/// The owned cart/order state container.
///
/// All mutation flows through the named operations below; every change
/// publishes an event so views can re-read.
pub struct OrderState {
    book: Mutex<OrderBook>,
    events: EventBus,
}

impl OrderState {
    /// Creates a container with an empty cart and the given history
    /// (expected newest first, as the seed module provides it).
    pub fn new(history: Vec<Order>, events: EventBus) -> Self {
        OrderState {
            book: Mutex::new(OrderBook {
                cart: Cart::new(),
                history,
            }),
            events,
        }
    }

    // -------------------------------------------------------------------------
    // Cart operations
    // -------------------------------------------------------------------------

    /// Sets the quantity for an item (0 removes the line) and notifies.
    pub fn set_quantity(&self, item_id: &str, quantity: u32) {
        let mut book = self.lock();
        book.cart.set_quantity(item_id, quantity);
        self.emit_cart_changed(&book);
    }

    /// Applies a signed stepper delta, clamping at zero, and notifies.
    pub fn adjust_quantity(&self, item_id: &str, delta: i64) {
        let mut book = self.lock();
        book.cart.adjust_quantity(item_id, delta);
        self.emit_cart_changed(&book);
    }

    /// Empties the cart unconditionally and notifies.
    pub fn clear_cart(&self) {
        let mut book = self.lock();
        book.cart.clear();
        self.emit_cart_changed(&book);
    }

    /// A snapshot of the current cart.
    pub fn cart(&self) -> Cart {
        self.lock().cart.clone()
    }

    /// Quantity currently in the cart for an item, 0 when absent.
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.lock().cart.quantity_of(item_id)
    }

    /// True when the cart has no lines.
    pub fn is_cart_empty(&self) -> bool {
        self.lock().cart.is_empty()
    }

    // -------------------------------------------------------------------------
    // History operations
    // -------------------------------------------------------------------------

    /// Commits the current cart as a submitted order.
    ///
    /// Under one lock: derives the snapshot lines from the live cart (so the
    /// stored order can never diverge from the cart at commit time), builds
    /// the order, prepends it to history, and clears the cart. Rejects an
    /// empty cart with [`CoreError::EmptyCart`].
    ///
    /// Emits `CartChanged` and `HistoryChanged`; navigation is the
    /// workflow's concern.
    pub fn submit_cart(&self, catalog: &Catalog, draft: OrderDraft) -> CoreResult<Order> {
        let mut book = self.lock();

        if book.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let order = Order {
            order_no: draft.order_no,
            erp_order_id: draft.erp_order_id,
            date: draft.date,
            customer_po: draft.customer_po,
            status: OrderStatus::Submitted,
            customer_id: draft.customer_id,
            line_items: book.cart.snapshot_lines(catalog),
        };

        book.history.insert(0, order.clone());
        book.cart.clear();

        info!(
            order_no = %order.order_no,
            lines = order.line_count(),
            "Order committed to history"
        );
        self.emit_cart_changed(&book);
        self.events.emit(PortalEvent::HistoryChanged {
            order_count: book.history.len(),
        });

        Ok(order)
    }

    /// The order history, newest first.
    pub fn history(&self) -> Vec<Order> {
        self.lock().history.clone()
    }

    /// Number of orders in history.
    pub fn order_count(&self) -> usize {
        self.lock().history.len()
    }

    /// Looks up a historical order by its portal-local reference.
    pub fn find_order(&self, order_no: &str) -> Option<Order> {
        self.lock()
            .history
            .iter()
            .find(|o| o.order_no == order_no)
            .cloned()
    }

    /// Distinct item ids across all historical line items (feeds the
    /// catalog's "buy again" view).
    pub fn previously_ordered_ids(&self) -> BTreeSet<String> {
        self.lock()
            .history
            .iter()
            .flat_map(|o| o.line_items.iter())
            .map(|li| li.item_id.clone())
            .collect()
    }

    /// Replaces the cart with the quantities of a historical order.
    ///
    /// ## Behavior
    /// - Unknown `order_no`: mutates nothing, emits nothing, returns `false`
    /// - Known: the whole cart is replaced (never merged), `CartChanged`
    ///   fires, and a navigate-to-catalog event points the UI back at the
    ///   ordering view; returns `true`
    pub fn reorder(&self, order_no: &str) -> bool {
        let mut book = self.lock();

        let Some(order) = book.history.iter().find(|o| o.order_no == order_no) else {
            debug!(order_no = %order_no, "Reorder target not in history");
            return false;
        };

        book.cart = Cart::from_line_items(&order.line_items);
        info!(order_no = %order_no, lines = book.cart.line_count(), "Cart rebuilt from order");

        self.emit_cart_changed(&book);
        self.events.emit(PortalEvent::NavigateTo(View::Catalog));
        true
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn lock(&self) -> std::sync::MutexGuard<'_, OrderBook> {
        self.book.lock().expect("Order book mutex poisoned")
    }

    fn emit_cart_changed(&self, book: &OrderBook) {
        self.events.emit(PortalEvent::CartChanged {
            line_count: book.cart.line_count(),
            total_quantity: book.cart.total_quantity(),
        });
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
