//! # Cart Commands
//!
//! Cart manipulation. Every command returns the full [`CartView`] so a UI
//! can re-render without issuing a separate read.

use serde::Serialize;
use tracing::debug;

use orderdesk_core::LineItem;

use crate::Portal;

/// One cart line, joined against the catalog for display. Stale ids show
/// the placeholder name/SKU/unit rather than failing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub item_id: String,
    pub sku: String,
    pub name: String,
    pub unit: String,
    pub quantity: u32,
}

impl From<LineItem> for CartLineView {
    fn from(li: LineItem) -> Self {
        CartLineView {
            item_id: li.item_id,
            sku: li.sku_snapshot,
            name: li.name_snapshot,
            unit: li.unit_snapshot,
            quantity: li.quantity,
        }
    }
}

/// Cart contents and totals, in insertion order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub line_count: usize,
    pub total_quantity: u64,
}

pub(crate) fn cart_view(portal: &Portal) -> CartView {
    let cart = portal.orders.cart();
    CartView {
        line_count: cart.line_count(),
        total_quantity: cart.total_quantity(),
        lines: cart
            .snapshot_lines(&portal.catalog)
            .into_iter()
            .map(CartLineView::from)
            .collect(),
    }
}

/// Reads the current cart.
pub fn get_cart(portal: &Portal) -> CartView {
    debug!("get_cart command");
    cart_view(portal)
}

/// Sets the quantity for an item. Zero removes the line.
pub fn set_quantity(portal: &Portal, item_id: &str, quantity: u32) -> CartView {
    debug!(item_id = %item_id, quantity = %quantity, "set_quantity command");

    portal.orders.set_quantity(item_id, quantity);
    cart_view(portal)
}

/// Stepper +1.
pub fn increment(portal: &Portal, item_id: &str) -> CartView {
    debug!(item_id = %item_id, "increment command");

    portal.orders.adjust_quantity(item_id, 1);
    cart_view(portal)
}

/// Stepper -1. Decrementing an absent item changes nothing.
pub fn decrement(portal: &Portal, item_id: &str) -> CartView {
    debug!(item_id = %item_id, "decrement command");

    portal.orders.adjust_quantity(item_id, -1);
    cart_view(portal)
}

/// Empties the cart.
pub fn clear_cart(portal: &Portal) -> CartView {
    debug!("clear_cart command");

    portal.orders.clear_cart();
    cart_view(portal)
}
