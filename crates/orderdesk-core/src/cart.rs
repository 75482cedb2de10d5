//! # Cart
//!
//! The in-progress order: quantities keyed by catalog item id.
//!
//! ## Invariants
//! - Every stored quantity is >= 1; setting a quantity to zero deletes the
//!   line, and removing an absent line is a silent no-op
//! - Lines keep first-add order; updating a quantity never reorders
//! - The cart holds ids and quantities only; names/SKUs/units are joined in
//!   from the catalog when a snapshot is derived

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::types::LineItem;
use crate::{PLACEHOLDER_ITEM_NAME, PLACEHOLDER_SKU, PLACEHOLDER_UNIT};

// =============================================================================
// Cart Line
// =============================================================================

/// One cart entry: an item id and the quantity in units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Catalog item id. Not guaranteed to resolve: a stale id stays in the
    /// cart and is substituted with placeholders at snapshot time.
    pub item_id: String,

    /// Quantity in ordering units. Always >= 1 while stored.
    pub quantity: u32,
}

// =============================================================================
// Cart
// =============================================================================

/// Insertion-ordered cart.
///
/// Lines are private so every mutation flows through the named operations
/// and the invariants above hold by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Builds a cart from order snapshot lines (the reorder path).
    ///
    /// Later duplicates of an id overwrite earlier ones, matching the
    /// map-rebuild semantics of reorder.
    pub fn from_line_items(items: &[LineItem]) -> Self {
        let mut cart = Cart::new();
        for li in items {
            cart.set_quantity(&li.item_id, li.quantity);
        }
        cart
    }

    /// Sets the quantity for an item.
    ///
    /// ## Behavior
    /// - `quantity >= 1`: overwrites the existing line, or appends a new one
    /// - `quantity == 0`: removes the line; if no line exists, does nothing
    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            self.lines.retain(|l| l.item_id != item_id);
            return;
        }

        match self.lines.iter_mut().find(|l| l.item_id == item_id) {
            Some(line) => line.quantity = quantity,
            None => self.lines.push(CartLine {
                item_id: item_id.to_string(),
                quantity,
            }),
        }
    }

    /// Applies a signed stepper delta, clamping at zero.
    ///
    /// Decrementing an absent item is a silent no-op (the quantity never
    /// goes negative); incrementing an absent item inserts it.
    pub fn adjust_quantity(&mut self, item_id: &str, delta: i64) {
        let current = i64::from(self.quantity_of(item_id));
        let next = (current + delta).clamp(0, i64::from(u32::MAX));
        self.set_quantity(item_id, next as u32);
    }

    /// Quantity currently stored for an item, 0 when absent.
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.item_id == item_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// True when no lines are stored.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Derives order snapshot lines by joining the cart against the catalog.
    ///
    /// Cart insertion order is preserved. Ids that no longer resolve get the
    /// placeholder name/SKU/unit so a submission never fails on a stale id.
    pub fn snapshot_lines(&self, catalog: &Catalog) -> Vec<LineItem> {
        self.lines
            .iter()
            .map(|l| match catalog.get(&l.item_id) {
                Some(item) => LineItem {
                    item_id: l.item_id.clone(),
                    sku_snapshot: item.sku.clone(),
                    name_snapshot: item.name.clone(),
                    unit_snapshot: item.unit.clone(),
                    quantity: l.quantity,
                },
                None => LineItem {
                    item_id: l.item_id.clone(),
                    sku_snapshot: PLACEHOLDER_SKU.to_string(),
                    name_snapshot: PLACEHOLDER_ITEM_NAME.to_string(),
                    unit_snapshot: PLACEHOLDER_UNIT.to_string(),
                    quantity: l.quantity,
                },
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    fn item(id: &str, sku: &str, name: &str, unit: &str) -> Item {
        Item {
            id: id.to_string(),
            sku: sku.to_string(),
            name: name.to_string(),
            unit: unit.to_string(),
            stock_on_hand: 50,
            rate_cents: 2250,
        }
    }

    fn line_item(item_id: &str, quantity: u32) -> LineItem {
        LineItem {
            item_id: item_id.to_string(),
            sku_snapshot: format!("SKU-{item_id}"),
            name_snapshot: format!("Item {item_id}"),
            unit_snapshot: "case".to_string(),
            quantity,
        }
    }

    #[test]
    fn test_set_quantity_inserts_and_overwrites() {
        let mut cart = Cart::new();
        cart.set_quantity("201", 2);
        cart.set_quantity("207", 1);
        cart.set_quantity("201", 5);

        assert_eq!(cart.quantity_of("201"), 5);
        assert_eq!(cart.quantity_of("207"), 1);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.set_quantity("201", 3);
        cart.set_quantity("201", 0);

        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of("201"), 0);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.set_quantity("201", 3);
        cart.set_quantity("999", 0);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of("201"), 3);
    }

    #[test]
    fn test_insertion_order_survives_updates() {
        let mut cart = Cart::new();
        cart.set_quantity("203", 1);
        cart.set_quantity("201", 1);
        cart.set_quantity("202", 1);
        cart.set_quantity("201", 9);

        let order: Vec<_> = cart.lines().iter().map(|l| l.item_id.as_str()).collect();
        assert_eq!(order, vec!["203", "201", "202"]);
    }

    #[test]
    fn test_adjust_quantity_increments_and_decrements() {
        let mut cart = Cart::new();
        cart.adjust_quantity("201", 1);
        cart.adjust_quantity("201", 1);
        cart.adjust_quantity("201", -1);

        assert_eq!(cart.quantity_of("201"), 1);
    }

    #[test]
    fn test_adjust_quantity_clamps_at_zero() {
        let mut cart = Cart::new();
        cart.set_quantity("201", 1);
        cart.adjust_quantity("201", -5);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_adjust_absent_decrement_is_noop() {
        let mut cart = Cart::new();
        cart.adjust_quantity("201", -1);

        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of("201"), 0);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.set_quantity("201", 2);
        cart.set_quantity("207", 1);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.set_quantity("201", 2);
        cart.clear();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_from_line_items_last_duplicate_wins() {
        let lines = vec![line_item("201", 2), line_item("202", 4), line_item("201", 7)];
        let cart = Cart::from_line_items(&lines);

        assert_eq!(cart.quantity_of("201"), 7);
        assert_eq!(cart.quantity_of("202"), 4);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_snapshot_lines_joins_catalog() {
        let catalog = Catalog::new(vec![item("201", "CONT-RD-24", "Deli Container", "case")]);
        let mut cart = Cart::new();
        cart.set_quantity("201", 2);

        let lines = cart.snapshot_lines(&catalog);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].sku_snapshot, "CONT-RD-24");
        assert_eq!(lines[0].name_snapshot, "Deli Container");
        assert_eq!(lines[0].unit_snapshot, "case");
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_snapshot_lines_substitutes_placeholders() {
        let catalog = Catalog::new(vec![item("201", "CONT-RD-24", "Deli Container", "case")]);
        let mut cart = Cart::new();
        cart.set_quantity("201", 1);
        cart.set_quantity("999", 3);

        let lines = cart.snapshot_lines(&catalog);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].item_id, "999");
        assert_eq!(lines[1].name_snapshot, PLACEHOLDER_ITEM_NAME);
        assert_eq!(lines[1].sku_snapshot, PLACEHOLDER_SKU);
        assert_eq!(lines[1].unit_snapshot, PLACEHOLDER_UNIT);
        assert_eq!(lines[1].quantity, 3);
    }

    #[test]
    fn test_snapshot_preserves_cart_order() {
        let catalog = Catalog::new(vec![
            item("201", "A-1", "First", "case"),
            item("202", "B-2", "Second", "pack"),
        ]);
        let mut cart = Cart::new();
        cart.set_quantity("202", 1);
        cart.set_quantity("201", 1);

        let ids: Vec<_> = cart
            .snapshot_lines(&catalog)
            .into_iter()
            .map(|l| l.item_id)
            .collect();
        assert_eq!(ids, vec!["202", "201"]);
    }
}
