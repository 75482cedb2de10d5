//! # Domain Types
//!
//! Core domain types used throughout the Orderdesk portal.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │      Order      │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (catalog)   │   │  order_no       │   │  item_id        │       │
//! │  │  sku (business) │   │  erp_order_id   │   │  sku_snapshot   │       │
//! │  │  name           │   │  status         │   │  name_snapshot  │       │
//! │  │  unit           │   │  date           │   │  unit_snapshot  │       │
//! │  │  rate_cents     │   │  line_items     │   │  quantity       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ CustomerAccount │   │   OrderStatus   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  id (internal)  │   │  Draft          │                             │
//! │  │  name, email    │   │  Submitted      │                             │
//! │  │  customer_id    │   │  Fulfilled      │                             │
//! │  │  (ERP ref)      │   │  Cancelled      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Orders carry two references:
//! - `order_no`: portal-local "SO-NNNN" reference, assigned at submission
//! - `erp_order_id`: the distributor backend's reference, absent until the
//!   ERP has accepted the order

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Item
// =============================================================================

/// A catalog item available for wholesale ordering.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Catalog identifier (numeric string in the seed data).
    pub id: String,

    /// Stock Keeping Unit - business identifier shown to customers.
    pub sku: String,

    /// Display name shown in the catalog and on order lines.
    pub name: String,

    /// Ordering unit ("case", "pack", "roll", ...).
    pub unit: String,

    /// Distributor stock on hand. Informational only: ordering past it is
    /// allowed and treated as a backorder.
    pub stock_on_hand: i64,

    /// Unit rate in cents. Carried for payload enrichment, never summed or
    /// shown by the portal.
    pub rate_cents: i64,
}

// =============================================================================
// Customer Account
// =============================================================================

/// The authenticated identity stored by the session holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerAccount {
    /// Opaque internal identifier.
    pub id: String,

    /// Display name shown in the portal header.
    pub name: String,

    /// Sign-in email.
    pub email: String,

    /// ERP customer reference. Every submitted order carries this.
    pub customer_id: String,
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle status of a sales order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order is being assembled and has not been submitted.
    Draft,
    /// Order was submitted to the distributor.
    Submitted,
    /// Distributor has shipped/fulfilled the order.
    Fulfilled,
    /// Order was cancelled.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Draft
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A single line of a submitted order.
///
/// Name, SKU and unit are snapshots taken at submission time, so history
/// stays readable even if the catalog entry changes or disappears. Lines
/// whose item no longer resolves at submission time carry the placeholder
/// values from the crate constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Catalog item id this line was built from.
    pub item_id: String,

    /// Snapshot of the item SKU at submission time.
    pub sku_snapshot: String,

    /// Snapshot of the item name at submission time.
    pub name_snapshot: String,

    /// Snapshot of the ordering unit at submission time.
    pub unit_snapshot: String,

    /// Quantity ordered, in units. Always >= 1.
    pub quantity: u32,
}

// =============================================================================
// Order
// =============================================================================

/// A sales order in the customer's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Portal-local reference ("SO-8892").
    pub order_no: String,

    /// Backend reference, once the ERP has accepted the order.
    pub erp_order_id: Option<String>,

    /// Business date of the order.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Customer purchase-order reference, if one was supplied.
    pub customer_po: Option<String>,

    /// Lifecycle status.
    pub status: OrderStatus,

    /// ERP customer reference of the owning customer.
    pub customer_id: String,

    /// Snapshot lines, in cart insertion order.
    pub line_items: Vec<LineItem>,
}

impl Order {
    /// Number of distinct lines on the order.
    pub fn line_count(&self) -> usize {
        self.line_items.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.line_items.iter().map(|li| u64::from(li.quantity)).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(item_id: &str, quantity: u32) -> LineItem {
        LineItem {
            item_id: item_id.to_string(),
            sku_snapshot: format!("SKU-{item_id}"),
            name_snapshot: format!("Item {item_id}"),
            unit_snapshot: "case".to_string(),
            quantity,
        }
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Draft);
    }

    #[test]
    fn test_order_status_serializes_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Submitted).unwrap();
        assert_eq!(json, "\"submitted\"");
    }

    #[test]
    fn test_order_totals() {
        let order = Order {
            order_no: "SO-1001".to_string(),
            erp_order_id: None,
            date: NaiveDate::from_ymd_opt(2026, 1, 3).unwrap(),
            customer_po: Some("PO-1".to_string()),
            status: OrderStatus::Submitted,
            customer_id: "cust-1".to_string(),
            line_items: vec![line("201", 2), line("207", 1)],
        };
        assert_eq!(order.line_count(), 2);
        assert_eq!(order.total_quantity(), 3);
    }

    #[test]
    fn test_order_date_serializes_iso() {
        let order = Order {
            order_no: "SO-1001".to_string(),
            erp_order_id: Some("erp-42".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            customer_po: None,
            status: OrderStatus::Fulfilled,
            customer_id: "cust-1".to_string(),
            line_items: vec![line("208", 20)],
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["date"], "2025-12-15");
        assert_eq!(json["erp_order_id"], "erp-42");
    }
}
