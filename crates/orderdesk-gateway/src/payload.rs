//! # Sales Order Payload
//!
//! The wire shape a submission sends to the distributor's ERP.
//!
//! ## Wire Format (JSON, snake_case)
//! ```json
//! {
//!   "customer_id": "cust-456789",
//!   "date": "2026-01-03",
//!   "line_items": [
//!     { "item_id": "201", "quantity": 2, "unit": "case" }
//!   ],
//!   "custom_fields": [
//!     { "label": "Customer PO", "value": "PO-2026-001" }
//!   ]
//! }
//! ```
//!
//! Field names stay snake_case because they mirror the external contract,
//! unlike the portal's camelCase DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use orderdesk_core::LineItem;

/// Label under which a customer PO reference rides in `custom_fields`.
pub const CUSTOMER_PO_LABEL: &str = "Customer PO";

/// One payload line: id, quantity and unit only. Names and SKUs are the
/// ERP's to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadLine {
    pub item_id: String,
    pub quantity: u32,
    pub unit: String,
}

/// A free-form label/value pair the ERP attaches to the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub label: String,
    pub value: String,
}

/// The complete sales-order submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesOrderPayload {
    /// ERP customer reference of the ordering customer.
    pub customer_id: String,

    /// Business date of the order (serializes as YYYY-MM-DD).
    pub date: NaiveDate,

    /// Order lines, in cart order.
    pub line_items: Vec<PayloadLine>,

    /// Optional extras; currently only the customer PO reference.
    pub custom_fields: Vec<CustomField>,
}

impl SalesOrderPayload {
    /// Builds a payload from snapshot lines.
    ///
    /// The PO custom field is attached only when a reference is present;
    /// an order without one sends an empty `custom_fields` array.
    pub fn from_lines(
        customer_id: &str,
        date: NaiveDate,
        lines: &[LineItem],
        customer_po: Option<&str>,
    ) -> Self {
        let line_items = lines
            .iter()
            .map(|li| PayloadLine {
                item_id: li.item_id.clone(),
                quantity: li.quantity,
                unit: li.unit_snapshot.clone(),
            })
            .collect();

        let custom_fields = customer_po
            .map(|po| {
                vec![CustomField {
                    label: CUSTOMER_PO_LABEL.to_string(),
                    value: po.to_string(),
                }]
            })
            .unwrap_or_default();

        SalesOrderPayload {
            customer_id: customer_id.to_string(),
            date,
            line_items,
            custom_fields,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(item_id: &str, quantity: u32, unit: &str) -> LineItem {
        LineItem {
            item_id: item_id.to_string(),
            sku_snapshot: format!("SKU-{item_id}"),
            name_snapshot: format!("Item {item_id}"),
            unit_snapshot: unit.to_string(),
            quantity,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()
    }

    #[test]
    fn test_payload_shape_with_po() {
        let payload = SalesOrderPayload::from_lines(
            "cust-456789",
            date(),
            &[line("201", 2, "case"), line("207", 1, "pack")],
            Some("PO-2026-001"),
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["customer_id"], "cust-456789");
        assert_eq!(json["date"], "2026-01-03");
        assert_eq!(json["line_items"][0]["item_id"], "201");
        assert_eq!(json["line_items"][0]["quantity"], 2);
        assert_eq!(json["line_items"][1]["unit"], "pack");
        assert_eq!(json["custom_fields"][0]["label"], "Customer PO");
        assert_eq!(json["custom_fields"][0]["value"], "PO-2026-001");
    }

    #[test]
    fn test_payload_without_po_has_no_custom_fields() {
        let payload =
            SalesOrderPayload::from_lines("cust-456789", date(), &[line("201", 2, "case")], None);

        assert!(payload.custom_fields.is_empty());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["custom_fields"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_payload_preserves_line_order() {
        let payload = SalesOrderPayload::from_lines(
            "cust-456789",
            date(),
            &[line("203", 1, "case"), line("201", 4, "case")],
            None,
        );

        let ids: Vec<_> = payload
            .line_items
            .iter()
            .map(|l| l.item_id.as_str())
            .collect();
        assert_eq!(ids, vec!["203", "201"]);
    }
}
