//! # Demo Seed Data
//!
//! The fixed demo dataset the portal boots with: one customer account, a
//! wholesale disposables catalog, and two historical orders. Everything the
//! walkthrough and the tests touch lives here, in one place.

use chrono::NaiveDate;

use orderdesk_core::{Cart, Catalog, CustomerAccount, Item, Order, OrderStatus};

/// Sign-in email of the demo account.
pub const DEMO_EMAIL: &str = "customer@example.com";

/// Sign-in secret of the demo account.
pub const DEMO_SECRET: &str = "password123";

/// ERP customer reference of the demo account.
pub const DEMO_CUSTOMER_ID: &str = "cust-456789";

/// Demo catalog rows: (id, sku, name, unit, stock_on_hand, rate_cents).
///
/// Stock counts of zero are deliberate: those items stay orderable and the
/// distributor treats them as backorders.
const DEMO_ITEMS: &[(&str, &str, &str, &str, i64, i64)] = &[
    ("201", "CONT-RD-24", "24 oz Round Deli Container with Lid", "case", 38, 4250),
    ("202", "CUP-CL-12", "12 oz Clear PET Cold Cup", "case", 112, 6890),
    ("203", "LID-DM-12", "12 oz Dome Lid for Cold Cup", "case", 96, 4120),
    ("204", "CUP-HT-08", "8 oz Double-Wall Hot Cup", "case", 74, 7150),
    ("205", "LID-HT-08", "8 oz Hot Cup Sip Lid", "case", 0, 3480),
    ("206", "BAG-KR-SM", "Small Kraft Paper Bag", "bundle", 210, 2860),
    ("207", "BAG-KR-LG", "Large Kraft Paper Bag with Handles", "bundle", 187, 5240),
    ("208", "NAP-DN-1P", "1-Ply Dinner Napkin", "case", 64, 3975),
    ("209", "TWL-RL-2P", "2-Ply Kitchen Roll Towel", "case", 41, 5580),
    ("210", "FRK-PS-HW", "Heavyweight Plastic Fork", "case", 0, 3320),
    ("211", "SPN-PS-HW", "Heavyweight Plastic Spoon", "case", 58, 3320),
    ("212", "KNF-PS-HW", "Heavyweight Plastic Knife", "case", 63, 3320),
    ("213", "TRY-AL-HD", "Half-Deep Aluminum Steam Tray", "case", 29, 6740),
    ("214", "FLM-PV-18", "18 in PVC Cling Film Roll", "roll", 85, 1890),
    ("215", "FOI-AL-18", "18 in Standard Aluminum Foil Roll", "roll", 47, 2760),
    ("216", "GLV-NT-M", "Nitrile Gloves Medium", "case", 152, 8960),
    ("217", "GLV-NT-L", "Nitrile Gloves Large", "case", 139, 8960),
    ("218", "BOX-PZ-16", "16 in Corrugated Pizza Box", "bundle", 73, 7420),
    ("219", "CNT-HG-9", "9 in Hinged Foam Container", "case", 88, 4680),
    ("220", "CNT-MW-32", "32 oz Microwavable Container with Lid", "case", 54, 6230),
    ("221", "STR-WR-7", "7.75 in Wrapped Straw", "case", 0, 2340),
    ("222", "WRP-SD-12", "12 in Sandwich Wrap Paper", "case", 66, 3140),
    ("223", "TIS-IF-LT", "Interfold Dispenser Tissue", "case", 91, 3580),
    ("224", "CLN-DG-QT", "Quart Degreaser Concentrate", "each", 35, 1260),
];

/// The demo customer account.
pub fn demo_account() -> CustomerAccount {
    CustomerAccount {
        id: "user-123".to_string(),
        name: "John Doe".to_string(),
        email: DEMO_EMAIL.to_string(),
        customer_id: DEMO_CUSTOMER_ID.to_string(),
    }
}

/// Builds the demo catalog.
pub fn demo_catalog() -> Catalog {
    let items = DEMO_ITEMS
        .iter()
        .map(|&(id, sku, name, unit, stock_on_hand, rate_cents)| Item {
            id: id.to_string(),
            sku: sku.to_string(),
            name: name.to_string(),
            unit: unit.to_string(),
            stock_on_hand,
            rate_cents,
        })
        .collect();
    Catalog::new(items)
}

/// Builds the demo order history, newest first.
///
/// Both orders belong to the demo account and already carry ERP references;
/// they were "accepted" before the portal ever started.
pub fn demo_history() -> Vec<Order> {
    let catalog = demo_catalog();
    vec![
        seed_order(
            &catalog,
            "SO-8892",
            Some("ERP-9921"),
            seed_date(2026, 1, 3),
            Some("PO-2026-001"),
            OrderStatus::Submitted,
            &[("202", 5), ("222", 3), ("217", 2), ("214", 10)],
        ),
        seed_order(
            &catalog,
            "SO-8845",
            Some("ERP-8812"),
            seed_date(2025, 12, 15),
            Some("DEC-RESTOCK"),
            OrderStatus::Fulfilled,
            &[("208", 20), ("219", 5)],
        ),
    ]
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn seed_order(
    catalog: &Catalog,
    order_no: &str,
    erp_order_id: Option<&str>,
    date: NaiveDate,
    customer_po: Option<&str>,
    status: OrderStatus,
    lines: &[(&str, u32)],
) -> Order {
    // Seed lines go through the same cart join as real submissions, so the
    // snapshots always agree with the catalog rows above.
    let mut cart = Cart::new();
    for &(item_id, quantity) in lines {
        cart.set_quantity(item_id, quantity);
    }

    Order {
        order_no: order_no.to_string(),
        erp_order_id: erp_order_id.map(String::from),
        date,
        customer_po: customer_po.map(String::from),
        status,
        customer_id: DEMO_CUSTOMER_ID.to_string(),
        line_items: cart.snapshot_lines(catalog),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
