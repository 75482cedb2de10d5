//! # Orderdesk Portal Demo Walkthrough
//!
//! A scripted run through every portal command, standing in for the UI.
//!
//! ## Usage
//! ```bash
//! cargo run -p orderdesk-portal
//!
//! # Skip the simulated latencies
//! ORDERDESK_LOGIN_LATENCY_MS=0 ORDERDESK_SUBMIT_LATENCY_MS=0 \
//!     cargo run -p orderdesk-portal
//! ```
//!
//! ## Walkthrough
//! 1. Failed sign-in (wrong secret), then a successful one
//! 2. Catalog search and the "buy again" view
//! 3. Stepper edits building a cart
//! 4. Submission with a customer PO, receipt
//! 5. History dump, then reordering a past order

use std::error::Error;

use orderdesk_portal::commands::catalog::BrowseMode;
use orderdesk_portal::commands::{cart, catalog, order, session};
use orderdesk_portal::{init_tracing, seed, Portal, PortalConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = PortalConfig::from_env();
    println!("Orderdesk Portal Demo");
    println!("=====================");
    println!("Distributor: {}", config.distributor_name);
    println!();

    let portal = Portal::new(config);

    // --- Sign in ------------------------------------------------------------

    println!("Signing in with a wrong secret...");
    match session::login(&portal, seed::DEMO_EMAIL, "letmein").await {
        Ok(_) => unreachable!("demo verifier must reject this"),
        Err(err) => println!("✗ Rejected as expected: {}", err.message),
    }

    println!("Signing in as {}...", seed::DEMO_EMAIL);
    let view = session::login(&portal, seed::DEMO_EMAIL, seed::DEMO_SECRET).await?;
    println!(
        "✓ Signed in: {} ({})",
        view.display_name.as_deref().unwrap_or("?"),
        view.customer_id.as_deref().unwrap_or("?")
    );
    println!();

    // --- Browse -------------------------------------------------------------

    let hits = catalog::browse_catalog(&portal, BrowseMode::All, "cup")?;
    println!("Catalog search \"cup\" → {} items:", hits.len());
    for entry in &hits {
        println!("  {:<12} {} ({})", entry.sku, entry.name, entry.unit);
    }

    let buy_again = catalog::browse_catalog(&portal, BrowseMode::BuyAgain, "")?;
    println!("Buy Again → {} previously ordered items", buy_again.len());
    println!();

    // --- Build a cart -------------------------------------------------------

    cart::set_quantity(&portal, "201", 2);
    cart::increment(&portal, "207");
    cart::increment(&portal, "207");
    cart::decrement(&portal, "207");
    let view = cart::get_cart(&portal);
    println!(
        "Cart: {} lines, {} units",
        view.line_count, view.total_quantity
    );
    for line in &view.lines {
        println!("  {:>3} x {} [{}]", line.quantity, line.name, line.sku);
    }
    println!();

    // --- Submit -------------------------------------------------------------

    println!("Submitting with customer PO \"PO-2026-002\"...");
    let receipt = order::submit_order(&portal, "PO-2026-002").await?;
    println!("✓ Submitted: {}", serde_json::to_string_pretty(&receipt)?);
    println!();

    // --- History & reorder --------------------------------------------------

    let history = order::order_history(&portal);
    println!("Order history ({} orders, newest first):", history.len());
    for summary in &history {
        println!(
            "  {} {} [{}] {} lines{}",
            summary.order_no,
            summary.date,
            summary.status,
            summary.line_items.len(),
            summary
                .customer_po
                .as_deref()
                .map(|po| format!(", PO {po}"))
                .unwrap_or_default()
        );
    }
    println!();

    let target = &history[history.len() - 1].order_no;
    println!("Reordering {target}...");
    let view = order::reorder(&portal, target);
    println!(
        "✓ Cart rebuilt: {} lines, {} units",
        view.line_count, view.total_quantity
    );

    session::logout(&portal);
    println!("✓ Signed out");

    Ok(())
}
