//! # Catalog Commands
//!
//! Read-only browsing over the static catalog. The entries returned here
//! carry the live cart quantity so a catalog view can render quantity
//! steppers without a second round trip.

use serde::{Deserialize, Serialize};
use tracing::debug;

use orderdesk_core::validation::validate_search_query;
use orderdesk_core::{CoreError, Item};

use crate::error::ApiError;
use crate::Portal;

/// Which slice of the catalog to browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrowseMode {
    /// The whole catalog.
    All,
    /// Only items that appear in some historical order.
    BuyAgain,
}

/// One catalog row as the UI renders it.
///
/// The unit rate stays out of this DTO on purpose: the portal never shows
/// pricing, it only carries rates for payload enrichment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub unit: String,
    pub stock_on_hand: i64,
    /// Quantity of this item currently in the cart (0 when absent).
    pub in_cart_quantity: u32,
}

impl CatalogEntry {
    fn from_item(portal: &Portal, item: &Item) -> Self {
        CatalogEntry {
            id: item.id.clone(),
            sku: item.sku.clone(),
            name: item.name.clone(),
            unit: item.unit.clone(),
            stock_on_hand: item.stock_on_hand,
            in_cart_quantity: portal.orders.quantity_of(&item.id),
        }
    }
}

/// Browses the catalog.
///
/// ## Behavior
/// - `mode` picks the slice: everything, or only previously ordered items
///   (derived from the order history, not a fixed list)
/// - `term` filters by case-insensitive substring of name or SKU; blank
///   matches everything; over-long terms are a validation error
/// - Search composes with either mode
pub fn browse_catalog(
    portal: &Portal,
    mode: BrowseMode,
    term: &str,
) -> Result<Vec<CatalogEntry>, ApiError> {
    debug!(?mode, term = %term, "browse_catalog command");

    let term = validate_search_query(term).map_err(CoreError::from)?;

    let entries = match mode {
        BrowseMode::All => portal
            .catalog
            .search(&term)
            .map(|item| CatalogEntry::from_item(portal, item))
            .collect(),
        BrowseMode::BuyAgain => {
            let ids = portal.orders.previously_ordered_ids();
            portal
                .catalog
                .filter_by_ids(&ids)
                .filter(|item| {
                    let needle = term.to_lowercase();
                    needle.is_empty()
                        || item.name.to_lowercase().contains(&needle)
                        || item.sku.to_lowercase().contains(&needle)
                })
                .map(|item| CatalogEntry::from_item(portal, item))
                .collect()
        }
    };

    Ok(entries)
}

/// Looks up a single catalog item by id.
pub fn get_item(portal: &Portal, id: &str) -> Result<CatalogEntry, ApiError> {
    debug!(id = %id, "get_item command");

    portal
        .catalog
        .get(id)
        .map(|item| CatalogEntry::from_item(portal, item))
        .ok_or_else(|| ApiError::not_found("Item", id))
}

// =============================================================================
// Unit Tests
// =============================================================================
