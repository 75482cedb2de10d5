//! # orderdesk-core: Pure Domain Logic for Orderdesk
//!
//! This crate is the **heart** of the Orderdesk portal. It contains the
//! catalog, cart and order domain as pure logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Orderdesk Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Frontend (any UI)                          │   │
//! │  │    Login view ──► Catalog view ──► Cart ──► History view        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands + events                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  apps/portal (state engine)                     │   │
//! │  │    SessionState, OrderState, EventBus, command layer            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ orderdesk-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │  catalog  │  │   cart    │  │ validation│   │   │
//! │  │   │   Item    │  │  lookup   │  │   Cart    │  │   rules   │   │   │
//! │  │   │   Order   │  │  search   │  │ snapshots │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCKS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             orderdesk-gateway (remote boundary)                 │   │
//! │  │        credential verification, sales-order submission          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Order, LineItem, CustomerAccount)
//! - [`catalog`] - Immutable catalog with lookup, search and subset filters
//! - [`cart`] - Cart math and order snapshot derivation
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system and clock access is FORBIDDEN here
//! 3. **Snapshot History**: Orders freeze the catalog fields they were built
//!    from, so history never dangles on catalog edits
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use orderdesk_core::Cart` instead of
// `use orderdesk_core::cart::Cart`

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name substituted into a snapshot line when its item id no longer resolves.
///
/// ## Why a placeholder?
/// Submission must never fail on a stale cart entry; the order records what
/// it can and the line stays visible in history.
pub const PLACEHOLDER_ITEM_NAME: &str = "Unknown Item";

/// SKU substituted into a snapshot line when its item id no longer resolves.
pub const PLACEHOLDER_SKU: &str = "N/A";

/// Ordering unit substituted when an item id no longer resolves.
pub const PLACEHOLDER_UNIT: &str = "unit";

/// Maximum length of a catalog search query, after trimming.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

/// Maximum length of a customer PO reference, after trimming.
pub const MAX_PO_REFERENCE_LEN: usize = 50;
