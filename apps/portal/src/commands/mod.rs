//! # Commands Module
//!
//! The surface a UI binds to: free functions over [`&Portal`](crate::Portal)
//! returning `Result<DTO, ApiError>` (or a bare DTO when nothing can fail).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── session.rs  ◄─── login, logout, current_session
//! ├── catalog.rs  ◄─── browse_catalog, get_item
//! ├── cart.rs     ◄─── get_cart, set_quantity, increment, decrement, clear
//! └── order.rs    ◄─── submit_order, order_history, reorder
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI (any frontend)                                                      │
//! │  ─────────────────                                                      │
//! │  const cart = await portal.setQuantity('201', 2);                       │
//! │         │                                                               │
//! │         │ (binding layer: JSON in, JSON out)                            │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  pub fn set_quantity(                                                   │
//! │      portal: &Portal,        ◄── the owned state objects               │
//! │      item_id: &str,          ◄── from invoke params                    │
//! │      quantity: u32,                                                     │
//! │  ) -> CartView                                                          │
//! │         │                                                               │
//! │         │ (serde camelCase serialization)                               │
//! │         ▼                                                               │
//! │  UI receives: { lines: [...], lineCount: 1, totalQuantity: 2 }          │
//! │                                                                         │
//! │  State changes additionally fan out on the EventBus, so views that     │
//! │  did not issue the command still learn to re-read.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod order;
pub mod session;
