//! # State Module
//!
//! The owned state objects of the portal.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, the portal
//! uses one state type per concern:
//!
//! 1. **Better Separation of Concerns**: session and orders change for
//!    different reasons
//! 2. **Easier Testing**: each holder can be built with test doubles
//! 3. **Clearer Command Signatures**: commands reach for exactly the state
//!    they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        Portal                                   │   │
//! │  │  session: SessionState     orders: OrderState                   │   │
//! │  │  catalog: Catalog          config: PortalConfig                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌───────────────────┼───────────────────┐                     │
//! │          ▼                   ▼                   ▼                      │
//! │  ┌───────────────┐  ┌────────────────┐  ┌─────────────────┐           │
//! │  │ SessionState  │  │  OrderState    │  │  PortalConfig   │           │
//! │  │               │  │                │  │                 │           │
//! │  │ Mutex<Option< │  │  Mutex over    │  │  read-only      │           │
//! │  │  Account>>    │  │  {cart,        │  │  after startup  │           │
//! │  │ + login gate  │  │   history}     │  │                 │           │
//! │  └───────────────┘  └────────────────┘  └─────────────────┘           │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: std Mutex slot + tokio Mutex gate across the await    │
//! │  • OrderState: one std Mutex so submit swaps cart+history atomically   │
//! │  • Catalog: immutable after construction, no lock needed               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod orders;
mod session;

pub use orders::{OrderDraft, OrderState};
pub use session::SessionState;
