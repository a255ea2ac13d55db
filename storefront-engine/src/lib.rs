//! Storefront engine - cart and pricing logic for the ordering frontend
//!
//! Everything here is synchronous and runs on a single logical thread of
//! control: the caller fetches and deserializes the catalog up front,
//! then drives the engine through plain function calls. The engine's only
//! side effect is persisting the cart to an injected key-value store on
//! every mutation.
//!
//! # Module structure
//!
//! ```text
//! storefront-engine/src/
//! ├── pricing/       # Unit price resolution, price ranges, money helpers
//! ├── cart/          # Line store, totals, reconciliation, storage port
//! └── menu/          # Filter/search over the catalog
//! ```

pub mod cart;
pub mod menu;
pub mod pricing;

// Re-export public surface
pub use cart::storage::{KeyValueStore, MemoryStore, RedbStore, StoreError, StoreResult};
pub use cart::store::CartStore;
pub use cart::totals::{CartLineView, CartView, cart_total, cart_view, line_total};
pub use cart::orphaned_lines;
pub use menu::{category_counts, visible_items};
pub use pricing::{PriceRange, price_range, resolve_unit_price};
