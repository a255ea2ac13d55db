//! Cart: line store, totals, storage port, reconciliation
//!
//! The store is the only mutable shared resource in the engine, owned
//! exclusively by the current session and driven through the operations
//! on [`CartStore`].

pub mod storage;
pub mod store;
pub mod totals;

// Re-exports
pub use storage::{KeyValueStore, MemoryStore, RedbStore, StoreError, StoreResult};
pub use store::CartStore;
pub use totals::{CartLineView, CartView, cart_total, cart_view, line_total};

use shared::cart::CartLine;
use shared::models::MenuItem;

/// Lines whose item no longer exists in the fresh catalog, or whose
/// item has since been made unavailable
///
/// The store never auto-removes these; callers reconcile the cart
/// against a freshly fetched catalog before checkout and flag or drop
/// the offending lines.
pub fn orphaned_lines<'a>(lines: &'a [CartLine], catalog: &[MenuItem]) -> Vec<&'a CartLine> {
    lines
        .iter()
        .filter(|line| {
            match catalog.iter().find(|item| item.id == line.item_id()) {
                Some(item) => !item.is_available,
                None => true,
            }
        })
        .collect()
}
