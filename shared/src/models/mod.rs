//! Data models
//!
//! Catalog shapes as delivered by the remote menu API. The engine
//! assumes records are already deserialized into these types; it does
//! not re-validate them. All IDs are `String` (stable within a session).

pub mod category;
pub mod item;

// Re-exports
pub use category::Category;
pub use item::{MenuItem, PriceVariation, Pricing};
