//! Shared types for the storefront engine
//!
//! Data model consumed on both sides of the engine boundary: catalog
//! items and categories as deserialized from the remote API, cart lines
//! as persisted to the local store, and the filter/error types the
//! engine operates on. No I/O and no engine logic lives here.

pub mod cart;
pub mod error;
pub mod filter;
pub mod models;

// Re-exports
pub use cart::CartLine;
pub use error::{CartError, CartResult};
pub use filter::{ALL_CATEGORIES, DietaryMode, FilterState};
pub use models::{Category, MenuItem, PriceVariation, Pricing};
