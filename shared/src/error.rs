//! Engine error taxonomy
//!
//! All engine-level errors are value-returned; none are panics. Every
//! variant is recoverable: the calling UI re-prompts or surfaces a
//! message, and no cart mutation has occurred when an error is returned.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by cart operations
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartError {
    /// Multi-priced item with more than one size and no selection made.
    /// The caller must prompt for a size before retrying.
    #[error("item '{item_id}' requires a size selection")]
    VariationRequired { item_id: String },

    /// Item is flagged unavailable in the catalog
    #[error("item '{item_id}' is currently unavailable")]
    ItemUnavailable { item_id: String },

    /// Multi-priced item with an empty variation list has no valid
    /// price and cannot be ordered
    #[error("item '{item_id}' has no price configured")]
    Unpriced { item_id: String },
}

impl CartError {
    pub fn variation_required(item_id: impl Into<String>) -> Self {
        Self::VariationRequired { item_id: item_id.into() }
    }

    pub fn item_unavailable(item_id: impl Into<String>) -> Self {
        Self::ItemUnavailable { item_id: item_id.into() }
    }

    pub fn unpriced(item_id: impl Into<String>) -> Self {
        Self::Unpriced { item_id: item_id.into() }
    }

    /// Item id the error refers to
    pub fn item_id(&self) -> &str {
        match self {
            Self::VariationRequired { item_id }
            | Self::ItemUnavailable { item_id }
            | Self::Unpriced { item_id } => item_id,
        }
    }
}

/// Result type for cart operations
pub type CartResult<T> = Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CartError::variation_required("item:1");
        assert_eq!(err.to_string(), "item 'item:1' requires a size selection");
        assert_eq!(err.item_id(), "item:1");
    }

    #[test]
    fn test_error_serde_tag() {
        let err = CartError::item_unavailable("item:2");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"ITEM_UNAVAILABLE\""));
    }
}
