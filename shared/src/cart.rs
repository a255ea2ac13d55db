//! Cart line types
//!
//! A cart line snapshots the menu item at add time and is keyed by the
//! item id (one line per distinct item; repeat adds increment quantity).
//! Lines are persisted to the session's durable local store, so every
//! field is serde-friendly and tolerant of older stored shapes via
//! `#[serde(default)]`.

use crate::models::MenuItem;
use serde::{Deserialize, Serialize};

/// One row in the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Item snapshot taken when the line was created. The live catalog
    /// may have moved on since; reconciliation against a fresh fetch is
    /// the caller's responsibility before checkout.
    pub item: MenuItem,
    /// Positive quantity; a requested decrement to 0 or below removes
    /// the line entirely (enforced by the store, not here)
    pub quantity: i32,
    /// Selected size label for `Multiple`-priced items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_variation: Option<String>,
    /// Free text, no effect on pricing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    /// Creation timestamp (ms)
    #[serde(default)]
    pub created_at: i64,
    /// Last mutation timestamp (ms)
    #[serde(default)]
    pub updated_at: i64,
}

impl CartLine {
    /// Create a new line with quantity 1
    pub fn new(item: MenuItem, selected_variation: Option<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            item,
            quantity: 1,
            selected_variation,
            special_instructions: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Item id this line is keyed by
    pub fn item_id(&self) -> &str {
        &self.item.id
    }

    /// Refresh the mutation timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().timestamp_millis();
    }
}
