//! Cart line store
//!
//! Ordered sequence of cart lines, unique by item id. All mutations run
//! synchronously on the caller's thread and persist the full state to
//! the injected [`KeyValueStore`] before returning. Mutations are applied
//! in the order the UI issues them; there is no internal concurrency.
//!
//! Persistence policy: loading tolerates absent or corrupt data (an
//! empty cart, logged at `warn`); persist failures are logged and
//! swallowed so a flaky disk can never make a cart mutation fail.

use super::storage::{CART_LINES_KEY, KeyValueStore, PENDING_VARIATIONS_KEY};
use shared::cart::CartLine;
use shared::error::{CartError, CartResult};
use shared::models::{MenuItem, Pricing};
use std::collections::HashMap;
use tracing::{debug, warn};

/// The session's cart, backed by a durable key-value store
pub struct CartStore<S: KeyValueStore> {
    storage: S,
    lines: Vec<CartLine>,
    /// Size selections made in the picker before the item lands in the
    /// cart, keyed by item id; consumed on a successful add
    pending_variations: HashMap<String, String>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Load the cart from storage, falling back to empty on absence or
    /// malformed data
    pub fn new(storage: S) -> Self {
        let lines = load_json(&storage, CART_LINES_KEY).unwrap_or_default();
        let pending_variations = load_json(&storage, PENDING_VARIATIONS_KEY).unwrap_or_default();
        Self { storage, lines, pending_variations }
    }

    // ========== Accessors ==========

    /// Current lines, in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines (cart badge count)
    pub fn total_quantity(&self) -> i32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Line for the given item id, if present
    pub fn line(&self, item_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id() == item_id)
    }

    /// Pending size selection for the given item id, if any
    pub fn pending_variation(&self, item_id: &str) -> Option<&str> {
        self.pending_variations.get(item_id).map(String::as_str)
    }

    // ========== Mutations ==========

    /// Add an item to the cart, or increment its quantity if already
    /// present
    ///
    /// Fails without mutating when the item is unavailable, unpriced, or
    /// needs a size selection that neither `requested` nor the pending
    /// map provides. An item with exactly one variation auto-selects it.
    pub fn add_item(&mut self, item: &MenuItem, requested: Option<&str>) -> CartResult<()> {
        if !item.is_available {
            return Err(CartError::item_unavailable(&item.id));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id() == item.id) {
            line.quantity += 1;
            line.touch();
            debug!(item_id = %item.id, quantity = line.quantity, "cart line incremented");
            self.persist();
            return Ok(());
        }

        let selected = self.resolve_selection(item, requested)?;
        self.pending_variations.remove(&item.id);
        debug!(item_id = %item.id, variation = ?selected, "cart line added");
        self.lines.push(CartLine::new(item.clone(), selected));
        self.persist();
        Ok(())
    }

    /// Set a line's quantity exactly; 0 or below removes the line
    pub fn update_quantity(&mut self, item_id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove_item(item_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id() == item_id) {
            line.quantity = quantity;
            line.touch();
            debug!(item_id, quantity, "cart quantity updated");
            self.persist();
        }
    }

    /// Remove a line; no-op on an absent id
    pub fn remove_item(&mut self, item_id: &str) {
        let before = self.lines.len();
        self.lines.retain(|l| l.item_id() != item_id);
        if self.lines.len() != before {
            debug!(item_id, "cart line removed");
            self.persist();
        }
    }

    /// Change the selected size on an existing line; quantity unchanged
    pub fn set_variation(&mut self, item_id: &str, variation: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id() == item_id) {
            line.selected_variation = Some(variation.to_string());
            line.touch();
            self.persist();
        }
    }

    /// Set free-text instructions on an existing line
    pub fn set_instructions(&mut self, item_id: &str, text: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id() == item_id) {
            line.special_instructions = if text.is_empty() {
                None
            } else {
                Some(text.to_string())
            };
            line.touch();
            self.persist();
        }
    }

    /// Record a size selection made before the item is added
    pub fn set_pending_variation(&mut self, item_id: &str, variation: &str) {
        self.pending_variations
            .insert(item_id.to_string(), variation.to_string());
        self.persist();
    }

    /// Empty the cart and pending selections
    pub fn clear(&mut self) {
        self.lines.clear();
        self.pending_variations.clear();
        debug!("cart cleared");
        self.persist();
    }

    // ========== Internal ==========

    /// Resolve the size selection for a new line
    fn resolve_selection(
        &self,
        item: &MenuItem,
        requested: Option<&str>,
    ) -> CartResult<Option<String>> {
        let variations = match &item.pricing {
            Pricing::Single { .. } => return Ok(None),
            Pricing::Multiple { variations } => variations,
        };
        match variations.len() {
            0 => Err(CartError::unpriced(&item.id)),
            1 => Ok(Some(
                requested
                    .map(str::to_string)
                    .unwrap_or_else(|| variations[0].label.clone()),
            )),
            _ => requested
                .map(str::to_string)
                .or_else(|| self.pending_variations.get(&item.id).cloned())
                .map(Some)
                .ok_or_else(|| CartError::variation_required(&item.id)),
        }
    }

    /// Write both logical keys; failures are logged, never surfaced
    fn persist(&self) {
        persist_json(&self.storage, CART_LINES_KEY, &self.lines);
        persist_json(
            &self.storage,
            PENDING_VARIATIONS_KEY,
            &self.pending_variations,
        );
    }
}

/// Load and deserialize one logical key; absent or malformed data yields
/// `None` (malformed data is logged - a corrupt cart is "no cart")
fn load_json<T: serde::de::DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Option<T> {
    let bytes = match storage.get(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(err) => {
            warn!(key, error = %err, "failed to read cart state, starting empty");
            return None;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, error = %err, "corrupt cart state, starting empty");
            None
        }
    }
}

/// Serialize and write one logical key, logging on failure
fn persist_json<T: serde::Serialize>(storage: &dyn KeyValueStore, key: &str, value: &T) {
    let bytes = match serde_json::to_vec(value) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(key, error = %err, "failed to serialize cart state");
            return;
        }
    };
    if let Err(err) = storage.put(key, &bytes) {
        warn!(key, error = %err, "failed to persist cart state");
    }
}
