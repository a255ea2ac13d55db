//! Menu item model
//!
//! Pricing is a tagged union: a `Single`-priced item carries exactly one
//! price, a `Multiple`-priced item carries an insertion-ordered list of
//! named size variations. The variant is the single authoritative price
//! source; a `Multiple` item with an empty variation list is unpriced
//! and unorderable.

use serde::{Deserialize, Serialize};

/// One sellable menu entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Category reference (String ID, required)
    pub category_id: String,
    /// Unavailable items stay visible but are not purchasable
    pub is_available: bool,
    /// Dietary flag
    pub is_vegetarian: bool,
    #[serde(flatten)]
    pub pricing: Pricing,
}

/// Price source for a menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "pricing_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Pricing {
    /// One flat price
    Single { price: f64 },
    /// Named size variations, in menu insertion order
    Multiple { variations: Vec<PriceVariation> },
}

/// One named size/price entry of a `Multiple`-priced item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceVariation {
    pub label: String,
    pub price: f64,
}

impl Pricing {
    /// Number of selectable variations (1 for `Single`)
    pub fn variation_count(&self) -> usize {
        match self {
            Pricing::Single { .. } => 1,
            Pricing::Multiple { variations } => variations.len(),
        }
    }

    /// Whether this pricing carries at least one usable price
    pub fn is_priced(&self) -> bool {
        match self {
            Pricing::Single { .. } => true,
            Pricing::Multiple { variations } => !variations.is_empty(),
        }
    }
}

impl MenuItem {
    /// Whether the item can be added to a cart at all
    pub fn is_orderable(&self) -> bool {
        self.is_available && self.pricing.is_priced()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi_item() -> MenuItem {
        MenuItem {
            id: "item:cake".to_string(),
            name: "Chocolate Cake".to_string(),
            description: "Rich and moist".to_string(),
            category_id: "cat:cakes".to_string(),
            is_available: true,
            is_vegetarian: true,
            pricing: Pricing::Multiple {
                variations: vec![
                    PriceVariation { label: "Half Kg".to_string(), price: 450.0 },
                    PriceVariation { label: "Full Kg".to_string(), price: 850.0 },
                ],
            },
        }
    }

    #[test]
    fn test_pricing_serde_tag_roundtrip() {
        let item = multi_item();
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"pricing_type\":\"MULTIPLE\""));

        let back: MenuItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_single_pricing_is_priced() {
        let pricing = Pricing::Single { price: 120.0 };
        assert!(pricing.is_priced());
        assert_eq!(pricing.variation_count(), 1);
    }

    #[test]
    fn test_empty_variations_unpriced() {
        let mut item = multi_item();
        item.pricing = Pricing::Multiple { variations: vec![] };
        assert!(!item.pricing.is_priced());
        assert!(!item.is_orderable());
    }

    #[test]
    fn test_unavailable_item_not_orderable() {
        let mut item = multi_item();
        item.is_available = false;
        assert!(item.pricing.is_priced());
        assert!(!item.is_orderable());
    }
}
