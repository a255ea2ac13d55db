//! Price resolution and money helpers using rust_decimal for precision
//!
//! Model types carry `f64` prices (the shape the API delivers); all
//! arithmetic here goes through `Decimal` so intermediate totals never
//! accumulate binary-float error. Conversion back to `f64` happens only
//! at the presentation boundary.

use rust_decimal::prelude::*;
use shared::models::{MenuItem, Pricing};

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round to the nearest whole currency unit (display only)
///
/// Internal totals keep full precision; this is applied once when
/// building presentation data, never between intermediate sums.
#[inline]
pub fn round_for_display(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Resolve the applicable unit price for an item
///
/// - `Single`: the flat price, regardless of any selection.
/// - `Multiple`: the price of the matching label; when no selection was
///   made (or the label is unknown) falls back to the first-inserted
///   variation so a price can always be rendered. The fallback does NOT
///   make the line orderable - add-to-cart validation is the store's job.
/// - `Multiple` with no variations: zero; callers treat the item as
///   unpriced.
pub fn resolve_unit_price(item: &MenuItem, selected: Option<&str>) -> Decimal {
    match &item.pricing {
        Pricing::Single { price } => to_decimal(*price),
        Pricing::Multiple { variations } => {
            let matched =
                selected.and_then(|label| variations.iter().find(|v| v.label == label));
            matched
                .or_else(|| variations.first())
                .map(|v| to_decimal(v.price))
                .unwrap_or(Decimal::ZERO)
        }
    }
}

/// Min/max price pair for "from X to Y" display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// Whether the item has a single effective price
    pub fn is_flat(&self) -> bool {
        self.min == self.max
    }
}

/// Price range over an item's variations
///
/// `Single` yields `min == max`; an unpriced item (empty variations)
/// yields `None`.
pub fn price_range(item: &MenuItem) -> Option<PriceRange> {
    match &item.pricing {
        Pricing::Single { price } => {
            let p = to_decimal(*price);
            Some(PriceRange { min: p, max: p })
        }
        Pricing::Multiple { variations } => {
            if variations.is_empty() {
                return None;
            }
            let mut min = Decimal::MAX;
            let mut max = Decimal::MIN;
            for v in variations {
                let p = to_decimal(v.price);
                min = min.min(p);
                max = max.max(p);
            }
            Some(PriceRange { min, max })
        }
    }
}
