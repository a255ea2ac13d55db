//! Cart total calculation
//!
//! Pure functions over a line-list snapshot: no mutation, no side
//! effects, callable repeatedly. Totals accumulate in `Decimal` and are
//! only rounded when building the presentation view.

use crate::pricing::{resolve_unit_price, round_for_display, to_f64};
use rust_decimal::Decimal;
use shared::cart::CartLine;

/// Total for one line: resolved unit price x quantity
pub fn line_total(line: &CartLine) -> Decimal {
    let unit_price = resolve_unit_price(&line.item, line.selected_variation.as_deref());
    unit_price * Decimal::from(line.quantity)
}

/// Total across all lines; zero for an empty cart
pub fn cart_total(lines: &[CartLine]) -> Decimal {
    lines.iter().map(line_total).sum()
}

/// One cart row as the presentation layer consumes it
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CartLineView {
    pub item_id: String,
    pub name: String,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_variation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    /// Per-unit price, 2 dp
    pub unit_price: f64,
    /// unit_price x quantity, 2 dp
    pub line_total: f64,
}

/// Plain-data cart summary for the presentation layer
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Full-precision subtotal, 2 dp
    pub subtotal: f64,
    /// Subtotal rounded to the nearest whole currency unit - the only
    /// place display rounding happens
    pub display_total: f64,
    /// Sum of quantities (badge count)
    pub total_quantity: i32,
}

/// Build the presentation view of the cart
pub fn cart_view(lines: &[CartLine]) -> CartView {
    let mut views = Vec::with_capacity(lines.len());
    let mut subtotal = Decimal::ZERO;
    let mut total_quantity = 0;

    for line in lines {
        let unit_price = resolve_unit_price(&line.item, line.selected_variation.as_deref());
        let total = unit_price * Decimal::from(line.quantity);
        subtotal += total;
        total_quantity += line.quantity;
        views.push(CartLineView {
            item_id: line.item.id.clone(),
            name: line.item.name.clone(),
            quantity: line.quantity,
            selected_variation: line.selected_variation.clone(),
            special_instructions: line.special_instructions.clone(),
            unit_price: to_f64(unit_price),
            line_total: to_f64(total),
        });
    }

    CartView {
        lines: views,
        subtotal: to_f64(subtotal),
        display_total: round_for_display(subtotal),
        total_quantity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::to_decimal;
    use shared::models::{MenuItem, PriceVariation, Pricing};

    fn line(id: &str, pricing: Pricing, quantity: i32, variation: Option<&str>) -> CartLine {
        let mut line = CartLine::new(
            MenuItem {
                id: id.to_string(),
                name: format!("Item {id}"),
                description: String::new(),
                category_id: "cat:1".to_string(),
                is_available: true,
                is_vegetarian: true,
                pricing,
            },
            variation.map(str::to_string),
        );
        line.quantity = quantity;
        line
    }

    #[test]
    fn test_line_total_single_pricing() {
        let line = line("1", Pricing::Single { price: 120.0 }, 2, None);
        assert_eq!(line_total(&line), to_decimal(240.0));
    }

    #[test]
    fn test_line_total_uses_selected_variation() {
        let pricing = Pricing::Multiple {
            variations: vec![
                PriceVariation { label: "Small".to_string(), price: 80.0 },
                PriceVariation { label: "Large".to_string(), price: 140.0 },
            ],
        };
        let line = line("2", pricing, 3, Some("Large"));
        assert_eq!(line_total(&line), to_decimal(420.0));
    }

    #[test]
    fn test_cart_total_is_sum_of_line_totals() {
        let lines = vec![
            line("1", Pricing::Single { price: 120.0 }, 2, None),
            line("2", Pricing::Single { price: 45.5 }, 1, None),
        ];
        let expected: Decimal = lines.iter().map(line_total).sum();
        assert_eq!(cart_total(&lines), expected);
        assert_eq!(cart_total(&lines), to_decimal(285.5));
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        assert_eq!(cart_total(&[]), Decimal::ZERO);
        let view = cart_view(&[]);
        assert_eq!(view.subtotal, 0.0);
        assert_eq!(view.display_total, 0.0);
        assert_eq!(view.total_quantity, 0);
        assert!(view.lines.is_empty());
    }

    #[test]
    fn test_many_small_lines_sum_exactly() {
        // 100 lines at 0.01 each - f64 accumulation would drift
        let lines: Vec<CartLine> = (0..100)
            .map(|i| line(&i.to_string(), Pricing::Single { price: 0.01 }, 1, None))
            .collect();
        assert_eq!(cart_total(&lines), to_decimal(1.0));
    }

    #[test]
    fn test_view_rounds_display_total_half_up() {
        let lines = vec![line("1", Pricing::Single { price: 39.5 }, 1, None)];
        let view = cart_view(&lines);
        assert_eq!(view.subtotal, 39.5);
        assert_eq!(view.display_total, 40.0);
    }

    #[test]
    fn test_view_carries_line_data() {
        let lines = vec![line("1", Pricing::Single { price: 120.0 }, 2, None)];
        let view = cart_view(&lines);
        assert_eq!(view.lines[0].unit_price, 120.0);
        assert_eq!(view.lines[0].line_total, 240.0);
        assert_eq!(view.total_quantity, 2);
    }
}
