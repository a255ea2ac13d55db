//! Menu filter state
//!
//! A plain value object: no temporal states, transitions are direct
//! field replacements. The single invariant is that `dietary` is always
//! exactly one of the three modes (the enum makes "none selected"
//! unrepresentable).

use serde::{Deserialize, Serialize};

/// Sentinel category id meaning "no category filter"
///
/// Presentation-only: never part of the category data fetched from the
/// API.
pub const ALL_CATEGORIES: &str = "all";

/// Dietary filter mode (single choice, not independent toggles)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DietaryMode {
    #[default]
    All,
    VegetarianOnly,
    NonVegetarianOnly,
}

/// Current menu filter selections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    pub dietary: DietaryMode,
    /// [`ALL_CATEGORIES`] or a real category id
    pub category_id: String,
    /// Free text, matched case-insensitively against name, description
    /// and resolved category name
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            dietary: DietaryMode::All,
            category_id: ALL_CATEGORIES.to_string(),
            search: String::new(),
        }
    }
}

impl FilterState {
    /// Whether a category filter is in effect
    pub fn has_category_filter(&self) -> bool {
        self.category_id != ALL_CATEGORIES
    }

    /// Search query with surrounding whitespace trimmed; `None` when
    /// effectively empty
    pub fn search_query(&self) -> Option<&str> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_everything() {
        let filter = FilterState::default();
        assert_eq!(filter.dietary, DietaryMode::All);
        assert!(!filter.has_category_filter());
        assert!(filter.search_query().is_none());
    }

    #[test]
    fn test_dietary_selection_is_single_choice() {
        // Replacing the field is the only transition; exactly one mode
        // is active after any sequence of selections
        let mut filter = FilterState::default();
        filter.dietary = DietaryMode::VegetarianOnly;
        filter.dietary = DietaryMode::NonVegetarianOnly;
        assert_eq!(filter.dietary, DietaryMode::NonVegetarianOnly);
    }

    #[test]
    fn test_search_query_trims_whitespace() {
        let mut filter = FilterState::default();
        filter.search = "   ".to_string();
        assert!(filter.search_query().is_none());

        filter.search = "  burger ".to_string();
        assert_eq!(filter.search_query(), Some("burger"));
    }
}
