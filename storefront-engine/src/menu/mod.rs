//! Menu filter/search engine
//!
//! Pure predicates over the catalog: category filter, dietary filter,
//! then trimmed case-insensitive substring search over name, description
//! and resolved category name. Output order is the catalog order
//! (stable). Availability is deliberately NOT filtered here - unavailable
//! items stay visible for the presentation layer to style; only purchase
//! actions reject them.

use shared::filter::{ALL_CATEGORIES, DietaryMode, FilterState};
use shared::models::{Category, MenuItem};
use std::collections::HashMap;

/// Items visible under the given filter, in catalog order
pub fn visible_items<'a>(
    catalog: &'a [MenuItem],
    categories: &[Category],
    filter: &FilterState,
) -> Vec<&'a MenuItem> {
    let category_names = category_name_index(categories);
    let query = filter.search_query().map(str::to_lowercase);

    catalog
        .iter()
        .filter(|item| !filter.has_category_filter() || item.category_id == filter.category_id)
        .filter(|item| passes_dietary(item, filter.dietary))
        .filter(|item| passes_search(item, query.as_deref(), &category_names))
        .collect()
}

/// Item count per category id (plus the "all" sentinel) under the
/// dietary and search filters
///
/// The filter's own category selection is ignored so the sidebar can
/// show live counts for every category regardless of which one is
/// selected. Categories with no matching items are present with a zero
/// count.
pub fn category_counts(
    catalog: &[MenuItem],
    categories: &[Category],
    filter: &FilterState,
) -> HashMap<String, usize> {
    let category_names = category_name_index(categories);
    let query = filter.search_query().map(str::to_lowercase);

    let mut counts: HashMap<String, usize> = HashMap::with_capacity(categories.len() + 1);
    counts.insert(ALL_CATEGORIES.to_string(), 0);
    for category in categories {
        counts.insert(category.id.clone(), 0);
    }

    for item in catalog {
        if !passes_dietary(item, filter.dietary)
            || !passes_search(item, query.as_deref(), &category_names)
        {
            continue;
        }
        *counts.entry(item.category_id.clone()).or_insert(0) += 1;
        if let Some(all) = counts.get_mut(ALL_CATEGORIES) {
            *all += 1;
        }
    }

    counts
}

fn category_name_index(categories: &[Category]) -> HashMap<&str, &str> {
    categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect()
}

fn passes_dietary(item: &MenuItem, mode: DietaryMode) -> bool {
    match mode {
        DietaryMode::All => true,
        DietaryMode::VegetarianOnly => item.is_vegetarian,
        DietaryMode::NonVegetarianOnly => !item.is_vegetarian,
    }
}

fn passes_search(
    item: &MenuItem,
    query: Option<&str>,
    category_names: &HashMap<&str, &str>,
) -> bool {
    let Some(query) = query else {
        return true;
    };
    if item.name.to_lowercase().contains(query)
        || item.description.to_lowercase().contains(query)
    {
        return true;
    }
    category_names
        .get(item.category_id.as_str())
        .is_some_and(|name| name.to_lowercase().contains(query))
}
