use crate::models::{Category, FilterState, ListingKind, RankedItem};

/// Check if an item's kind is admitted by the category selector
#[inline]
pub fn matches_category(item: &RankedItem, category: Category) -> bool {
    match category {
        Category::All => true,
        Category::Properties => item.kind() == ListingKind::Property,
        Category::Vehicles => item.kind() == ListingKind::Vehicle,
    }
}

/// Check if an item matches the search text
///
/// Empty text matches everything. Otherwise the match is a case-insensitive
/// substring test against the display name (title/name) or the secondary
/// descriptor (location/brand).
#[inline]
pub fn matches_search(item: &RankedItem, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }

    let needle = search_text.to_lowercase();
    item.display_name().to_lowercase().contains(&needle)
        || item.secondary_descriptor().to_lowercase().contains(&needle)
}

/// Apply the filter state in a single linear pass
///
/// Both predicates must hold. Relative order is preserved; filtering never
/// re-sorts, and an empty result is a valid outcome.
pub fn apply_filter(items: Vec<RankedItem>, state: &FilterState) -> Vec<RankedItem> {
    items
        .into_iter()
        .filter(|item| matches_category(item, state.category) && matches_search(item, &state.search_text))
        .collect()
}
