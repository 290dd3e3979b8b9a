use super::*;
use market::Catalog;

// =============================================================
// defaults
// =============================================================

#[test]
fn default_state_lists_every_chef_by_rating() {
    let catalog = Catalog::sample();
    let state = BrowseState::default();
    assert_eq!(state.sort, SortKey::Rating);
    assert!(!state.has_active_filters());
    assert_eq!(state.results(&catalog.chefs).len(), 6);
}

#[test]
fn with_query_prefills_search() {
    let state = BrowseState::with_query(Some("kim".into()));
    assert_eq!(state.filter.query, "kim");
    assert!(state.has_active_filters());
    assert_eq!(BrowseState::with_query(None), BrowseState::default());
}

// =============================================================
// selections
// =============================================================

#[test]
fn all_option_clears_cuisine_and_location() {
    let mut state = BrowseState::default();
    state.set_cuisine("Italian");
    state.set_location("New York");
    assert_eq!(state.filter.cuisine.as_deref(), Some("Italian"));
    state.set_cuisine("all");
    state.set_location("all");
    assert_eq!(state.filter.cuisine, None);
    assert_eq!(state.filter.location, None);
}

#[test]
fn price_handles_ignore_garbage_and_stay_ordered() {
    let mut state = BrowseState::default();
    state.set_min_price("abc");
    assert_eq!(state.price().min(), 25);
    state.set_max_price("80");
    state.set_min_price("120");
    assert_eq!((state.price().min(), state.price().max()), (80, 80));
}

#[test]
fn unknown_sort_is_ignored() {
    let mut state = BrowseState::default();
    state.set_sort("price-high");
    assert_eq!(state.sort, SortKey::PriceHigh);
    state.set_sort("bogus");
    assert_eq!(state.sort, SortKey::PriceHigh);
}

#[test]
fn clear_filters_keeps_sort() {
    let mut state = BrowseState::default();
    state.set_query("maria".into());
    state.set_sort("reviews");
    state.clear_filters();
    assert!(!state.has_active_filters());
    assert_eq!(state.sort, SortKey::Reviews);
}

#[test]
fn results_follow_filter_and_sort() {
    let catalog = Catalog::sample();
    let mut state = BrowseState::default();
    state.set_max_price("80");
    state.set_sort("price-low");
    let rates: Vec<u32> = state.results(&catalog.chefs).iter().map(|c| c.hourly_rate).collect();
    assert_eq!(rates, [65, 70, 75]);
}

#[test]
fn toggle_filters_flips() {
    let mut state = BrowseState::default();
    state.toggle_filters();
    assert!(state.filters_open);
    state.toggle_filters();
    assert!(!state.filters_open);
}
