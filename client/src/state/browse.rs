//! Browse-page filter and sort selections.

#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use market::Chef;
use market::listing::{self, ChefFilter, PriceRange, SortKey};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowseState {
    pub filter: ChefFilter,
    pub sort: SortKey,
    /// Filter sidebar toggle on narrow screens.
    pub filters_open: bool,
}

impl BrowseState {
    /// State for a `?q=` search handed over from the landing page.
    #[must_use]
    pub fn with_query(query: Option<String>) -> Self {
        let mut state = Self::default();
        if let Some(query) = query {
            state.filter.query = query;
        }
        state
    }

    pub fn set_query(&mut self, query: String) {
        self.filter.query = query;
    }

    pub fn set_cuisine(&mut self, raw: &str) {
        self.filter.cuisine = listing::parse_choice(raw);
    }

    pub fn set_location(&mut self, raw: &str) {
        self.filter.location = listing::parse_choice(raw);
    }

    /// Move the lower price handle. Non-numeric input is ignored.
    pub fn set_min_price(&mut self, raw: &str) {
        if let Ok(min) = raw.trim().parse::<u32>() {
            self.filter.price = self.filter.price.with_min(min);
        }
    }

    /// Move the upper price handle. Non-numeric input is ignored.
    pub fn set_max_price(&mut self, raw: &str) {
        if let Ok(max) = raw.trim().parse::<u32>() {
            self.filter.price = self.filter.price.with_max(max);
        }
    }

    /// Select a sort order by wire name. Unknown names are ignored.
    pub fn set_sort(&mut self, raw: &str) {
        if let Ok(sort) = raw.parse() {
            self.sort = sort;
        }
    }

    /// Restore the default filter. The sort order is kept.
    pub fn clear_filters(&mut self) {
        self.filter = ChefFilter::default();
    }

    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.filter != ChefFilter::default()
    }

    pub fn toggle_filters(&mut self) {
        self.filters_open = !self.filters_open;
    }

    #[must_use]
    pub fn price(&self) -> PriceRange {
        self.filter.price
    }

    #[must_use]
    pub fn results<'a>(&self, chefs: &'a [Chef]) -> Vec<&'a Chef> {
        listing::search(chefs, &self.filter, self.sort)
    }
}
