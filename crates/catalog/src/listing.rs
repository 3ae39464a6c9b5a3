//! Product listing view: owns the filter state and its derived results.

use serde::Serialize;

use crate::filter::{apply, CategoryFilter, FilterState, SortKey};
use crate::product::Product;

/// Placeholder copy shown instead of the product grid when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

impl EmptyState {
    pub const NO_RESULTS: EmptyState = EmptyState {
        title: "No products found",
        hint: "Try adjusting your search or filter criteria.",
    };
}

/// Listing view mounted over a fixed catalog.
///
/// Every input event mutates the owned [`FilterState`] and recomputes the
/// results synchronously, so `results()` always equals
/// `apply(catalog, state())`.
#[derive(Debug, Clone)]
pub struct ProductListing {
    catalog: Vec<Product>,
    state: FilterState,
    results: Vec<Product>,
}

impl ProductListing {
    /// Mount the view with the default filter state.
    pub fn mount(catalog: Vec<Product>) -> Self {
        Self::with_state(catalog, FilterState::default())
    }

    pub fn with_state(catalog: Vec<Product>, state: FilterState) -> Self {
        let results = apply(&catalog, &state);
        Self {
            catalog,
            state,
            results,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.recompute();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.state.category = category;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.state.sort = sort;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.results = apply(&self.catalog, &self.state);
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn results(&self) -> &[Product] {
        &self.results
    }

    pub fn count(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// "1 product found" / "N products found".
    pub fn count_label(&self) -> String {
        let n = self.count();
        let suffix = if n == 1 { "" } else { "s" };
        format!("{n} product{suffix} found")
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.is_empty().then_some(EmptyState::NO_RESULTS)
    }

    pub fn snapshot(&self) -> ListingSnapshot {
        ListingSnapshot {
            state: self.state.clone(),
            count: self.count(),
            count_label: self.count_label(),
            results: self.results.clone(),
            empty_state: self.empty_state(),
        }
    }
}

/// Serializable picture of the listing handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingSnapshot {
    pub state: FilterState,
    pub count: usize,
    pub count_label: String,
    pub results: Vec<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}
