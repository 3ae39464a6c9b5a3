//! Catalog filter pipeline: text/category predicate followed by a stable sort.

use core::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};

use travelstore_core::DomainError;

use crate::product::{Category, Product};

/// A `(value, label)` pair rendered as a selector option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Category selector: every product, or one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Luggage,
    Electronics,
    Comfort,
    Accessories,
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self.category() {
            None => "all",
            Some(c) => c.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self.category() {
            None => "All Categories",
            Some(c) => c.label(),
        }
    }

    /// The single category this filter admits, if any.
    pub fn category(&self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Luggage => Some(Category::Luggage),
            CategoryFilter::Electronics => Some(Category::Electronics),
            CategoryFilter::Comfort => Some(Category::Comfort),
            CategoryFilter::Accessories => Some(Category::Accessories),
        }
    }

    pub fn admits(&self, category: Category) -> bool {
        self.category().is_none_or(|c| c == category)
    }

    pub fn options() -> Vec<SelectOption> {
        core::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::from))
            .map(|f| SelectOption {
                value: f.as_str(),
                label: f.label(),
            })
            .collect()
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        match value {
            Category::Luggage => CategoryFilter::Luggage,
            Category::Electronics => CategoryFilter::Electronics,
            Category::Comfort => CategoryFilter::Comfort,
            Category::Accessories => CategoryFilter::Accessories,
        }
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::from).map_err(|_| {
            DomainError::validation(
                "category must be one of: all, luggage, electronics, comfort, accessories",
            )
        })
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "price-ascending", alias = "price-low")]
    PriceAscending,
    #[serde(rename = "price-descending", alias = "price-high")]
    PriceDescending,
    #[serde(rename = "rating-descending", alias = "rating")]
    RatingDescending,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
        SortKey::RatingDescending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceAscending => "price-ascending",
            SortKey::PriceDescending => "price-descending",
            SortKey::RatingDescending => "rating-descending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::PriceAscending => "Price: Low to High",
            SortKey::PriceDescending => "Price: High to Low",
            SortKey::RatingDescending => "Rating",
        }
    }

    pub fn options() -> Vec<SelectOption> {
        SortKey::ALL
            .into_iter()
            .map(|k| SelectOption {
                value: k.as_str(),
                label: k.label(),
            })
            .collect()
    }

    fn compare(&self, a: &Product, b: &Product, names: &NameOrder) -> Ordering {
        match self {
            SortKey::Name => names.compare(a.name(), b.name()),
            SortKey::PriceAscending => a.price().cmp(&b.price()),
            SortKey::PriceDescending => b.price().cmp(&a.price()),
            SortKey::RatingDescending => b.rating().total_cmp(&a.rating()),
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "price-ascending" | "price-low" => Ok(SortKey::PriceAscending),
            "price-descending" | "price-high" => Ok(SortKey::PriceDescending),
            "rating-descending" | "rating" => Ok(SortKey::RatingDescending),
            _ => Err(DomainError::validation(
                "sort must be one of: name, price-ascending, price-descending, rating-descending",
            )),
        }
    }
}

/// Locale-aware name ordering: root collation at tertiary strength, so
/// accented letters sort next to their base letter and lowercase precedes
/// uppercase when names differ only in case.
struct NameOrder {
    collator: Option<Collator>,
}

impl NameOrder {
    /// Only the name sort needs a collator.
    fn for_sort(sort: SortKey) -> Self {
        if sort != SortKey::Name {
            return Self { collator: None };
        }

        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!(
                    error = ?e,
                    "root collation unavailable, ordering by lowercase name"
                );
                None
            }
        };
        Self { collator }
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }
}

/// User-chosen listing parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl FilterState {
    pub fn new(query: impl Into<String>, category: CategoryFilter, sort: SortKey) -> Self {
        Self {
            query: query.into(),
            category,
            sort,
        }
    }

    /// Filter predicate: text match on name or description AND category match.
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.query.to_lowercase();
        matches_query(product, &needle) && self.category.admits(product.category())
    }
}

/// `needle` must already be lowercased. An empty needle matches everything.
fn matches_query(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name().to_lowercase().contains(needle)
        || product.description().to_lowercase().contains(needle)
}

/// Derive the ordered view list for `state` from `products`.
///
/// The result is a reordered subset of the input: nothing is duplicated or
/// fabricated, and products comparing equal under the sort key keep their
/// input order.
pub fn apply(products: &[Product], state: &FilterState) -> Vec<Product> {
    let needle = state.query.to_lowercase();

    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| matches_query(p, &needle) && state.category.admits(p.category()))
        .cloned()
        .collect();

    // `sort_by` is stable.
    let names = NameOrder::for_sort(state.sort);
    view.sort_by(|a, b| state.sort.compare(a, b, &names));

    tracing::debug!(
        query = %state.query,
        category = %state.category,
        sort = %state.sort,
        total = products.len(),
        matched = view.len(),
        "catalog filter applied"
    );

    view
}
