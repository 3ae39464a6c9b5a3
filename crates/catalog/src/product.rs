use serde::{Deserialize, Serialize};

use travelstore_core::{DomainError, DomainResult, Entity, Money, ValueObject};

/// Catalog product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(Self)
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))
    }
}

/// Fixed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Luggage,
    Electronics,
    Comfort,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Luggage,
        Category::Electronics,
        Category::Comfort,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Luggage => "luggage",
            Category::Electronics => "electronics",
            Category::Comfort => "comfort",
            Category::Accessories => "accessories",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Luggage => "Luggage",
            Category::Electronics => "Electronics",
            Category::Comfort => "Comfort",
            Category::Accessories => "Accessories",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s}")))
    }
}

/// Average customer rating on a 0-5 scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    pub const MAX: f64 = 5.0;

    pub fn new(value: f64) -> DomainResult<Self> {
        if !(0.0..=Self::MAX).contains(&value) {
            return Err(DomainError::validation(format!(
                "rating must be between 0 and {}, got {value}",
                Self::MAX
            )));
        }
        Ok(Self::unsigned_zero(value))
    }

    /// Fold -0.0 into 0.0 so equal ratings compare equal under `total_cmp`.
    fn unsigned_zero(value: f64) -> Self {
        Self(if value == 0.0 { 0.0 } else { value })
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Number of filled stars out of five (the rating rounded down).
    pub fn full_stars(self) -> u8 {
        self.0.floor() as u8
    }

    /// Total order over ratings; construction rules out NaN.
    pub fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl ValueObject for Rating {}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Input for building a catalog record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub category: Category,
    pub image: String,
    pub rating: f64,
    pub reviews: u32,
    pub description: String,
}

/// Immutable catalog record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    category: Category,
    image: String,
    rating: Rating,
    reviews: u32,
    description: String,
}

impl Product {
    pub fn new(input: NewProduct) -> DomainResult<Self> {
        if input.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let rating = Rating::new(input.rating)?;

        Ok(Self {
            id: input.id,
            name: input.name,
            price: input.price,
            category: input.category,
            image: input.image,
            rating,
            reviews: input.reviews,
            description: input.description,
        })
    }

    /// Build a record from compile-time catalog data without validation.
    ///
    /// Only `seed` uses this; its tests check every row against [`Product::new`].
    pub(crate) fn from_trusted(input: NewProduct) -> Self {
        Self {
            id: input.id,
            name: input.name,
            price: input.price,
            category: input.category,
            image: input.image,
            rating: Rating::unsigned_zero(input.rating),
            reviews: input.reviews,
            description: input.description,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn reviews(&self) -> u32 {
        self.reviews
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product() -> NewProduct {
        NewProduct {
            id: ProductId::new(1),
            name: "Travel Backpack".to_string(),
            price: Money::from_cents(8999),
            category: Category::Luggage,
            image: "https://example.com/backpack.jpg".to_string(),
            rating: 4.8,
            reviews: 124,
            description: "Premium travel backpack.".to_string(),
        }
    }

    #[test]
    fn new_product_keeps_fields() {
        let product = Product::new(new_product()).unwrap();
        assert_eq!(*product.id(), ProductId::new(1));
        assert_eq!(product.name(), "Travel Backpack");
        assert_eq!(product.price(), Money::from_cents(8999));
        assert_eq!(product.category(), Category::Luggage);
        assert_eq!(product.rating().value(), 4.8);
        assert_eq!(product.reviews(), 124);
    }

    #[test]
    fn new_product_rejects_blank_name() {
        let mut input = new_product();
        input.name = "  ".to_string();
        match Product::new(input).unwrap_err() {
            DomainError::Validation(_) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn rating_outside_scale_is_rejected() {
        assert!(Rating::new(5.1).is_err());
        assert!(Rating::new(-0.1).is_err());
        assert!(Rating::new(f64::NAN).is_err());
        assert!(Rating::new(0.0).is_ok());
        assert!(Rating::new(5.0).is_ok());
    }

    #[test]
    fn negative_zero_rating_is_stored_as_zero() {
        let rating = Rating::new(-0.0).unwrap();
        assert!(rating.value().is_sign_positive());
        assert_eq!(
            rating.total_cmp(&Rating::new(0.0).unwrap()),
            core::cmp::Ordering::Equal
        );
    }

    #[test]
    fn full_stars_rounds_down() {
        assert_eq!(Rating::new(4.8).unwrap().full_stars(), 4);
        assert_eq!(Rating::new(5.0).unwrap().full_stars(), 5);
        assert_eq!(Rating::new(0.9).unwrap().full_stars(), 0);
    }

    #[test]
    fn category_parses_lowercase_names_only() {
        assert_eq!("comfort".parse::<Category>().unwrap(), Category::Comfort);
        assert!("Comfort".parse::<Category>().is_err());
        assert!("all".parse::<Category>().is_err());
    }

    #[test]
    fn product_id_parse_failure_is_invalid_id() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::new(42));
        match "abc".parse::<ProductId>().unwrap_err() {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("ProductId")),
            other => panic!("Expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn serializes_with_lowercase_category() {
        let product = Product::new(new_product()).unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["category"], "luggage");
        assert_eq!(json["price"], 8999);
        assert_eq!(json["id"], 1);
    }
}
