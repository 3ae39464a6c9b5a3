//! The catalog shipped with the storefront.

use travelstore_core::Money;

use crate::product::{Category, NewProduct, Product, ProductId};

struct Row {
    id: u32,
    name: &'static str,
    cents: u64,
    category: Category,
    image: &'static str,
    rating: f64,
    reviews: u32,
    description: &'static str,
}

const ROWS: [Row; 6] = [
    Row {
        id: 1,
        name: "Travel Backpack",
        cents: 8999,
        category: Category::Luggage,
        image: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400&h=300&fit=crop",
        rating: 4.8,
        reviews: 124,
        description: "Premium travel backpack with multiple compartments and laptop sleeve.",
    },
    Row {
        id: 2,
        name: "Portable Charger",
        cents: 2999,
        category: Category::Electronics,
        image: "https://images.unsplash.com/photo-1609599006353-e629aaabfeae?w=400&h=300&fit=crop",
        rating: 4.6,
        reviews: 89,
        description: "High-capacity portable charger for all your devices.",
    },
    Row {
        id: 3,
        name: "Travel Pillow",
        cents: 1999,
        category: Category::Comfort,
        image: "https://images.unsplash.com/photo-1584464491033-06628f3a6b7b?w=400&h=300&fit=crop",
        rating: 4.7,
        reviews: 156,
        description: "Memory foam travel pillow for comfortable rest during travel.",
    },
    Row {
        id: 4,
        name: "Passport Holder",
        cents: 1299,
        category: Category::Accessories,
        image: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?w=400&h=300&fit=crop",
        rating: 4.5,
        reviews: 67,
        description: "RFID-blocking passport holder with card slots.",
    },
    Row {
        id: 5,
        name: "Travel Adapter",
        cents: 2499,
        category: Category::Electronics,
        image: "https://images.unsplash.com/photo-1609599006353-e629aaabfeae?w=400&h=300&fit=crop",
        rating: 4.4,
        reviews: 92,
        description: "Universal travel adapter for worldwide compatibility.",
    },
    Row {
        id: 6,
        name: "Compression Socks",
        cents: 1599,
        category: Category::Comfort,
        image: "https://images.unsplash.com/photo-1584464491033-06628f3a6b7b?w=400&h=300&fit=crop",
        rating: 4.3,
        reviews: 78,
        description: "Graduated compression socks for long flights.",
    },
];

/// Products highlighted on the home page, in display order.
pub const FEATURED: [ProductId; 3] = [ProductId::new(1), ProductId::new(2), ProductId::new(3)];

fn to_input(row: &Row) -> NewProduct {
    NewProduct {
        id: ProductId::new(row.id),
        name: row.name.to_string(),
        price: Money::from_cents(row.cents),
        category: row.category,
        image: row.image.to_string(),
        rating: row.rating,
        reviews: row.reviews,
        description: row.description.to_string(),
    }
}

/// Full catalog in its authored order.
pub fn catalog() -> Vec<Product> {
    ROWS.iter().map(|row| Product::from_trusted(to_input(row))).collect()
}

/// The featured subset of `catalog`, in [`FEATURED`] order.
///
/// Ids missing from `catalog` are skipped.
pub fn featured(catalog: &[Product]) -> Vec<Product> {
    FEATURED
        .iter()
        .filter_map(|id| catalog.iter().find(|p| p.id_typed() == *id).cloned())
        .collect()
}
