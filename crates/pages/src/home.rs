//! Home page content.

use serde::Serialize;

use travelstore_catalog::{seed, Product};

use crate::{InertAction, Link};

pub const PRODUCTS_PATH: &str = "/products";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub primary: Link,
    pub secondary: InertAction,
}

/// Icon keys understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Truck,
    Shield,
    Clock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedSection {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub products: Vec<Product>,
    pub add_to_cart: InertAction,
    pub view_all: Link,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallToAction {
    pub title: &'static str,
    pub body: &'static str,
    pub link: Link,
}

/// Hero, feature highlights, featured products and closing call to action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub hero: Hero,
    pub features: Vec<Feature>,
    pub featured: FeaturedSection,
    pub call_to_action: CallToAction,
}

impl HomePage {
    pub fn build(catalog: &[Product]) -> Self {
        Self {
            hero: Hero {
                title: "Your Journey Starts Here",
                subtitle: "Discover premium travel essentials that make every adventure \
                           unforgettable. From backpacks to gadgets, we've got everything \
                           you need for the perfect trip.",
                primary: Link::new("Shop Now", PRODUCTS_PATH),
                secondary: InertAction { label: "Learn More" },
            },
            features: vec![
                Feature {
                    icon: Icon::Truck,
                    title: "Free Shipping",
                    description: "Free shipping on orders over $50",
                },
                Feature {
                    icon: Icon::Shield,
                    title: "Secure Payment",
                    description: "100% secure payment processing",
                },
                Feature {
                    icon: Icon::Clock,
                    title: "24/7 Support",
                    description: "Round the clock customer support",
                },
            ],
            featured: FeaturedSection {
                title: "Featured Products",
                subtitle: "Discover our most popular travel essentials, \
                           carefully selected to enhance your journey.",
                products: seed::featured(catalog),
                add_to_cart: InertAction { label: "Add to Cart" },
                view_all: Link::new("View All Products", PRODUCTS_PATH),
            },
            call_to_action: CallToAction {
                title: "Ready to Start Your Adventure?",
                body: "Join thousands of travelers who trust us for their journey essentials.",
                link: Link::new("Explore Our Collection", PRODUCTS_PATH),
            },
        }
    }
}
