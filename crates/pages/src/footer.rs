//! Site footer content.

use chrono::{Datelike, Utc};
use serde::Serialize;

use travelstore_catalog::Category;

use crate::home::PRODUCTS_PATH;
use crate::{InertAction, Link, STORE_NAME};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSection {
    pub title: &'static str,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Newsletter {
    pub title: &'static str,
    pub body: &'static str,
    pub placeholder: &'static str,
    pub subscribe: InertAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub brand: &'static str,
    pub blurb: &'static str,
    pub contact: ContactInfo,
    pub sections: Vec<LinkSection>,
    pub newsletter: Newsletter,
    pub social: Vec<Link>,
    pub legal: Vec<Link>,
    pub year: i32,
    pub copyright: String,
}

impl Footer {
    /// Footer stamped with the current calendar year (UTC).
    pub fn current() -> Self {
        Self::for_year(Utc::now().year())
    }

    pub fn for_year(year: i32) -> Self {
        Self {
            brand: STORE_NAME,
            blurb: "Your trusted partner for premium travel essentials. \
                    We're dedicated to making every journey comfortable, convenient, \
                    and memorable with our carefully curated collection of travel products.",
            contact: ContactInfo {
                email: "info@travelstore.com",
                phone: "+1 (555) 123-4567",
                address: "123 Travel Street, Adventure City, AC 12345",
            },
            sections: vec![
                LinkSection {
                    title: "Company",
                    links: vec![
                        Link::new("About Us", "/about"),
                        Link::placeholder("Careers"),
                        Link::placeholder("Press"),
                        Link::placeholder("Blog"),
                    ],
                },
                LinkSection {
                    title: "Support",
                    links: vec![
                        Link::new("Contact Us", "/contact"),
                        Link::placeholder("Help Center"),
                        Link::placeholder("Returns"),
                        Link::placeholder("Shipping Info"),
                    ],
                },
                LinkSection {
                    title: "Categories",
                    links: Category::ALL
                        .iter()
                        .map(|c| Link::new(c.label(), PRODUCTS_PATH))
                        .collect(),
                },
            ],
            newsletter: Newsletter {
                title: "Stay Updated",
                body: "Subscribe to our newsletter for travel tips, new products, \
                       and exclusive offers.",
                placeholder: "Enter your email",
                subscribe: InertAction { label: "Subscribe" },
            },
            social: ["Facebook", "Twitter", "Instagram", "YouTube"]
                .into_iter()
                .map(Link::placeholder)
                .collect(),
            legal: ["Privacy Policy", "Terms of Service", "Cookie Policy", "GDPR"]
                .into_iter()
                .map(Link::placeholder)
                .collect(),
            year,
            copyright: format!("© {year} {STORE_NAME}. All rights reserved."),
        }
    }
}
