//! Static storefront pages (home page and footer) as serializable view models.
//!
//! Nothing here renders markup; a client turns these models into visual output.

pub mod footer;
pub mod home;

pub use footer::Footer;
pub use home::HomePage;

use serde::Serialize;

/// Brand name shown in the footer and copyright line.
pub const STORE_NAME: &str = "TravelStore";

/// Navigation target. `href` is either an in-app path or `#` for placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    /// Links without a destination yet.
    pub const fn placeholder(label: &'static str) -> Self {
        Self { label, href: "#" }
    }

    pub fn is_placeholder(&self) -> bool {
        self.href == "#"
    }
}

/// Button with no wired behaviour (e.g. "Add to Cart", "Subscribe").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InertAction {
    pub label: &'static str,
}
