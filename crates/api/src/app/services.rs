use std::sync::Arc;

use travelstore_catalog::{FilterState, Product, ProductId, ProductListing};
use travelstore_core::{DomainError, DomainResult};
use travelstore_pages::{Footer, HomePage};

/// Read-only storefront data shared by all handlers.
///
/// The catalog never changes after startup; each request mounts its own
/// [`ProductListing`], so nothing here needs locking.
#[derive(Debug, Clone)]
pub struct AppServices {
    catalog: Arc<[Product]>,
}

impl AppServices {
    pub fn new(catalog: Vec<Product>) -> Self {
        Self {
            catalog: catalog.into(),
        }
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn listing(&self, state: FilterState) -> ProductListing {
        ProductListing::with_state(self.catalog.to_vec(), state)
    }

    pub fn product(&self, id: ProductId) -> DomainResult<&Product> {
        self.catalog
            .iter()
            .find(|p| p.id_typed() == id)
            .ok_or_else(DomainError::not_found)
    }

    pub fn home(&self) -> HomePage {
        HomePage::build(&self.catalog)
    }

    pub fn footer(&self) -> Footer {
        Footer::current()
    }
}
