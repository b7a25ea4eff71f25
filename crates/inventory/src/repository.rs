use std::collections::HashMap;

use velokit_catalog::Product;
use velokit_core::ProductId;

/// Lookup capability for product graphs.
///
/// Returns an owned copy of the catalog graph: each customization attempt
/// mutates its own instance, and serializing concurrent attempts against
/// one instance stays the caller's responsibility.
pub trait ProductRepository {
    /// Returns the matching product or `None`.
    fn find_by_id(&self, id: ProductId) -> Option<Product>;
}

/// HashMap-backed repository for tests and embedded use.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: HashMap<ProductId, Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.id(), product);
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id).cloned()
    }
}
