//! Product storage.
//!
//! The service talks to storage through the [`ProductRepository`] trait so
//! a real database can replace the in-memory store without touching the
//! rest of the catalog.

use std::sync::Mutex;

use anyhow::Result;
use chrono::Utc;

use crate::catalog::product::{NewProduct, Product};

/// Storage backend for catalog products.
pub trait ProductRepository: Send + Sync {
    /// All stored products, in insertion order.
    fn all(&self) -> Result<Vec<Product>>;

    /// Look up a product by id.
    fn get(&self, id: i64) -> Result<Option<Product>>;

    /// Store a validated product, assigning it an id and timestamp.
    fn insert(&self, product: NewProduct) -> Result<Product>;

    /// Remove a product by id. Returns whether anything was removed.
    fn delete(&self, id: i64) -> Result<bool>;
}

/// In-memory product store.
///
/// Ids are assigned sequentially starting at 1 and are never reused within
/// the lifetime of the store, even after deletions.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: Mutex<RepositoryInner>,
}

#[derive(Debug, Default)]
struct RepositoryInner {
    products: Vec<Product>,
    next_id: i64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn all(&self) -> Result<Vec<Product>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.products.clone())
    }

    fn get(&self, id: i64) -> Result<Option<Product>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned())
    }

    fn insert(&self, product: NewProduct) -> Result<Product> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;

        let product = Product {
            id: inner.next_id,
            name: product.name,
            price: product.price,
            stock: product.stock,
            description: product.description,
            details: product.details,
            created_at: Utc::now(),
        };
        inner.products.push(product.clone());
        Ok(product)
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.products.len();
        inner.products.retain(|product| product.id != id);
        Ok(inner.products.len() < before)
    }
}
