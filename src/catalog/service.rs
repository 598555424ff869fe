//! Catalog service: the one facade client code talks to.
//!
//! Ties validation and storage together, records metrics, and maps the
//! outcomes into [`CatalogError`]. The culture is always an explicit
//! argument; the service keeps no notion of a current language.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::metrics::CatalogMetrics;
use crate::catalog::product::{Product, ProductDraft};
use crate::catalog::repository::{InMemoryProductRepository, ProductRepository};
use crate::catalog::validator::ProductValidator;
use crate::i18n::Culture;

/// Errors returned by [`CatalogService`] operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The draft failed validation. The messages are localized for the
    /// culture the draft was submitted under, in field order.
    #[error("Product rejected: {}", .0.join("; "))]
    Rejected(Vec<String>),

    /// No product with this id exists.
    #[error("Product {0} not found")]
    NotFound(i64),

    /// The storage backend failed.
    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

/// Facade over product validation and storage.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn ProductRepository>,
    validator: ProductValidator,
}

impl CatalogService {
    /// Create a service over the given storage backend and validator.
    pub fn new(repository: Arc<dyn ProductRepository>, validator: ProductValidator) -> Self {
        CatalogService {
            repository,
            validator,
        }
    }

    /// Create a service over a fresh in-memory store with the built-in
    /// validation messages.
    pub fn in_memory() -> Self {
        CatalogService::new(
            Arc::new(InMemoryProductRepository::new()),
            ProductValidator::with_default_messages(),
        )
    }

    /// Check a draft without saving it.
    ///
    /// Returns the localized rejection messages, empty when the draft is
    /// valid. This is the pre-flight check a form calls before submitting.
    pub fn check_product_errors(&self, draft: &ProductDraft, culture: Culture) -> Vec<String> {
        CatalogMetrics::global().record_check();
        self.validator.check_product(draft, culture)
    }

    /// All products in the catalog, in insertion order.
    pub fn products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.repository.all()?)
    }

    /// Look up a single product.
    pub fn product(&self, id: i64) -> Result<Product, CatalogError> {
        self.repository.get(id)?.ok_or(CatalogError::NotFound(id))
    }

    /// Validate a draft and store it.
    ///
    /// # Arguments
    /// * `draft` - The raw product input to validate and store
    /// * `culture` - Culture used to parse numbers and word any rejection
    ///
    /// # Returns
    /// * `Ok(Product)` with the stored product (id and timestamp assigned)
    /// * `Err(CatalogError::Rejected)` when validation fails
    pub fn save_product(
        &self,
        draft: &ProductDraft,
        culture: Culture,
    ) -> Result<Product, CatalogError> {
        let metrics = CatalogMetrics::global();
        metrics.record_check();

        let validated = match self.validator.parse_product(draft, culture) {
            Ok(validated) => validated,
            Err(messages) => {
                metrics.record_rejected();
                warn!(
                    "Product draft rejected ({} problem(s), culture '{}')",
                    messages.len(),
                    culture
                );
                return Err(CatalogError::Rejected(messages));
            }
        };

        let product = self.repository.insert(validated)?;
        metrics.record_saved();
        info!("Saved product {} ('{}')", product.id, product.name);
        Ok(product)
    }

    /// Remove a product from the catalog.
    pub fn delete_product(&self, id: i64) -> Result<(), CatalogError> {
        if self.repository.delete(id)? {
            CatalogMetrics::global().record_deleted();
            info!("Deleted product {}", id);
            Ok(())
        } else {
            Err(CatalogError::NotFound(id))
        }
    }

    /// Load a JSON seed file of product drafts, saving the valid ones.
    ///
    /// Invalid drafts are logged and skipped rather than aborting the
    /// load. Numbers in the file are parsed under the given culture.
    ///
    /// # Arguments
    /// * `path` - Path to a JSON array of product drafts
    /// * `culture` - Culture the seed file's numbers are written in
    ///
    /// # Returns
    /// How many drafts were saved and how many were rejected.
    pub fn seed_from_file(&self, path: &Path, culture: Culture) -> Result<(usize, usize)> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
        let drafts: Vec<ProductDraft> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse seed file: {}", path.display()))?;

        let mut saved = 0;
        let mut rejected = 0;
        for draft in &drafts {
            match self.save_product(draft, culture) {
                Ok(_) => saved += 1,
                Err(CatalogError::Rejected(messages)) => {
                    warn!(
                        "Seed draft '{}' rejected: {}",
                        draft.name,
                        messages.join("; ")
                    );
                    rejected += 1;
                }
                Err(other) => return Err(other.into()),
            }
        }

        info!(
            "Seeded {} product(s) from {} ({} rejected)",
            saved,
            path.display(),
            rejected
        );
        Ok((saved, rejected))
    }
}
