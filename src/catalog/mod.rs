//! Product catalog domain: entities, validation, storage, and the service
//! facade that ties them together.
//!
//! # Architecture
//!
//! - `product`: Raw drafts, validated products, and stored products
//! - `validator`: Field rules with localized rejection messages
//! - `repository`: Storage trait and the in-memory backend
//! - `service`: The facade client code calls
//! - `metrics`: Activity counters

mod metrics;
mod product;
mod repository;
mod service;
mod validator;

pub use metrics::{CatalogMetrics, MetricsReport};
pub use product::{NewProduct, Product, ProductDraft};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::{CatalogError, CatalogService};
pub use validator::ProductValidator;
