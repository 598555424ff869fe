//! Product entities: raw form input, validated input, and stored products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw product input, exactly as submitted from a form or seed file.
///
/// Every field is a string because nothing has been parsed or validated
/// yet; price and stock stay in whatever notation the shopper's culture
/// uses until [`ProductValidator`](crate::catalog::ProductValidator) turns
/// the draft into a [`NewProduct`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductDraft {
    /// Product name, required
    #[serde(default)]
    pub name: String,

    /// Price in the submitting culture's decimal notation
    #[serde(default)]
    pub price: String,

    /// Stock count, a plain integer in every culture
    #[serde(default)]
    pub stock: String,

    /// Optional short description
    #[serde(default)]
    pub description: String,

    /// Optional free-form details
    #[serde(default)]
    pub details: String,
}

impl ProductDraft {
    /// Build a draft from the three required fields.
    pub fn new(name: &str, price: &str, stock: &str) -> Self {
        ProductDraft {
            name: name.to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
            ..ProductDraft::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_details(mut self, details: &str) -> Self {
        self.details = details.to_string();
        self
    }
}

/// A validated product that has not been stored yet.
///
/// Produced only by the validator, so the numeric fields are guaranteed
/// non-negative and the name non-blank.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub description: Option<String>,
    pub details: Option<String>,
}

/// A product stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Repository-assigned identifier, unique within the catalog
    pub id: i64,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Units in stock
    pub stock: i64,

    /// Optional short description
    pub description: Option<String>,

    /// Optional free-form details
    pub details: Option<String>,

    /// When the product was added to the catalog
    pub created_at: DateTime<Utc>,
}
