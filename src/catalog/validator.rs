//! Product validation: turns raw drafts into validated products, reporting
//! every problem in the shopper's language.
//!
//! Validation is pure: the same draft and culture always produce the same
//! outcome, and nothing is logged or counted here. Observability belongs to
//! the service layer.

use std::sync::Arc;

use crate::catalog::product::{NewProduct, ProductDraft};
use crate::i18n::{Culture, Localizer, MessageKey, StaticLocalizer};

/// Validates product drafts against the catalog's field rules.
///
/// The validator owns a [`Localizer`] so the wording of rejection messages
/// can be swapped out (for tests, or for a message source other than the
/// built-in tables) without touching the rules themselves.
#[derive(Clone)]
pub struct ProductValidator {
    localizer: Arc<dyn Localizer>,
}

impl ProductValidator {
    /// Create a validator with a custom message source.
    pub fn new(localizer: Arc<dyn Localizer>) -> Self {
        ProductValidator { localizer }
    }

    /// Create a validator backed by the built-in message tables.
    pub fn with_default_messages() -> Self {
        ProductValidator::new(Arc::new(StaticLocalizer))
    }

    /// Check a draft and return every rule violation, localized.
    ///
    /// Messages come back in field order (name, then price, then stock),
    /// at most one per field, so the result holds between zero and three
    /// entries. An empty vector means the draft is valid.
    ///
    /// # Arguments
    /// * `draft` - The raw product input to check
    /// * `culture` - Culture used both to parse numbers and to word messages
    ///
    /// # Returns
    /// The localized rejection messages, empty if the draft is valid.
    pub fn check_product(&self, draft: &ProductDraft, culture: Culture) -> Vec<String> {
        self.parse_product(draft, culture).err().unwrap_or_default()
    }

    /// Validate a draft and, if it passes, hand back the parsed product.
    ///
    /// This is the checking and the parsing in one pass: price is read
    /// under the culture's decimal notation, stock as a plain integer, and
    /// the optional text fields are trimmed (blank collapses to absent).
    ///
    /// # Arguments
    /// * `draft` - The raw product input to validate
    /// * `culture` - Culture used both to parse numbers and to word messages
    ///
    /// # Returns
    /// * `Ok(NewProduct)` when every field passes
    /// * `Err(messages)` with the same messages [`check_product`](Self::check_product) reports
    pub fn parse_product(
        &self,
        draft: &ProductDraft,
        culture: Culture,
    ) -> Result<NewProduct, Vec<String>> {
        let format = culture.number_format();
        let mut errors = Vec::new();

        let name = draft.name.trim();
        if name.is_empty() {
            errors.push(self.localizer.lookup(MessageKey::MissingName, culture));
        }

        let price_input = draft.price.trim();
        let price = if price_input.is_empty() {
            errors.push(self.localizer.lookup(MessageKey::MissingPrice, culture));
            None
        } else {
            match format.parse_decimal(price_input) {
                Some(value) if value >= 0.0 => Some(value),
                _ => {
                    errors.push(self.localizer.lookup(MessageKey::InvalidPrice, culture));
                    None
                }
            }
        };

        let stock_input = draft.stock.trim();
        let stock = if stock_input.is_empty() {
            errors.push(self.localizer.lookup(MessageKey::MissingStock, culture));
            None
        } else {
            match format.parse_integer(stock_input) {
                Some(value) if value >= 0 => Some(value),
                _ => {
                    errors.push(self.localizer.lookup(MessageKey::InvalidStock, culture));
                    None
                }
            }
        };

        match (price, stock) {
            (Some(price), Some(stock)) if errors.is_empty() => Ok(NewProduct {
                name: name.to_string(),
                price,
                stock,
                description: optional_text(&draft.description),
                details: optional_text(&draft.details),
            }),
            _ => Err(errors),
        }
    }
}

impl Default for ProductValidator {
    fn default() -> Self {
        ProductValidator::with_default_messages()
    }
}

/// Trim an optional text field, collapsing blank input to `None`.
fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
