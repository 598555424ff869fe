//! Localized validation messages and the lookup seam.
//!
//! Every message shown to a shopper lives here, one table per culture, so
//! no display string is ever hardcoded inside validation logic. Lookups go
//! through the [`Localizer`] trait: the default [`StaticLocalizer`] reads
//! these tables, and callers with their own resource pipeline can swap in
//! anything else that resolves a key plus a culture to text.

use crate::i18n::Culture;

/// Identifier for one localized validation message.
///
/// `InvalidPrice` doubles for negative prices and `InvalidStock` for
/// negative or fractional stock values; the wording covers both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    MissingName,
    MissingPrice,
    MissingStock,
    InvalidPrice,
    InvalidStock,
}

/// All localized validation strings for one culture.
#[derive(Debug, Clone)]
pub struct CultureMessages {
    /// Shown when the product name is empty or whitespace
    pub missing_name: &'static str,

    /// Shown when the price field is empty or whitespace
    pub missing_price: &'static str,

    /// Shown when the stock field is empty or whitespace
    pub missing_stock: &'static str,

    /// Shown when the price does not parse or is negative
    pub invalid_price: &'static str,

    /// Shown when the stock is not a non-negative integer
    pub invalid_stock: &'static str,
}

impl CultureMessages {
    /// Resolve one message by key.
    pub fn get(&self, key: MessageKey) -> &'static str {
        match key {
            MessageKey::MissingName => self.missing_name,
            MessageKey::MissingPrice => self.missing_price,
            MessageKey::MissingStock => self.missing_stock,
            MessageKey::InvalidPrice => self.invalid_price,
            MessageKey::InvalidStock => self.invalid_stock,
        }
    }
}

// ==================== English Messages ====================

/// English validation messages (default culture)
pub const ENGLISH_MESSAGES: CultureMessages = CultureMessages {
    missing_name: "Please enter a name",
    missing_price: "Please enter a price",
    missing_stock: "Please enter a stock value",
    invalid_price: "The price must be a positive number",
    invalid_stock: "The stock must be a positive integer",
};

// ==================== French Messages ====================

/// French validation messages
pub const FRENCH_MESSAGES: CultureMessages = CultureMessages {
    missing_name: "Veuillez saisir un nom",
    missing_price: "Veuillez saisir un prix",
    missing_stock: "Veuillez saisir une quantité",
    invalid_price: "Le prix doit être un nombre positif",
    invalid_stock: "Le stock doit être un entier positif",
};

// ==================== Spanish Messages ====================

/// Spanish validation messages
pub const SPANISH_MESSAGES: CultureMessages = CultureMessages {
    missing_name: "Por favor, introduzca un nombre",
    missing_price: "Por favor, introduzca un precio",
    missing_stock: "Por favor, introduzca una cantidad",
    invalid_price: "El precio debe ser un número positivo",
    invalid_stock: "El stock debe ser un entero positivo",
};

/// Resolves a message key plus a culture into display text.
///
/// Implementations must return an entry for every key and every enabled
/// culture; there is no missing-translation error path in the validator.
pub trait Localizer: Send + Sync {
    fn lookup(&self, key: MessageKey, culture: Culture) -> String;
}

/// Localizer backed by the registry's built-in message tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLocalizer;

impl Localizer for StaticLocalizer {
    fn lookup(&self, key: MessageKey, culture: Culture) -> String {
        culture.messages().get(key).to_string()
    }
}
