//! Internationalization (i18n) module for multi-culture support.
//!
//! This module provides a centralized, extensible architecture for managing
//! multiple cultures. All culture-related logic, localized messages, and
//! culture-sensitive parsing lives here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported cultures and their metadata
//! - `culture`: Type-safe Culture type passed explicitly through every API
//! - `messages`: Centralized localized validation messages and the Localizer seam
//! - `numeric`: Culture-sensitive decimal and integer parsing
//! - `cookie`: Culture preference persistence
//!
//! # Example
//!
//! ```rust,ignore
//! use product_catalog::i18n::{Culture, CultureRegistry};
//!
//! // Resolve a culture from a shopper's language selection
//! let culture = Culture::from_language_name("Français");
//!
//! // Parse a price the way that culture writes numbers
//! let price = culture.number_format().parse_decimal("1 000,50");
//!
//! // List all enabled cultures
//! let cultures = CultureRegistry::get().list_enabled();
//! ```

mod cookie;
mod culture;
mod messages;
mod numeric;
mod registry;

pub use cookie::{
    change_ui_culture, cookie_value, parse_cookie_value, write_culture_cookie, CookieStore,
    MemoryCookieStore, CULTURE_COOKIE,
};
pub use culture::Culture;
pub use messages::{CultureMessages, Localizer, MessageKey, StaticLocalizer};
pub use numeric::NumberFormat;
pub use registry::{CultureConfig, CultureRegistry};
