//! Culture value type used throughout the catalog.
//!
//! A [`Culture`] is a cheap copyable handle to one entry of the
//! [`CultureRegistry`]. Every culture-sensitive operation takes one
//! explicitly; there is no ambient "current culture" state.

use std::fmt;

use anyhow::{bail, Result};

use crate::i18n::messages::CultureMessages;
use crate::i18n::numeric::NumberFormat;
use crate::i18n::registry::{CultureConfig, CultureRegistry};

/// A supported culture, identified by its two-letter code.
///
/// Construct one with [`Culture::from_code`] (fallible, for external input
/// such as configuration) or [`Culture::from_language_name`] (total, for
/// shopper language selection), or use the provided constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Culture {
    code: &'static str,
}

impl Culture {
    /// English culture (the default).
    pub const ENGLISH: Culture = Culture { code: "en" };

    /// French culture.
    pub const FRENCH: Culture = Culture { code: "fr" };

    /// Spanish culture.
    pub const SPANISH: Culture = Culture { code: "es" };

    /// Resolve a culture from its two-letter code.
    ///
    /// # Arguments
    /// * `code` - The culture code (e.g., "en", "fr", "es")
    ///
    /// # Returns
    /// * `Ok(Culture)` if the code is registered and enabled
    /// * `Err` if the code is unknown or the culture is disabled
    pub fn from_code(code: &str) -> Result<Culture> {
        let registry = CultureRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Culture { code: config.code }),
            Some(config) => bail!("Culture '{}' is not enabled", config.code),
            None => bail!("Unknown culture code: '{}'", code),
        }
    }

    /// Resolve a culture from a language name as displayed in the UI.
    ///
    /// Accepts the exact spellings of each supported language's name in
    /// every UI language ("French", "Français", "Francés" all resolve to
    /// French). Any other input, including an empty string, falls back to
    /// the default culture. This function is total and never fails.
    ///
    /// # Arguments
    /// * `language` - The selected language name
    ///
    /// # Returns
    /// The matching culture, or the default culture if no spelling matches.
    pub fn from_language_name(language: &str) -> Culture {
        let registry = CultureRegistry::get();

        registry
            .get_by_spelling(language)
            .map(|config| Culture { code: config.code })
            .unwrap_or_else(Culture::default_culture)
    }

    /// The default culture (currently English).
    pub fn default_culture() -> Culture {
        let config = CultureRegistry::get().default_culture();
        Culture { code: config.code }
    }

    /// All enabled cultures, in registry order.
    pub fn all_enabled() -> Vec<Culture> {
        CultureRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Culture { code: config.code })
            .collect()
    }

    /// The two-letter culture code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The full registry configuration for this culture.
    pub fn config(&self) -> &'static CultureConfig {
        CultureRegistry::get()
            .get_by_code(self.code)
            .expect("Registered culture should always be valid")
    }

    /// English name of the language (e.g., "French").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "Français").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether this is the default culture.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// Numeric separator conventions for this culture.
    pub fn number_format(&self) -> &'static NumberFormat {
        &self.config().number_format
    }

    /// Localized validation messages for this culture.
    pub fn messages(&self) -> &'static CultureMessages {
        &self.config().messages
    }
}

impl Default for Culture {
    fn default() -> Self {
        Culture::default_culture()
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
