//! Culture registry: single source of truth for all supported cultures.
//!
//! This module provides a centralized registry of the cultures the catalog
//! can validate and render in. It uses a singleton pattern with `OnceLock`
//! to ensure thread-safe initialization and access.

use std::sync::OnceLock;

use crate::i18n::messages::{
    CultureMessages, ENGLISH_MESSAGES, FRENCH_MESSAGES, SPANISH_MESSAGES,
};
use crate::i18n::numeric::NumberFormat;

/// Configuration for a supported culture.
///
/// Carries everything culture-dependent in one place: identification, the
/// language-name spellings a shopper may pick from, the numeric separator
/// conventions used to parse form fields, and the localized validation
/// messages.
#[derive(Debug, Clone)]
pub struct CultureConfig {
    /// Two-letter culture code (e.g., "en", "fr", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "French", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Français", "Español")
    pub native_name: &'static str,

    /// Accepted spellings of this language's name across all supported UI
    /// languages, matched exactly when a shopper switches language
    pub spellings: &'static [&'static str],

    /// Numeric separator conventions for parsing price and stock input
    pub number_format: NumberFormat,

    /// Localized validation messages
    pub messages: CultureMessages,

    /// Whether this is the default culture (only one should be true)
    pub is_default: bool,

    /// Whether this culture is enabled for use
    pub enabled: bool,
}

/// Global culture registry singleton.
///
/// This registry contains all supported cultures and provides methods to
/// query and access them. It's initialized once on first access and remains
/// immutable thereafter.
pub struct CultureRegistry {
    cultures: Vec<CultureConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<CultureRegistry> = OnceLock::new();

impl CultureRegistry {
    /// Get the global culture registry instance.
    ///
    /// This method initializes the registry on first call and returns a
    /// reference to the singleton instance on subsequent calls.
    pub fn get() -> &'static CultureRegistry {
        REGISTRY.get_or_init(|| CultureRegistry {
            cultures: default_cultures(),
        })
    }

    /// Get a culture configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The two-letter culture code (e.g., "en", "fr")
    ///
    /// # Returns
    /// * `Some(&CultureConfig)` if the culture exists
    /// * `None` if the culture is not found
    pub fn get_by_code(&self, code: &str) -> Option<&CultureConfig> {
        self.cultures.iter().find(|culture| culture.code == code)
    }

    /// Get a culture configuration by one of its language-name spellings.
    ///
    /// Matching is exact and case-sensitive: "Français" resolves, "français"
    /// does not. Only enabled cultures are candidates.
    ///
    /// # Arguments
    /// * `name` - A language name as displayed in one of the UI languages
    ///
    /// # Returns
    /// * `Some(&CultureConfig)` if the spelling belongs to an enabled culture
    /// * `None` otherwise
    pub fn get_by_spelling(&self, name: &str) -> Option<&CultureConfig> {
        self.cultures
            .iter()
            .filter(|culture| culture.enabled)
            .find(|culture| culture.spellings.contains(&name))
    }

    /// Get all enabled cultures.
    ///
    /// # Returns
    /// A vector of references to all culture configurations where `enabled` is true.
    pub fn list_enabled(&self) -> Vec<&CultureConfig> {
        self.cultures
            .iter()
            .filter(|culture| culture.enabled)
            .collect()
    }

    /// Get all cultures (including disabled ones).
    ///
    /// # Returns
    /// A vector of references to all culture configurations.
    pub fn list_all(&self) -> Vec<&CultureConfig> {
        self.cultures.iter().collect()
    }

    /// Get the default culture configuration.
    ///
    /// The default culture is the fallback for unrecognized language names
    /// and unreadable culture cookies. There should be exactly one.
    ///
    /// # Returns
    /// A reference to the default culture configuration.
    ///
    /// # Panics
    /// Panics if no default culture is found or if multiple default cultures
    /// are defined (this indicates a configuration error).
    pub fn default_culture(&self) -> &CultureConfig {
        let defaults: Vec<_> = self
            .cultures
            .iter()
            .filter(|culture| culture.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default culture found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default cultures found in registry"),
        }
    }

    /// Check if a culture code is supported and enabled.
    ///
    /// # Arguments
    /// * `code` - The two-letter culture code to check
    ///
    /// # Returns
    /// `true` if the culture exists and is enabled, `false` otherwise.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|culture| culture.enabled)
            .unwrap_or(false)
    }
}

/// Default culture configurations.
///
/// This function returns the initial set of supported cultures: English
/// (default), French, and Spanish. Spellings cover each language's name as
/// written in all three UI languages.
fn default_cultures() -> Vec<CultureConfig> {
    vec![
        CultureConfig {
            code: "en",
            name: "English",
            native_name: "English",
            spellings: &["English", "Anglais", "Inglés"],
            number_format: NumberFormat {
                decimal_sep: '.',
                group_seps: &[','],
            },
            messages: ENGLISH_MESSAGES,
            is_default: true,
            enabled: true,
        },
        CultureConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            spellings: &["French", "Français", "Francés"],
            number_format: NumberFormat {
                decimal_sep: ',',
                group_seps: &['\u{00A0}', '\u{202F}', ' '],
            },
            messages: FRENCH_MESSAGES,
            is_default: false,
            enabled: true,
        },
        CultureConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            spellings: &["Spanish", "Espagnol", "Español"],
            number_format: NumberFormat {
                decimal_sep: ',',
                group_seps: &['.'],
            },
            messages: SPANISH_MESSAGES,
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = CultureRegistry::get();
        let registry2 = CultureRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let registry = CultureRegistry::get();
        let config = registry.get_by_code("en");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert_eq!(config.native_name, "English");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_french() {
        let registry = CultureRegistry::get();
        let config = registry.get_by_code("fr");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "fr");
        assert_eq!(config.name, "French");
        assert_eq!(config.native_name, "Français");
        assert!(!config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_spanish() {
        let registry = CultureRegistry::get();
        let config = registry.get_by_code("es");

        assert!(config.is_some());
        assert_eq!(config.unwrap().native_name, "Español");
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = CultureRegistry::get();
        let config = registry.get_by_code("de");
        assert!(config.is_none());
    }

    #[test]
    fn test_get_by_spelling_all_known_names() {
        let registry = CultureRegistry::get();

        for spelling in ["English", "Anglais", "Inglés"] {
            assert_eq!(registry.get_by_spelling(spelling).unwrap().code, "en");
        }
        for spelling in ["French", "Français", "Francés"] {
            assert_eq!(registry.get_by_spelling(spelling).unwrap().code, "fr");
        }
        for spelling in ["Spanish", "Espagnol", "Español"] {
            assert_eq!(registry.get_by_spelling(spelling).unwrap().code, "es");
        }
    }

    #[test]
    fn test_get_by_spelling_is_case_sensitive() {
        let registry = CultureRegistry::get();

        assert!(registry.get_by_spelling("english").is_none());
        assert!(registry.get_by_spelling("FRANÇAIS").is_none());
    }

    #[test]
    fn test_get_by_spelling_rejects_codes_and_unknowns() {
        let registry = CultureRegistry::get();

        assert!(registry.get_by_spelling("en").is_none());
        assert!(registry.get_by_spelling("Deutsch").is_none());
        assert!(registry.get_by_spelling("").is_none());
    }

    #[test]
    fn test_list_enabled_contains_all_three() {
        let registry = CultureRegistry::get();
        let enabled = registry.list_enabled();

        assert_eq!(enabled.len(), 3);
        assert!(enabled.iter().any(|culture| culture.code == "en"));
        assert!(enabled.iter().any(|culture| culture.code == "fr"));
        assert!(enabled.iter().any(|culture| culture.code == "es"));
    }

    #[test]
    fn test_list_all_contains_all_three() {
        let registry = CultureRegistry::get();
        let all = registry.list_all();

        assert_eq!(all.len(), 3);
        assert!(all.iter().any(|culture| culture.code == "en"));
        assert!(all.iter().any(|culture| culture.code == "fr"));
        assert!(all.iter().any(|culture| culture.code == "es"));
    }

    #[test]
    fn test_default_culture_is_english() {
        let registry = CultureRegistry::get();
        let default = registry.default_culture();

        assert_eq!(default.code, "en");
        assert!(default.is_default);
    }

    #[test]
    fn test_is_enabled() {
        let registry = CultureRegistry::get();

        assert!(registry.is_enabled("en"));
        assert!(registry.is_enabled("fr"));
        assert!(registry.is_enabled("es"));
        assert!(!registry.is_enabled("de"));
    }

    #[test]
    fn test_number_formats_per_culture() {
        let registry = CultureRegistry::get();

        let english = registry.get_by_code("en").unwrap();
        assert_eq!(english.number_format.decimal_sep, '.');
        assert_eq!(english.number_format.group_seps, &[',']);

        let french = registry.get_by_code("fr").unwrap();
        assert_eq!(french.number_format.decimal_sep, ',');

        let spanish = registry.get_by_code("es").unwrap();
        assert_eq!(spanish.number_format.decimal_sep, ',');
        assert_eq!(spanish.number_format.group_seps, &['.']);
    }

    #[test]
    fn test_spellings_cover_three_names_each() {
        let registry = CultureRegistry::get();

        for culture in registry.list_all() {
            assert_eq!(
                culture.spellings.len(),
                3,
                "culture {} should carry one spelling per UI language",
                culture.code
            );
        }
    }

    #[test]
    fn test_culture_config_clone() {
        let registry = CultureRegistry::get();
        let config = registry.get_by_code("en").unwrap();

        let cloned = config.clone();
        assert_eq!(config.code, cloned.code);
        assert_eq!(config.name, cloned.name);
    }
}
