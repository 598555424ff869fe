//! Culture cookie persistence.
//!
//! When a shopper switches language, the resolved culture is written to a
//! cookie under a fixed name so the preference survives the session. The
//! payload pairs a formatting culture with a UI culture (`c=fr|uic=fr`);
//! both halves always carry the same code here, and the UI half wins when
//! a payload is read back.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use regex::Regex;
use tracing::debug;

use crate::i18n::culture::Culture;

/// Name of the cookie holding the shopper's culture preference.
pub const CULTURE_COOKIE: &str = "culture-cookie";

/// Regex for reading a culture cookie payload (initialized lazily)
static COOKIE_VALUE_REGEX: OnceLock<Regex> = OnceLock::new();

fn cookie_value_regex() -> &'static Regex {
    COOKIE_VALUE_REGEX.get_or_init(|| {
        Regex::new(r"^c=([A-Za-z-]+)\|uic=([A-Za-z-]+)$")
            .expect("Culture cookie regex should be valid")
    })
}

/// Destination for culture cookies.
///
/// The catalog core does not know where cookies live; callers supply the
/// store (an HTTP response, a test double, the in-memory store below).
pub trait CookieStore: Send + Sync {
    /// Write a cookie, replacing any previous value under the same name.
    fn write(&self, name: &str, value: &str);
}

/// Serialize a culture into the cookie payload format.
pub fn cookie_value(culture: Culture) -> String {
    format!("c={0}|uic={0}", culture.code())
}

/// Read a culture back out of a cookie payload.
///
/// Returns `None` when the payload does not match the expected shape or
/// names a culture that is not enabled. The UI-culture half is the one
/// that decides.
pub fn parse_cookie_value(value: &str) -> Option<Culture> {
    let captures = cookie_value_regex().captures(value)?;
    Culture::from_code(&captures[2]).ok()
}

/// Persist a culture preference into `store` under [`CULTURE_COOKIE`].
pub fn write_culture_cookie(store: &dyn CookieStore, culture: Culture) {
    store.write(CULTURE_COOKIE, &cookie_value(culture));
}

/// Switch the UI culture to the given language and persist the choice.
///
/// Resolves `language` through [`Culture::from_language_name`] (falling
/// back to the default culture for unrecognized names), writes the culture
/// cookie, and returns the culture now in effect.
///
/// # Arguments
/// * `store` - Where the culture cookie is written
/// * `language` - The language name the shopper selected
///
/// # Returns
/// The culture that was resolved and persisted.
pub fn change_ui_culture(store: &dyn CookieStore, language: &str) -> Culture {
    let culture = Culture::from_language_name(language);
    write_culture_cookie(store, culture);
    debug!("UI culture set to '{}' for language '{}'", culture, language);
    culture
}

/// In-memory cookie store.
///
/// Used by the demo binary and by tests that need to observe what was
/// written without a real HTTP response at hand.
#[derive(Debug, Default)]
pub struct MemoryCookieStore {
    cookies: Mutex<HashMap<String, String>>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a cookie back, if one was written.
    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies.lock().unwrap().get(name).cloned()
    }
}

impl CookieStore for MemoryCookieStore {
    fn write(&self, name: &str, value: &str) {
        self.cookies
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }
}
