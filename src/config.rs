use anyhow::{Context, Result};

use crate::i18n::Culture;

#[derive(Debug, Clone)]
pub struct Config {
    // Localization
    pub default_culture: Culture,

    // Seed data
    pub seed_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Localization - culture assumed when no preference is known
            default_culture: match std::env::var("CATALOG_DEFAULT_CULTURE") {
                Ok(code) => Culture::from_code(&code)
                    .context("CATALOG_DEFAULT_CULTURE is not a supported culture code")?,
                Err(_) => Culture::default_culture(),
            },

            // Seed data - optional JSON file of product drafts loaded at startup
            seed_file: std::env::var("CATALOG_SEED_FILE").ok(),
        })
    }
}
