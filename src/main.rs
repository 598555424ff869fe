use std::path::Path;

use anyhow::Result;
use tracing::info;

use product_catalog::catalog::{CatalogMetrics, CatalogService, ProductDraft};
use product_catalog::config::Config;
use product_catalog::i18n::{change_ui_culture, parse_cookie_value, Culture, MemoryCookieStore, CULTURE_COOKIE};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("product_catalog=info".parse()?),
        )
        .init();

    info!("Starting product catalog demo");

    // Load configuration from environment
    let config = Config::from_env()?;
    let service = CatalogService::in_memory();

    // Step 1: Seed the catalog
    if let Some(path) = &config.seed_file {
        info!("Seeding catalog from {}", path);
        service.seed_from_file(Path::new(path), config.default_culture)?;
    } else {
        info!("Seeding catalog with built-in products");
        for draft in [
            ProductDraft::new("Echo Dot", "92.50", "10")
                .with_description("(2nd Generation) - Black"),
            ProductDraft::new("Anker 3ft Premium", "9.99", "50")
                .with_description("Nylon Braided USB Cable"),
            ProductDraft::new("JVC HAFX8R Headphone", "69.99", "30")
                .with_description("Riptidz In-Ear"),
            ProductDraft::new("VTech CS6114 DECT 6.0", "32.50", "20")
                .with_description("Cordless Phone"),
            ProductDraft::new("NOKIA OEM BL-5J", "895.00", "10")
                .with_description("Cell Phone Battery"),
        ] {
            service.save_product(&draft, Culture::ENGLISH)?;
        }
    }

    let products = service.products()?;
    info!("Catalog holds {} product(s)", products.len());
    println!("{}", serde_json::to_string_pretty(&products)?);

    // Step 2: Check an incomplete draft in the default culture
    let bad_draft = ProductDraft::new("Spare cable", "two euros", "-3");
    let errors = service.check_product_errors(&bad_draft, config.default_culture);
    info!(
        "Draft check under '{}' found {} problem(s)",
        config.default_culture,
        errors.len()
    );
    for error in &errors {
        println!("  - {}", error);
    }

    // Step 3: Switch the UI culture to French and check again
    let cookies = MemoryCookieStore::new();
    let culture = change_ui_culture(&cookies, "Français");
    info!(
        "Culture cookie written: {}",
        cookies.get(CULTURE_COOKIE).unwrap_or_default()
    );

    // Read the preference back the way a later request would
    let culture = cookies
        .get(CULTURE_COOKIE)
        .and_then(|value| parse_cookie_value(&value))
        .unwrap_or(culture);

    let errors = service.check_product_errors(&bad_draft, culture);
    info!(
        "Draft check under '{}' found {} problem(s)",
        culture,
        errors.len()
    );
    for error in &errors {
        println!("  - {}", error);
    }

    // Step 4: Save a draft written in French notation
    let saved = service.save_product(
        &ProductDraft::new("Casque audio", "129,99", "15"),
        culture,
    )?;
    info!("Saved '{}' at price {}", saved.name, saved.price);

    // Step 5: Remove a product and report activity
    service.delete_product(saved.id)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&CatalogMetrics::global().report())?
    );

    info!("Demo finished");
    Ok(())
}
