//! Product catalog core with localized validation.
//!
//! Validates product input (name, price, stock) under an explicit culture,
//! reporting problems in the shopper's language, and stores the products
//! that pass. English, French, and Spanish are supported; prices parse the
//! way each culture writes numbers.
//!
//! The entry points are [`catalog::CatalogService`] for catalog operations
//! and [`i18n::Culture`] plus [`i18n::change_ui_culture`] for language
//! handling.

pub mod catalog;
pub mod config;
pub mod i18n;
