// src/file/mod.rs
use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{ModuleCatalog, Settings};

pub mod catalog;

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
    fn save(&self, data: &T, path: &Path) -> Result<()>;
}

/// Picks the configured catalog override, or the built-in catalog when none is set.
pub fn load_catalog(settings: &Settings) -> Result<ModuleCatalog> {
    match &settings.catalog_path {
        Some(path) => catalog::CatalogFileHandler::new()
            .load(path)
            .with_context(|| format!("Failed to load catalog override {}", path.display())),
        None => ModuleCatalog::builtin().context("Built-in catalog is invalid"),
    }
}
