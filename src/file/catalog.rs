// src/file/catalog.rs
use super::FileHandler;
use crate::config::ModuleCatalog;
use crate::error::CatalogError;
use std::path::Path;
use std::fs;
use anyhow::Result;

#[derive(Debug)]
pub struct CatalogFileHandler;

impl CatalogFileHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FileHandler<ModuleCatalog> for CatalogFileHandler {
    fn load(&self, path: &Path) -> Result<ModuleCatalog> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(ModuleCatalog::from_ron(&content)?)
    }

    fn save(&self, data: &ModuleCatalog, path: &Path) -> Result<()> {
        let content = ron::ser::to_string_pretty(
            data,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(4)
        )?;
        fs::write(path, content)?;
        Ok(())
    }
}
