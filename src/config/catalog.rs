// src/config/catalog.rs
use serde::{Serialize, Deserialize};
use std::collections::HashSet;
use std::fmt;

use super::vocabulary::{FieldKey, FieldVocabulary};
use crate::error::{CatalogError, ConsoleError};

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.ron");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(pub u32);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Asset references for a module's precomputed artifacts. They are opaque
/// locators; nothing here checks that they resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOutputs {
    pub graph: String,
    pub table: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
    pub icon: String,
    pub inputs: Vec<FieldKey>,
    pub outputs: ModuleOutputs,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogFile {
    fields: FieldVocabulary,
    modules: Vec<Module>,
}

/// Read-only registry of the analysis modules and the vocabulary their inputs
/// draw from. Validated once on construction.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleCatalog {
    #[serde(rename = "fields")]
    vocabulary: FieldVocabulary,
    modules: Vec<Module>,
}

impl ModuleCatalog {
    pub fn new(vocabulary: FieldVocabulary, modules: Vec<Module>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for module in &modules {
            if !seen.insert(module.id) {
                return Err(CatalogError::DuplicateModule(module.id));
            }

            let mut inputs = HashSet::new();
            for &field in &module.inputs {
                if !vocabulary.contains(field) {
                    return Err(CatalogError::MissingVocabularyField { module: module.id, field });
                }
                if !inputs.insert(field) {
                    return Err(CatalogError::DuplicateInput { module: module.id, field });
                }
            }
        }

        Ok(Self { vocabulary, modules })
    }

    /// The catalog shipped with the console.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_ron(BUILTIN_CATALOG)
    }

    pub fn from_ron(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = ron::from_str(content)?;
        Self::new(file.fields, file.modules)
    }

    pub fn resolve(&self, id: ModuleId) -> Result<&Module, ConsoleError> {
        self.modules
            .iter()
            .find(|m| m.id == id)
            .ok_or(ConsoleError::UnknownModule(id))
    }

    pub fn resolve_outputs(&self, id: ModuleId) -> Result<&ModuleOutputs, ConsoleError> {
        self.resolve(id).map(|m| &m.outputs)
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn vocabulary(&self) -> &FieldVocabulary {
        &self.vocabulary
    }
}
