// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{FieldKey, ModuleId};
use crate::state::TabId;

/// Rejections produced by console commands. A command that returns one of these
/// has left the session exactly as it found it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("module {0} is not registered in the catalog")]
    UnknownModule(ModuleId),

    #[error("tab {0} is not open")]
    UnknownTab(TabId),

    #[error("'{0}' is not a known input field")]
    InvalidFieldKey(String),

    #[error("sign in before opening a module")]
    NotLoggedIn,

    #[error("sign-in rejected: {0}")]
    AuthenticationRejected(String),
}

/// Problems found while loading or validating a module catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("module {0} is declared more than once")]
    DuplicateModule(ModuleId),

    #[error("module {module} requires '{field}', which has no vocabulary entry")]
    MissingVocabularyField { module: ModuleId, field: FieldKey },

    #[error("module {module} lists input '{field}' more than once")]
    DuplicateInput { module: ModuleId, field: FieldKey },
}
