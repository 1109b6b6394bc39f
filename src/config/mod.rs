// src/config/mod.rs
pub mod catalog;
pub mod settings;
pub mod vocabulary;

// Re-export commonly used types
pub use catalog::{Module, ModuleCatalog, ModuleId, ModuleOutputs};
pub use settings::Settings;
pub use vocabulary::{FieldKey, FieldVocabulary};
