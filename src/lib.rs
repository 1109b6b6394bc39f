// src/lib.rs
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod file;
pub mod input;
pub mod state;
pub mod ui;

pub use app::ConsoleApp;
pub use error::{CatalogError, ConsoleError};
pub use state::{ConsoleState, SessionSnapshot};
