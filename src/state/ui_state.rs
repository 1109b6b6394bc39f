// src/state/ui_state.rs
use std::path::PathBuf;

/// Presentation-only state: form buffers and banners. Nothing here feeds back
/// into the console session.
#[derive(Debug, Default)]
pub struct UiState {
    pub username_input: String,
    pub password_input: String,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
}

impl UiState {
    /// Drops everything typed into the sign-in form.
    pub fn clear_login_form(&mut self) {
        self.username_input.clear();
        self.password_input.clear();
    }

    pub fn report_upload(&mut self, files: &[PathBuf]) {
        self.status_message = Some(match files {
            [] => "No files selected".to_string(),
            [one] => format!("Selected {} for upload", one.display()),
            many => format!("Selected {} files for upload", many.len()),
        });
    }
}
