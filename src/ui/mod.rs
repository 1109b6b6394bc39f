// src/ui/mod.rs
use eframe::egui;
use rfd::FileDialog;
use tracing::info;

use crate::input::command::{LogoutCommand, NavigateToDashboardCommand};
use crate::input::CommandQueue;
use crate::state::{SessionSnapshot, UiState};

pub mod analysis;
pub mod assets;
pub mod dashboard;
pub mod login;

pub use assets::AssetResolver;

/// Title bar shared by the dashboard and analysis screens. Clicking the title
/// goes back to the dashboard.
pub fn show_top_bar(
    ui: &mut egui::Ui,
    title: &str,
    snapshot: &SessionSnapshot,
    commands: &mut CommandQueue,
    ui_state: &mut UiState,
) {
    egui::menu::bar(ui, |ui| {
        let title_button = egui::Button::new(egui::RichText::new(title).heading().strong()).frame(false);
        if ui.add(title_button).on_hover_text("Dashboard").clicked() {
            commands.push(NavigateToDashboardCommand);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.menu_button("👤", |ui| {
                if let Some(username) = &snapshot.username {
                    ui.label(format!("Signed in as {}", username));
                    ui.separator();
                }
                if ui.button("⎋ Logout").clicked() {
                    commands.push(LogoutCommand);
                    ui_state.clear_login_form();
                    ui.close_menu();
                }
            });
        });
    });
}

/// Opens the native picker. Selected files are only reported; processing them
/// belongs to the upload service.
pub fn upload_button(ui: &mut egui::Ui, label: &str, ui_state: &mut UiState) {
    if ui.button(format!("⬆ {}", label)).clicked() {
        let picked = FileDialog::new()
            .set_title("Upload Files")
            .pick_files();

        if let Some(files) = picked {
            info!(count = files.len(), "files selected for upload");
            ui_state.report_upload(&files);
        }
    }
}
