// src/app.rs
use eframe::egui;

use crate::config::Settings;
use crate::input::CommandQueue;
use crate::state::{ConsoleState, SessionSnapshot, UiState, View};
use crate::ui::{self, AssetResolver};

pub struct ConsoleApp {
    state: ConsoleState,
    snapshot: SessionSnapshot,
    ui_state: UiState,
    commands: CommandQueue,
    assets: AssetResolver,
    title: String,
}

impl ConsoleApp {
    pub fn new(state: ConsoleState, settings: &Settings) -> Self {
        let snapshot = state.snapshot();
        Self {
            state,
            snapshot,
            ui_state: UiState::default(),
            commands: CommandQueue::new(),
            assets: AssetResolver::new(settings.asset_root.clone()),
            title: settings.title.clone(),
        }
    }

    /// Applies whatever the widgets queued this frame. Returns true when the
    /// snapshot changed and a repaint is needed.
    fn apply_pending(&mut self) -> bool {
        if self.commands.is_empty() {
            return false;
        }

        let (snapshot, error) = self.commands.apply(&mut self.state);
        self.snapshot = snapshot;
        if let Some(e) = error {
            self.ui_state.error_message = Some(e.to_string());
        }
        true
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        let Some(status) = self.ui_state.status_message.clone() else {
            return;
        };

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(status);
                if ui.small_button("✖").clicked() {
                    self.ui_state.status_message = None;
                }
            });
        });
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.snapshot.is_logged_in {
            egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
                ui::show_top_bar(ui, &self.title, &self.snapshot, &mut self.commands, &mut self.ui_state);
            });
        }

        self.show_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.snapshot.current_view {
                View::Login => {
                    ui::login::show_login_view(ui, &self.title, &mut self.ui_state, &mut self.commands);
                },
                View::Dashboard => {
                    ui::dashboard::show_dashboard_view(
                        ui,
                        &self.snapshot,
                        self.state.catalog(),
                        &self.assets,
                        &mut self.commands,
                        &mut self.ui_state,
                    );
                },
                View::Analysis => {
                    ui::analysis::show_analysis_view(
                        ui,
                        &self.snapshot,
                        self.state.catalog(),
                        &self.assets,
                        &mut self.commands,
                        &mut self.ui_state,
                    );
                },
            }
        });

        // Show error modal if needed
        let error_msg = self.ui_state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.ui_state.error_message = None;
                    }
                });
        }

        if self.apply_pending() {
            ctx.request_repaint();
        }
    }
}
