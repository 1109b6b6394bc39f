// src/ui/analysis.rs
use eframe::egui;
use crate::config::{FieldKey, FieldVocabulary, ModuleCatalog};
use crate::input::command::{CloseTabCommand, RunCommand, SetActiveTabCommand, UpdateFieldCommand};
use crate::input::CommandQueue;
use crate::state::{ActiveTabView, SessionSnapshot, TabSummary, UiState};
use crate::ui::assets::{show_asset, AssetResolver};

const SIDE_PANEL_WIDTH: f32 = 320.0;

pub fn show_analysis_view(
    ui: &mut egui::Ui,
    snapshot: &SessionSnapshot,
    catalog: &ModuleCatalog,
    assets: &AssetResolver,
    commands: &mut CommandQueue,
    ui_state: &mut UiState,
) {
    show_tab_bar(ui, snapshot, commands);
    ui.separator();

    let (Some(tab), Some(active)) = (snapshot.active_tab(), snapshot.active.as_ref()) else {
        ui.centered_and_justified(|ui| {
            ui.label("No module open");
        });
        return;
    };

    let available_size = ui.available_size();

    egui::Grid::new("analysis_grid")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            // Left panel - tables
            ui.vertical(|ui| {
                ui.set_min_width(SIDE_PANEL_WIDTH);
                ui.set_max_width(SIDE_PANEL_WIDTH);
                ui.set_min_height(available_size.y);

                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.heading("Values and Tables");
                    ui.separator();
                    ui.add_space(8.0);

                    match &active.outputs {
                        Some(outputs) => show_asset(
                            ui,
                            assets,
                            &outputs.table,
                            "Table Image Missing",
                            egui::vec2(SIDE_PANEL_WIDTH - 20.0, 500.0),
                        ),
                        None => {
                            ui.label(
                                egui::RichText::new("Select options and click RUN to view data")
                                    .italics()
                                    .weak(),
                            );
                        }
                    }
                });
            });

            // Right panel - controls and graph
            ui.vertical(|ui| {
                ui.set_min_width((available_size.x - SIDE_PANEL_WIDTH - 16.0).max(0.0));

                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    show_controls(ui, tab, active, catalog.vocabulary(), commands);
                });

                ui.add_space(16.0);

                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.set_min_height(400.0);
                    ui.heading("Graph Output");
                    ui.separator();

                    match &active.outputs {
                        Some(outputs) => show_asset(
                            ui,
                            assets,
                            &outputs.graph,
                            "Graph Image Missing",
                            egui::vec2(800.0, 400.0),
                        ),
                        None => {
                            ui.vertical_centered(|ui| {
                                ui.add_space(32.0);
                                ui.label("Graph area empty");
                                ui.small("Select input parameters above");
                            });
                        }
                    }
                });

                ui.add_space(16.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    crate::ui::upload_button(ui, "Upload Files", ui_state);
                });
            });
            ui.end_row();
        });
}

fn show_tab_bar(ui: &mut egui::Ui, snapshot: &SessionSnapshot, commands: &mut CommandQueue) {
    ui.horizontal_wrapped(|ui| {
        for tab in &snapshot.tabs {
            let is_active = snapshot.active_tab_id == Some(tab.id);

            if ui.selectable_label(is_active, tab.display_name.as_str()).clicked() {
                commands.push(SetActiveTabCommand(tab.id));
            }
            if ui.small_button("✖").on_hover_text("Close tab").clicked() {
                commands.push(CloseTabCommand(tab.id));
            }
            ui.separator();
        }
    });
}

// One dropdown per required input, then RUN
fn show_controls(
    ui: &mut egui::Ui,
    tab: &TabSummary,
    active: &ActiveTabView,
    vocabulary: &FieldVocabulary,
    commands: &mut CommandQueue,
) {
    ui.horizontal_wrapped(|ui| {
        for &key in &active.required_inputs {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(key.as_str().to_uppercase()).small().strong());
                field_dropdown(ui, tab, key, vocabulary, commands);
            });
        }

        let run = egui::Button::new(egui::RichText::new("RUN").strong().color(egui::Color32::WHITE))
            .fill(egui::Color32::from_rgb(21, 128, 61))
            .min_size(egui::vec2(96.0, 32.0));
        if ui.add(run).clicked() {
            commands.push(RunCommand(tab.id));
        }
    });
}

fn field_dropdown(
    ui: &mut egui::Ui,
    tab: &TabSummary,
    key: FieldKey,
    vocabulary: &FieldVocabulary,
    commands: &mut CommandQueue,
) {
    let current = tab.form_data.get(key);
    let unselected = format!("Select {}", key);
    let selected_text = current.unwrap_or(unselected.as_str()).to_string();

    let mut choice: Option<String> = None;
    egui::ComboBox::from_id_source(("field", tab.id, key))
        .selected_text(selected_text)
        .width(160.0)
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_none(), unselected.as_str()).clicked() {
                choice = Some(String::new());
            }
            for option in vocabulary.options(key) {
                if ui.selectable_label(current == Some(option.as_str()), option.as_str()).clicked() {
                    choice = Some(option.clone());
                }
            }
        });

    if let Some(value) = choice {
        commands.push(UpdateFieldCommand {
            tab_id: tab.id,
            field: key.as_str().to_string(),
            value,
        });
    }
}
