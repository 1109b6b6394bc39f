// src/ui/dashboard.rs
use eframe::egui;
use crate::config::ModuleCatalog;
use crate::input::command::{OpenModuleCommand, ResumeAnalysisCommand};
use crate::input::CommandQueue;
use crate::state::{SessionSnapshot, UiState};
use crate::ui::assets::{show_asset, AssetResolver};

const TILE_COLUMNS: usize = 3;
const TILE_SIZE: [f32; 2] = [220.0, 140.0];

pub fn show_dashboard_view(
    ui: &mut egui::Ui,
    snapshot: &SessionSnapshot,
    catalog: &ModuleCatalog,
    assets: &AssetResolver,
    commands: &mut CommandQueue,
    ui_state: &mut UiState,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);

        if !snapshot.tabs.is_empty() {
            let label = format!("↩ Return to analysis ({} open)", snapshot.tabs.len());
            if ui.button(label).clicked() {
                commands.push(ResumeAnalysisCommand);
            }
            ui.add_space(16.0);
        }

        egui::Grid::new("module_tiles")
            .num_columns(TILE_COLUMNS)
            .spacing([24.0, 24.0])
            .show(ui, |ui| {
                for (index, module) in catalog.modules().iter().enumerate() {
                    ui.group(|ui| {
                        ui.set_min_size(TILE_SIZE.into());
                        ui.vertical_centered(|ui| {
                            show_asset(ui, assets, &module.icon, "MOD", egui::vec2(64.0, 64.0));
                            ui.add_space(8.0);

                            let open = ui.add(
                                egui::Button::new(egui::RichText::new(&module.name).strong().size(18.0))
                                    .frame(false)
                            );
                            if open.clicked() {
                                commands.push(OpenModuleCommand(module.id));
                            }
                        });
                    });

                    if (index + 1) % TILE_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });

        ui.add_space(32.0);
        crate::ui::upload_button(ui, "UPLOAD FILES", ui_state);
    });
}
