// src/ui/login.rs
use eframe::egui;
use crate::input::command::LoginCommand;
use crate::input::CommandQueue;
use crate::state::{Credentials, UiState};

pub fn show_login_view(
    ui: &mut egui::Ui,
    title: &str,
    ui_state: &mut UiState,
    commands: &mut CommandQueue,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.heading(egui::RichText::new(title).size(32.0).strong());
        ui.add_space(32.0);

        let width = 320.0_f32.min(ui.available_width());

        ui.add_sized(
            [width, 28.0],
            egui::TextEdit::singleline(&mut ui_state.username_input)
                .hint_text("USERNAME")
        );
        ui.add_space(8.0);

        let password = ui.add_sized(
            [width, 28.0],
            egui::TextEdit::singleline(&mut ui_state.password_input)
                .hint_text("PASSWORD")
                .password(true)
        );
        ui.add_space(16.0);

        let submitted = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui
            .add_sized([width, 36.0], egui::Button::new(egui::RichText::new("SIGN IN").strong()))
            .clicked();

        if submitted || clicked {
            commands.push(LoginCommand(Credentials::new(
                ui_state.username_input.clone(),
                ui_state.password_input.clone(),
            )));
        }
    });
}
