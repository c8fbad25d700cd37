// src/gui/components/status_bar.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if app.load_state().is_loading() && app.current_page().needs_data() {
            ui.spinner();
        }
        ui.label(app.status_text());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(app.route.path()).monospace().weak());
        });
    });
}
