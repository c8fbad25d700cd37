// src/gui/components/nav_bar.rs
//
// Brand, page tabs and the source picker. Tab clicks go through `App::go`,
// so the switch happens after the frame and the new page gets a fresh load.

use eframe::egui::{self, RichText};

use crate::config::options::SourceKind;
use crate::gui::{app::App, router};
use crate::routing::Route;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.add(egui::Label::new(RichText::new("smallcap.ai").strong().size(18.0)).sense(egui::Sense::click())).clicked() {
            app.go(Route::Landing);
        }
        ui.separator();

        let current = app.current_page().title();
        for page in router::all_pages() {
            let Some(target) = page.nav_route() else { continue };
            let selected = page.title() == current;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                logf!("UI: Tab switch {} → {}", current, page.title());
                app.go(target);
            }
        }

        if matches!(app.route, Route::Company(_)) {
            ui.separator();
            ui.label(RichText::new(app.route.title()).italics());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut kind = app.state.options.source.kind;
            egui::ComboBox::from_id_salt("source_kind")
                .selected_text(kind.label())
                .show_ui(ui, |ui| {
                    for k in [SourceKind::JsonTable, SourceKind::Csv] {
                        ui.selectable_value(&mut kind, k, k.label());
                    }
                });
            ui.label("Source:");
            app.set_source(kind);
        });
    });
}
