// src/gui/components/panels.rs
//
// Small shared blocks: loading spinner, error panel, card frame.

use eframe::egui::{self, Color32, RichText};

use crate::routing::Route;

pub fn loading(ui: &mut egui::Ui) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.spinner();
        ui.label(RichText::new("Loading companies…").weak());
    });
}

/// Static error panel. `detail` goes to the hover text only.
/// The link is drawn only when the page has somewhere to send the user;
/// returns that route when it was clicked.
pub fn error(
    ui: &mut egui::Ui,
    title: &str,
    message: Option<&str>,
    detail: &str,
    back: Option<Route>,
) -> Option<Route> {
    let mut clicked = None;
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        let heading = ui.label(RichText::new(title).size(22.0).strong().color(Color32::LIGHT_RED));
        if !detail.is_empty() {
            heading.on_hover_text(detail);
        }
        if let Some(msg) = message {
            ui.label(msg);
        }
        if let Some(route) = back {
            ui.add_space(8.0);
            if ui.link(back_label(&route)).clicked() {
                clicked = Some(route);
            }
        }
    });
    clicked
}

fn back_label(route: &Route) -> String {
    match route {
        Route::Directory => s!("Return to Directory"),
        other => format!("Return to {}", other.title()),
    }
}

pub fn card<R>(ui: &mut egui::Ui, body: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            body(ui)
        })
        .inner
}
