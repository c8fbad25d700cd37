// src/gui/actions/copy.rs
use eframe::egui;

use crate::{export, gui::app::App, search::FilterView};

pub fn copy(app: &mut App, ui_ctx: &egui::Context, columns: &[String], view: &FilterView<'_>) {
    if view.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let opts = &app.state.options.export;
    logf!("Copy: rows={}, format={:?}, headers={}", view.len(), opts.format, opts.include_headers);

    match export::to_export_string(columns, view, opts) {
        Ok(txt) => {
            ui_ctx.copy_text(txt);
            app.status(format!("Copied {} companies to clipboard", view.len()));
        }
        Err(e) => {
            loge!("Copy: {}", e);
            app.status("Copy failed");
        }
    }
}
