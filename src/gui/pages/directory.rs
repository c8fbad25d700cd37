// src/gui/pages/directory.rs
use std::sync::Arc;

use eframe::egui::{self, RichText};

use crate::{
    gui::{actions, app::App, components::{company_table, filter_bar, panels}},
    load::LoadState,
    record::Directory,
    routing::Route,
    search::FilterView,
};

use super::Page;

pub struct DirectoryPage;
pub static PAGE: DirectoryPage = DirectoryPage;

impl Page for DirectoryPage {
    fn title(&self) -> &'static str { "Companies" }
    fn nav_route(&self) -> Option<Route> { Some(Route::Directory) }

    fn show(&self, ui: &mut egui::Ui, app: &mut App) {
        let dir: Arc<Directory> = match app.load_state() {
            LoadState::Loading => return panels::loading(ui),
            LoadState::Failed(reason) => {
                let reason = reason.clone();
                if let Some(route) = panels::error(ui, "Failed to fetch data", None, &reason, self.back_route()) {
                    app.go(route);
                }
                return;
            }
            LoadState::Ready(dir) => Arc::clone(dir),
        };

        ui.heading("Company Directory");
        ui.add_space(4.0);

        filter_bar::draw(ui, app, &dir);
        ui.separator();

        let query = app.state.gui.search.query();
        let view = FilterView::apply(&dir, &query);

        if view.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No companies match your search criteria").strong());
                ui.label(RichText::new("Try adjusting your filters or search term").weak());
                if ui.button("Clear all filters").clicked() {
                    logf!("UI: Clear all filters");
                    app.state.gui.search.clear();
                }
            });
            return;
        }

        ui.horizontal(|ui| {
            ui.label(format!("{} companies found", view.len()));
            if ui.button("Copy").on_hover_text("Copy the filtered list to the clipboard").clicked() {
                actions::copy(app, ui.ctx(), &dir.columns, &view);
            }
        });

        if let Some(name) = company_table::draw(ui, &view) {
            app.go(Route::Company(name));
        }
    }
}
