// src/gui/components/filter_bar.rs
//
// Search box, scope toggle and the Exchange / Sector facets. Writes straight
// into `app.state.gui.search`; the page rebuilds its view from that each frame.

use eframe::egui;

use crate::{
    config::{consts::{COL_EXCHANGE, COL_SECTOR}, options::MatchScope},
    gui::app::App,
    record::Directory,
    search,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App, dir: &Directory) {
    let search = &mut app.state.gui.search;

    ui.horizontal(|ui| {
        let edit = egui::TextEdit::singleline(&mut search.text)
            .hint_text("Search companies by name, industry, or location...")
            .desired_width(360.0);
        if ui.add(edit).changed() {
            logd!("UI: Search → {:?}", search.text);
        }

        let mut all = matches!(search.scope, MatchScope::AllFields);
        if ui.checkbox(&mut all, "All fields").on_hover_text("Match any column, not just name, industry and headquarters").changed() {
            search.scope = if all { MatchScope::AllFields } else { MatchScope::Listed };
            logf!("UI: Match scope → {:?}", search.scope);
        }

        ui.toggle_value(&mut search.show_filters, "Filters");
    });

    if !search.show_filters {
        return;
    }

    ui.horizontal(|ui| {
        facet_combo(ui, "facet_exchange", "All Exchanges", &mut search.exchange, dir, COL_EXCHANGE);
        facet_combo(ui, "facet_sector", "All Sectors", &mut search.sector, dir, COL_SECTOR);
        if !search.is_clear() && ui.button("Clear all filters").clicked() {
            logf!("UI: Clear all filters");
            search.clear();
        }
    });
}

fn facet_combo(ui: &mut egui::Ui, id: &str, all_label: &str, value: &mut String, dir: &Directory, column: &str) {
    let shown = if value.is_empty() { all_label } else { value.as_str() };
    let before = value.clone();
    egui::ComboBox::from_id_salt(id)
        .selected_text(shown.to_owned())
        .show_ui(ui, |ui| {
            ui.selectable_value(value, s!(), all_label);
            for v in search::facet_values(&dir.records, column) {
                let label = v.clone();
                ui.selectable_value(value, v, label);
            }
        });
    if *value != before {
        logf!("UI: Facet {} → {:?}", column, value);
    }
}
