// src/gui/components/company_table.rs
//
// The directory listing. Rows come from the filtered view; clicking a name
// returns it so the page can route to the detail view.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::*, format, search::FilterView};

const HEADERS: &[&str] = &[COL_NAME, COL_INDUSTRY, COL_EXCHANGE, COL_HEADQUARTERS, COL_VALUATION, COL_WEBSITE];
const WIDTHS: &[f32] = &[200.0, 160.0, 90.0, 160.0, 130.0, 160.0];

pub fn draw(ui: &mut egui::Ui, view: &FilterView<'_>) -> Option<String> {
    let mut clicked = None;
    let row_h = ui.text_style_height(&egui::TextStyle::Body) + 8.0;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .id_salt("company_table");
    for &w in WIDTHS {
        table = table.column(Column::initial(w).at_least(60.0).clip(true));
    }

    table
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(*h);
                });
            }
        })
        .body(|body| {
            body.rows(row_h, view.len(), |mut row| {
                let Some(rec) = view.record(row.index()) else { return };

                row.col(|ui| {
                    if ui.link(RichText::new(rec.name()).strong()).clicked() {
                        clicked = Some(s!(rec.name()));
                    }
                });
                row.col(|ui| {
                    ui.label(format::or_na(rec.get(COL_INDUSTRY)));
                });
                row.col(|ui| {
                    ui.label(rec.non_empty(COL_EXCHANGE).unwrap_or(""));
                });
                row.col(|ui| {
                    ui.label(format::or_na(rec.get(COL_HEADQUARTERS)));
                });
                row.col(|ui| {
                    ui.label(format::currency(rec.get(COL_VALUATION)));
                });
                row.col(|ui| match rec.non_empty(COL_WEBSITE) {
                    Some(url) => {
                        ui.hyperlink_to(format::website_label(Some(url)), url.trim());
                    }
                    None => {
                        ui.label(format::NA);
                    }
                });
            });
        });

    if let Some(name) = &clicked {
        logf!("UI: Open company {:?}", name);
    }
    clicked
}
