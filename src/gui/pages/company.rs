// src/gui/pages/company.rs
use std::sync::Arc;

use eframe::egui::{self, RichText};

use crate::{
    config::consts::{COL_FOUNDERS, COL_KEY_CONTACTS},
    detail::{CompanyDetail, Section},
    extract::{self, Segment},
    format,
    gui::{app::App, components::panels},
    load::LoadState,
    record::Directory,
    routing::{self, Route},
};

use super::Page;

pub struct CompanyPage;
pub static PAGE: CompanyPage = CompanyPage;

impl Page for CompanyPage {
    fn title(&self) -> &'static str { "Company" }
    fn back_route(&self) -> Option<Route> { Some(Route::Directory) }

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

        let Route::Company(name) = &app.route else { return };
        let detail = match routing::find_company(&dir, name) {
            Ok(rec) => CompanyDetail::from_record(rec),
            Err(e) => {
                logd!("Company: {}", e);
                if let Some(route) = panels::error(
                    ui,
                    e.user_message(),
                    Some("We couldn't find the company you're looking for."),
                    "",
                    self.back_route(),
                ) {
                    app.go(route);
                }
                return;
            }
        };

        if ui.link("← Back to Directory").clicked() {
            app.go(Route::Directory);
        }
        ui.add_space(8.0);

        egui::ScrollArea::vertical().id_salt("company_scroll").show(ui, |ui| {
            header(ui, &detail);

            if let Some(desc) = &detail.description {
                ui.add_space(12.0);
                panels::card(ui, |ui| {
                    ui.heading("About");
                    ui.label(desc);
                });
            }

            let sections: Vec<&Section> = detail.sections.iter().filter(|s| !s.is_empty()).collect();
            if !sections.is_empty() {
                ui.add_space(12.0);
                ui.columns(sections.len(), |cols| {
                    for (col, section) in cols.iter_mut().zip(&sections) {
                        panels::card(col, |ui| section_grid(ui, section));
                    }
                });
            }

            if detail.has_people() {
                ui.add_space(12.0);
                panels::card(ui, |ui| people(ui, &detail));
            }

            if !detail.social.is_empty() {
                ui.add_space(12.0);
                panels::card(ui, |ui| {
                    ui.heading("Connect");
                    ui.horizontal(|ui| {
                        if let Some(url) = &detail.social.linkedin {
                            ui.hyperlink_to("LinkedIn", url);
                        }
                        if let Some(url) = &detail.social.twitter {
                            ui.hyperlink_to("Twitter", url);
                        }
                    });
                });
            }
        });
    }
}

fn header(ui: &mut egui::Ui, d: &CompanyDetail) {
    ui.label(RichText::new(&d.name).size(28.0).strong());
    ui.horizontal(|ui| {
        if let Some(industry) = &d.industry {
            ui.label(RichText::new(industry).weak());
        }
        if let Some(ticker) = &d.ticker {
            ui.label(RichText::new(ticker).monospace());
        }
        match &d.website {
            Some(url) => { ui.hyperlink_to(d.website_label(), url); }
            None => { ui.label(format::NA); }
        }
    });
}

fn section_grid(ui: &mut egui::Ui, section: &Section) {
    ui.heading(section.title());
    egui::Grid::new(section.title()).num_columns(2).spacing([12.0, 4.0]).show(ui, |ui| {
        for (label, value) in &section.fields {
            ui.label(RichText::new(*label).weak());
            ui.label(value);
            ui.end_row();
        }
    });
}

fn people(ui: &mut egui::Ui, d: &CompanyDetail) {
    ui.heading("People");

    if !d.founders.is_empty() {
        ui.label(RichText::new(COL_FOUNDERS).strong());
        for f in &d.founders {
            ui.horizontal(|ui| {
                ui.label(format::or_na(f.name.as_deref()));
                match &f.linkedin {
                    Some(url) => { ui.hyperlink_to("LinkedIn", url); }
                    None => { ui.label(RichText::new(format::NO_LINKEDIN).weak()); }
                }
            });
        }
    } else if let Some(text) = &d.founders_text {
        ui.label(RichText::new(COL_FOUNDERS).strong());
        linked_text(ui, text);
    }

    if let Some(contacts) = &d.key_contacts {
        ui.add_space(6.0);
        ui.label(RichText::new(COL_KEY_CONTACTS).strong());
        linked_text(ui, contacts);
    }
}

/// Free text with LinkedIn profile URLs turned into links.
fn linked_text(ui: &mut egui::Ui, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for seg in extract::segments(text) {
            match seg {
                Segment::Text(t) => { ui.label(t); }
                Segment::Profile(url) => { ui.hyperlink_to(url, url); }
            }
        }
    });
}
