// src/gui/pages/landing.rs
//
// Static marketing page. No data, no load.

use eframe::egui::{self, Color32, RichText};

use crate::gui::{app::App, components::panels};
use crate::routing::Route;

use super::Page;

pub struct LandingPage;
pub static PAGE: LandingPage = LandingPage;

const ACCENT: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);

const STATS: &[(&str, &str)] = &[
    ("Average Growth", "+127%"),
    ("Companies Tracked", "500+"),
    ("Success Rate", "84%"),
    ("Daily Updates", "24/7"),
];

const FEATURES: &[(&str, &str)] = &[
    ("Market Analytics", "Real-time valuation tracking and market sector analysis"),
    ("Growth Scoring", "Proprietary AI-driven growth potential scoring system"),
    ("Risk Assessment", "Comprehensive risk level evaluation and monitoring"),
];

const DATA_POINTS: &[(&str, &str)] = &[
    ("Valuation Tracking", "Under $50M"),
    ("Stock Exchange", "Multi-Exchange"),
    ("Growth Score", "AI-Powered"),
    ("Risk Level", "Real-time"),
];

impl Page for LandingPage {
    fn title(&self) -> &'static str { "Home" }
    fn nav_route(&self) -> Option<Route> { Some(Route::Landing) }
    fn needs_data(&self) -> bool { false }

    fn show(&self, ui: &mut egui::Ui, app: &mut App) {
        egui::ScrollArea::vertical().id_salt("landing_scroll").show(ui, |ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("Real-time market intelligence").color(ACCENT).small());
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("Discover the Next").size(36.0).strong());
                ui.label(RichText::new("Small Cap Gems").size(36.0).strong().color(ACCENT));
            });
            ui.label(
                "AI-powered analysis of companies under $50M valuation. \
                 Get ahead of the market with data-driven insights.",
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let explore = egui::Button::new(RichText::new("Explore Companies").strong().color(Color32::BLACK))
                    .fill(ACCENT);
                if ui.add(explore).clicked() {
                    app.go(Route::Directory);
                }
            });

            ui.add_space(24.0);
            ui.columns(STATS.len(), |cols| {
                for (col, (label, value)) in cols.iter_mut().zip(STATS) {
                    panels::card(col, |ui| {
                        ui.label(RichText::new(*label).weak());
                        ui.label(RichText::new(*value).size(26.0).strong().color(ACCENT));
                    });
                }
            });

            ui.add_space(24.0);
            ui.heading("Why smallcap.ai");
            ui.columns(FEATURES.len(), |cols| {
                for (col, (title, text)) in cols.iter_mut().zip(FEATURES) {
                    panels::card(col, |ui| {
                        ui.label(RichText::new(*title).strong());
                        ui.label(*text);
                    });
                }
            });

            ui.add_space(24.0);
            ui.heading("Comprehensive Data Points");
            ui.columns(DATA_POINTS.len(), |cols| {
                for (col, (title, value)) in cols.iter_mut().zip(DATA_POINTS) {
                    panels::card(col, |ui| {
                        ui.label(RichText::new(*title).weak());
                        ui.label(RichText::new(*value).strong().color(ACCENT));
                    });
                }
            });
        });
    }
}
