// src/gui/pages/mod.rs
use eframe::egui;

use super::app::App;
use crate::routing::Route;

pub mod company;
pub mod directory;
pub mod landing;

pub trait Page: Send + Sync + 'static {
    /// Tab label in the nav bar
    fn title(&self) -> &'static str;

    /// Route of the page's nav tab. Detail pages have none; they are reached
    /// from the list.
    fn nav_route(&self) -> Option<Route> { None }

    /// Where the error panel's link leads. `None` draws no link: a failed
    /// load is final for the visit.
    fn back_route(&self) -> Option<Route> { None }

    /// Pages that read sheet data get a fresh load on every visit.
    fn needs_data(&self) -> bool { true }

    /// Draw the page body into the central panel.
    fn show(&self, ui: &mut egui::Ui, app: &mut App);
}
