// src/gui/router.rs
use crate::routing::Route;
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::landing::PAGE,
    &pages::directory::PAGE,
    &pages::company::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(route: &Route) -> &'static dyn Page {
    match route {
        Route::Landing    => &pages::landing::PAGE,
        Route::Directory  => &pages::directory::PAGE,
        Route::Company(_) => &pages::company::PAGE,
    }
}
