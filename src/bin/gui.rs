// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use log::LevelFilter;
use smallcap_dir::{
    config::consts::{WINDOW_H, WINDOW_W},
    gui,
    log::{self as logging, LogTarget},
    routing::Route,
};

fn main() {
    logging::init(LogTarget::default_file(), LevelFilter::Info);

    // Optional start path, e.g. `smallcap /companies` or `smallcap /Acme%20Corp`
    let initial = std::env::args().nth(1).map(|p| Route::parse(&p)).unwrap_or(Route::Landing);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("smallcap.ai")
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, initial) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
