// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{options::SourceKind, state::AppState},
    load::{LoadState, Loader},
    routing::Route,
    sources,
};

use super::{components, pages::Page, progress::GuiProgress, router};

pub fn run(options: eframe::NativeOptions, initial: Route) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "smallcap.ai",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc.egui_ctx.clone(), AppState::default(), initial)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // where we are
    pub route: Route,

    // data for the current page visit
    pub loader: Loader,

    // status line (loader worker writes here)
    pub status: Arc<Mutex<String>>,

    // navigation requested while drawing; applied at the end of the frame
    pending: Option<Route>,

    egui_ctx: egui::Context,
}

impl App {
    pub fn new(egui_ctx: egui::Context, state: AppState, initial: Route) -> Self {
        let status = Arc::new(Mutex::new(s!("Idle")));
        let mut app = Self {
            state,
            route: Route::Landing,
            loader: Loader::new(Arc::clone(&status)),
            status,
            pending: None,
            egui_ctx,
        };
        logf!("Init: source={:?} route={}", app.state.options.source.kind, initial.path());
        app.navigate(initial);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_for(&self.route) }

    #[inline]
    pub fn load_state(&self) -> &LoadState { self.loader.state() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Ask for a page change. Takes effect after the current frame is drawn.
    pub fn go(&mut self, route: Route) {
        self.pending = Some(route);
    }

    /// Switch pages now. Pages that show sheet data get a fresh load.
    pub fn navigate(&mut self, route: Route) {
        logf!("UI: Navigate {} → {}", self.route.path(), route.path());
        self.route = route;
        if self.current_page().needs_data() {
            self.start_load();
        } else {
            self.status("Idle");
        }
    }

    /// Kick off a fetch for the current visit.
    pub fn start_load(&mut self) {
        let ctx = self.egui_ctx.clone();
        self.status("Fetching companies…");
        let opts = self.state.options.source.clone();
        self.loader.start(
            move |status| GuiProgress::new(status, ctx),
            move |progress| sources::load(&opts, Some(progress)),
        );
    }

    /// Change the sheet export and reload the current page if it uses data.
    pub fn set_source(&mut self, kind: SourceKind) {
        if self.state.options.source.kind == kind {
            return;
        }
        logf!("UI: Source → {:?}", kind);
        self.state.options.source.kind = kind;
        if self.current_page().needs_data() {
            self.start_load();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.loader.poll() {
            match self.loader.state() {
                LoadState::Failed(reason) => {
                    loge!("UI: Load failed: {}", reason);
                    self.status("Failed to fetch data");
                }
                LoadState::Ready(dir) => {
                    self.status(format!("Loaded {} companies", dir.row_count()));
                }
                LoadState::Loading => {}
            }
        }
        if self.loader.state().is_loading() && self.current_page().needs_data() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            components::nav_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            page.show(ui, self);
        });

        if let Some(route) = self.pending.take() {
            self.navigate(route);
        }
    }
}
