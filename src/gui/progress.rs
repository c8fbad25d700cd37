// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;

/// Worker-side progress: writes the shared status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, _url: &str) {
        self.set_status("Fetching companies…");
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn fetched(&mut self, bytes: usize) {
        self.set_status(format!("Received {} KB, parsing…", bytes.div_ceil(1024)));
    }
    fn parsed(&mut self, rows: usize, _columns: usize) {
        self.set_status(format!("Loaded {rows} companies"));
    }
    fn finish(&mut self) {
        self.ctx.request_repaint();
    }
}
