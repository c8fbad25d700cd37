// src/progress.rs
/// Lightweight progress reporting for a load (fetch + normalize).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called before the request goes out.
    fn begin(&mut self, _url: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Response body arrived.
    fn fetched(&mut self, _bytes: usize) {}

    /// Normalization produced `rows` records over `columns` labeled columns.
    fn parsed(&mut self, _rows: usize, _columns: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
