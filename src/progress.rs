// src/progress.rs
/// Status reporting for a scrape. Frontends (GUI/CLI) implement this to
/// surface what is happening.
pub trait Progress {
    /// Called once before the fetch.
    fn begin(&mut self, _url: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end with the number of instances found, if the scrape succeeded.
    fn finish(&mut self, _found: Option<usize>) {}
}
