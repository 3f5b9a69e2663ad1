// src/progress.rs
/// Lightweight progress reporting for a harvest run.
/// Frontends implement this to narrate what is happening; every hook is optional.
pub trait Progress {
    /// Called once the index is read, with the number of categories to harvest.
    fn begin(&mut self, _categories: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A listing page was fetched and parsed.
    fn page_done(&mut self, _page: u32, _rows: usize) {}

    /// One category is finished (or abandoned) with `codes` records.
    fn category_done(&mut self, _prefix: &str, _url: &str, _codes: usize) {}

    /// Called at the end of a successful harvest with the total record count.
    fn finish(&mut self, _total: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
