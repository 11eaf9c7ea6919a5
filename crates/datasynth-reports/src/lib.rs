pub mod formatters;
pub mod utils;

use datasynth_core::GenerationReport;
pub use formatters::{json::JsonFormatter, stdout::StdOutFormatter};

pub trait Reporter {
    fn on_start(&self, total: usize, seed: u64);
    fn on_run_result(&mut self, result: &GenerationReport);
    fn on_summary(&self, written: usize, failed: usize);
}
