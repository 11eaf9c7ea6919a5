use datasynth_core::GenerationReport;

use crate::{
    utils::numbers::{format_numbers, percentage},
    Reporter,
};

pub struct StdOutFormatter {
    intro: String,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        Self {
            intro: format!("datasynth v{} - Synthetic Dataset Generator", version),
        }
    }

    pub fn print_intro(&self, total: usize, seed: u64) {
        println!("{}", self.intro);
        println!("{}", "=".repeat(self.intro.len()));
        println!("Generating {} dataset(s), seed {}", total, seed);
    }

    pub fn print_run_result(&self, result: &GenerationReport) {
        if !result.is_passed() {
            println!(
                "Failed: {} ({})",
                result.path,
                result.error_message.as_deref().unwrap_or("unknown error")
            );
            return;
        }
        let cells = result.total_rows * result.total_columns;
        println!(
            "Saved: {} [{}] {} rows x {} cols, {} empty ({:.1}%), {} wrong-typed",
            result.path,
            result.shape,
            format_numbers(result.total_rows),
            result.total_columns,
            format_numbers(result.empty_cells),
            percentage(result.empty_cells, cells),
            result.wrong_typed,
        );
    }

    pub fn print_summary(&self, written: usize, failed: usize) {
        println!("\n===================================");
        println!("Result: {} written, {} failed", written, failed);
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self, total: usize, seed: u64) {
        self.print_intro(total, seed);
    }

    fn on_run_result(&mut self, result: &GenerationReport) {
        self.print_run_result(result);
    }

    fn on_summary(&self, written: usize, failed: usize) {
        self.print_summary(written, failed);
    }
}
