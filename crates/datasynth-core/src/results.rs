use crate::table::Table;

/// What the noise injector did to a table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseSummary {
    /// Empty cell picks, duplicates included
    pub empty_picks: usize,
    pub wrong_typed: usize,
}

impl NoiseSummary {
    pub fn merge(&mut self, other: &NoiseSummary) {
        self.empty_picks += other.empty_picks;
        self.wrong_typed += other.wrong_typed;
    }
}

/// A noised table ready to be persisted
#[derive(Debug, Clone)]
pub struct Generated {
    pub table: Table,
    pub summary: NoiseSummary,
}

/// Outcome of one generate-and-write run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub run: usize,
    pub shape: String,
    pub path: String,
    pub total_rows: usize,
    pub total_columns: usize,
    pub empty_cells: usize,
    pub wrong_typed: usize,
    passed: bool,
    pub error_message: Option<String>,
}

impl GenerationReport {
    pub fn new(run: usize, shape: String, path: String) -> Self {
        Self {
            run,
            shape,
            path,
            total_rows: 0,
            total_columns: 0,
            empty_cells: 0,
            wrong_typed: 0,
            passed: true,
            error_message: None,
        }
    }

    /// Record the persisted table's shape and noise
    pub fn record(&mut self, generated: &Generated) {
        self.total_rows = generated.table.num_rows();
        self.total_columns = generated.table.num_columns();
        self.empty_cells = generated.table.count_empty();
        self.wrong_typed = generated.summary.wrong_typed;
    }

    pub fn set_failed(&mut self, message: String) {
        self.passed = false;
        self.error_message = Some(message);
    }

    pub fn is_passed(&self) -> bool {
        self.passed
    }
}
