use chrono::Local;
use datasynth_core::GenerationReport;
use serde::{Deserialize, Serialize};
use serde_json::Error;

use crate::Reporter;

#[derive(Serialize, Deserialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    seed: Option<u64>,
    runs: Vec<RunFormatter>,
}

#[derive(Serialize, Deserialize)]
struct RunFormatter {
    run: usize,
    shape: String,
    path: String,
    n_rows: usize,
    n_columns: usize,
    empty_cells: usize,
    wrong_typed: usize,
    written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            seed: None,
            runs: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self, _total: usize, _seed: u64) {}

    fn on_run_result(&mut self, result: &GenerationReport) {
        self.runs.push(RunFormatter {
            run: result.run,
            shape: result.shape.clone(),
            path: result.path.clone(),
            n_rows: result.total_rows,
            n_columns: result.total_columns,
            empty_cells: result.empty_cells,
            wrong_typed: result.wrong_typed,
            written: result.is_passed(),
            error: result.error_message.clone(),
        });
    }

    fn on_summary(&self, _written: usize, _failed: usize) {
        match self.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize report: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_runs() {
        let mut formatter = JsonFormatter::new("0.1.0".to_string()).with_seed(42);
        let mut ok = GenerationReport::new(1, "long".into(), "out/synthetic_dataset_1.xlsx".into());
        ok.total_rows = 16;
        ok.total_columns = 4;
        let mut failed = GenerationReport::new(2, "wide".into(), "out/synthetic_dataset_2.xlsx".into());
        failed.set_failed("permission denied".into());

        formatter.on_run_result(&ok);
        formatter.on_run_result(&failed);

        let json: Value = serde_json::from_str(&formatter.to_json().unwrap()).unwrap();
        assert_eq!(json["seed"], 42);
        assert_eq!(json["runs"].as_array().unwrap().len(), 2);
        assert_eq!(json["runs"][0]["n_rows"], 16);
        assert_eq!(json["runs"][0]["written"], true);
        assert!(json["runs"][0].get("error").is_none());
        assert_eq!(json["runs"][1]["error"], "permission denied");
    }
}
