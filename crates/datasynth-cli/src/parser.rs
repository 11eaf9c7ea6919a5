use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub run: RunSection,
    #[serde(default)]
    pub ranges: Ranges,
}

/// Every field can be overridden from the command line
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    pub count: Option<usize>,
    pub shape: Option<String>,
    pub output_folder: Option<String>,
    pub format: Option<String>,
    pub seed: Option<u64>,
    pub parallel: Option<bool>,
}

/// Inclusive ranges the driver draws per-run parameters from
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Ranges {
    pub rows: (usize, usize),
    pub empty_frac: (f64, f64),
    pub dates: (usize, usize),
    pub campaigns: (usize, usize),
    pub campaign_dates: (usize, usize),
    pub wrong_type_cols: Vec<String>,
}

impl Default for Ranges {
    fn default() -> Self {
        Self {
            rows: (12, 50),
            empty_frac: (0.05, 0.3),
            dates: (3, 12),
            campaigns: (1, 4),
            campaign_dates: (2, 8),
            wrong_type_cols: vec!["Value".to_string(), "Date".to_string()],
        }
    }
}

pub fn parse_config(path: &Path) -> Result<Config> {
    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(config_str.as_str())
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}
