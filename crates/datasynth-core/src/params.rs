use std::str::FromStr;

use crate::category::{Channel, Metric};
use crate::errors::GenerationError;
use crate::noise::{check_fraction, NoiseProfile};
use crate::table::ColumnKey;

/// Noise toggles shared by every shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    pub add_empty_cells: bool,
    pub empty_frac: f64,
    pub change_types: bool,
}

impl NoiseParams {
    /// No noise at all
    pub fn clean() -> Self {
        Self {
            add_empty_cells: false,
            empty_frac: 0.0,
            change_types: false,
        }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.add_empty_cells {
            check_fraction(self.empty_frac)?;
        }
        Ok(())
    }
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            add_empty_cells: true,
            empty_frac: 0.1,
            change_types: true,
        }
    }
}

/// Columns of the long shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LongColumn {
    Date,
    Channel,
    Metric,
    Value,
}

impl LongColumn {
    pub const ALL: [LongColumn; 4] = [
        LongColumn::Date,
        LongColumn::Channel,
        LongColumn::Metric,
        LongColumn::Value,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LongColumn::Date => "Date",
            LongColumn::Channel => "Channel",
            LongColumn::Metric => "Metric",
            LongColumn::Value => "Value",
        }
    }

    pub fn key(self) -> ColumnKey {
        ColumnKey::simple(self.label())
    }

    pub fn noise_profile(self) -> NoiseProfile {
        match self {
            LongColumn::Date => NoiseProfile::DateLike,
            LongColumn::Value => NoiseProfile::NumericLike,
            LongColumn::Channel | LongColumn::Metric => NoiseProfile::CategoricalLike,
        }
    }
}

impl FromStr for LongColumn {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LongColumn::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| GenerationError::UnknownCategory {
                kind: "column",
                label: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LongParams {
    pub num_rows: usize,
    pub noise: NoiseParams,
    pub wrong_type_cols: Vec<LongColumn>,
}

impl Default for LongParams {
    fn default() -> Self {
        Self {
            num_rows: 16,
            noise: NoiseParams::default(),
            wrong_type_cols: vec![LongColumn::Value],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WideParams {
    pub num_dates: usize,
    pub noise: NoiseParams,
    pub wrong_type_cells: Vec<(Channel, Metric)>,
}

impl Default for WideParams {
    fn default() -> Self {
        Self {
            num_dates: 8,
            noise: NoiseParams::default(),
            wrong_type_cells: vec![(Channel::Tv, Metric::Spend)],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignParams {
    pub num_campaigns: usize,
    pub num_dates: usize,
    pub noise: NoiseParams,
}

impl Default for CampaignParams {
    fn default() -> Self {
        Self {
            num_campaigns: 3,
            num_dates: 4,
            noise: NoiseParams::default(),
        }
    }
}
