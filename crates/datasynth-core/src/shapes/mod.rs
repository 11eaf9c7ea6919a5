use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::errors::GenerationError;
use crate::noise::{inject_empty_cells, inject_wrong_types, WrongTypeTarget};
use crate::params::{CampaignParams, LongParams, NoiseParams, WideParams};
use crate::results::{Generated, NoiseSummary};
use crate::table::Table;

pub mod campaign;
pub mod long;
pub mod wide;

pub use campaign::{build_campaign_table, generate_campaigns};
pub use long::generate_long;
pub use wide::generate_wide;

/// Layout of a generated dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Long,
    Wide,
    Campaign,
}

impl Shape {
    pub fn label(self) -> &'static str {
        match self {
            Shape::Long => "long",
            Shape::Wide => "wide",
            Shape::Campaign => "campaign",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shape {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(Shape::Long),
            "wide" => Ok(Shape::Wide),
            "campaign" => Ok(Shape::Campaign),
            other => Err(GenerationError::UnknownCategory {
                kind: "shape",
                label: other.to_string(),
            }),
        }
    }
}

/// Parameter set for any of the builders
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeParams {
    Long(LongParams),
    Wide(WideParams),
    Campaign(CampaignParams),
}

impl ShapeParams {
    pub fn shape(&self) -> Shape {
        match self {
            ShapeParams::Long(_) => Shape::Long,
            ShapeParams::Wide(_) => Shape::Wide,
            ShapeParams::Campaign(_) => Shape::Campaign,
        }
    }
}

/// Dispatch to the builder matching the parameter set.
pub fn generate<R: Rng + ?Sized>(
    params: &ShapeParams,
    rng: &mut R,
) -> Result<Generated, GenerationError> {
    match params {
        ShapeParams::Long(p) => generate_long(p, rng),
        ShapeParams::Wide(p) => generate_wide(p, rng),
        ShapeParams::Campaign(p) => generate_campaigns(p, rng),
    }
}

/// Empty cells first, then wrong types, as configured.
pub(crate) fn apply_noise<R: Rng + ?Sized>(
    table: &mut Table,
    noise: &NoiseParams,
    targets: &[WrongTypeTarget],
    divisor: usize,
    rng: &mut R,
) -> Result<NoiseSummary, GenerationError> {
    let mut summary = NoiseSummary::default();
    if noise.add_empty_cells {
        summary.empty_picks = inject_empty_cells(table, noise.empty_frac, rng)?;
    }
    if noise.change_types {
        summary.wrong_typed = inject_wrong_types(table, targets, divisor, rng)?.len();
    }
    Ok(summary)
}
