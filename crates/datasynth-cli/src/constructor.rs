use std::path::PathBuf;

use anyhow::{Context, Result};
use datasynth_core::{
    CampaignParams, Channel, LongColumn, LongParams, Metric, NoiseParams, OutputFormat, Shape,
    ShapeParams, WideParams,
};
use rand::{seq::IndexedRandom, Rng};

use crate::{errors::ConfigError, parser::Config, parser::Ranges, Args};

pub const DEFAULT_OUTPUT_FOLDER: &str = "long_first";
pub const DEFAULT_COUNT: usize = 20;

/// Fully resolved run configuration: flags override the config file,
/// which overrides the defaults.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub count: usize,
    pub shape: Shape,
    pub output_folder: PathBuf,
    pub format: OutputFormat,
    pub seed: Option<u64>,
    pub parallel: bool,
    pub ranges: ValidRanges,
}

/// [`Ranges`] after validation, wrong type columns parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRanges {
    pub rows: (usize, usize),
    pub empty_frac: (f64, f64),
    pub dates: (usize, usize),
    pub campaigns: (usize, usize),
    pub campaign_dates: (usize, usize),
    pub wrong_type_cols: Vec<LongColumn>,
}

impl RunSettings {
    pub fn resolve(args: &Args, config: Config) -> Result<Self> {
        let run = config.run;
        let count = args.count.or(run.count).unwrap_or(DEFAULT_COUNT);
        if count == 0 {
            return Err(ConfigError::NoRun.into());
        }

        let shape = match (args.shape, run.shape) {
            (Some(shape), _) => shape.into(),
            (None, Some(label)) => label
                .parse::<Shape>()
                .with_context(|| format!("Invalid shape in config: '{}'", label))?,
            (None, None) => Shape::Long,
        };
        let format = match (args.format, run.format) {
            (Some(format), _) => format.into(),
            (None, Some(label)) => label
                .parse::<OutputFormat>()
                .with_context(|| format!("Invalid format in config: '{}'", label))?,
            (None, None) => OutputFormat::Xlsx,
        };
        let output_folder = args
            .output_dir
            .clone()
            .or(run.output_folder)
            .unwrap_or_else(|| DEFAULT_OUTPUT_FOLDER.to_string());

        Ok(Self {
            count,
            shape,
            output_folder: PathBuf::from(output_folder),
            format,
            seed: args.seed.or(run.seed),
            parallel: args.parallel || run.parallel.unwrap_or(false),
            ranges: validate_ranges(&config.ranges)?,
        })
    }
}

fn check_range(name: &str, (min, max): (usize, usize), minimum: usize) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange {
            name: name.to_string(),
            min: min as f64,
            max: max as f64,
        });
    }
    if min < minimum {
        return Err(ConfigError::RangeTooLow {
            name: name.to_string(),
            minimum: minimum as f64,
            min: min as f64,
        });
    }
    Ok(())
}

pub fn validate_ranges(ranges: &Ranges) -> Result<ValidRanges, ConfigError> {
    // a long table needs four rows for its first date
    check_range("rows", ranges.rows, 4)?;
    check_range("dates", ranges.dates, 1)?;
    check_range("campaigns", ranges.campaigns, 1)?;
    check_range("campaign_dates", ranges.campaign_dates, 1)?;

    let (min, max) = ranges.empty_frac;
    if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) {
        return Err(ConfigError::FractionOutOfBounds { min, max });
    }
    if min > max {
        return Err(ConfigError::InvertedRange {
            name: "empty_frac".to_string(),
            min,
            max,
        });
    }

    let wrong_type_cols = ranges
        .wrong_type_cols
        .iter()
        .map(|c| {
            c.parse::<LongColumn>()
                .map_err(|_| ConfigError::UnknownColumn { column: c.clone() })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidRanges {
        rows: ranges.rows,
        empty_frac: ranges.empty_frac,
        dates: ranges.dates,
        campaigns: ranges.campaigns,
        campaign_dates: ranges.campaign_dates,
        wrong_type_cols,
    })
}

fn draw_noise<R: Rng + ?Sized>(ranges: &ValidRanges, rng: &mut R) -> NoiseParams {
    let (lo, hi) = ranges.empty_frac;
    let frac = rng.random_range(lo..=hi);
    NoiseParams {
        add_empty_cells: rng.random_bool(0.5),
        empty_frac: (frac * 100.0).round() / 100.0,
        change_types: rng.random_bool(0.5),
    }
}

/// Random subset, of random size, of `candidates`
fn draw_subset<T: Copy, R: Rng + ?Sized>(candidates: &[T], rng: &mut R) -> Vec<T> {
    let k = rng.random_range(0..=candidates.len());
    candidates.choose_multiple(rng, k).copied().collect()
}

/// Draw one run's parameter set from the configured ranges.
pub fn draw_params<R: Rng + ?Sized>(shape: Shape, ranges: &ValidRanges, rng: &mut R) -> ShapeParams {
    match shape {
        Shape::Long => ShapeParams::Long(LongParams {
            num_rows: rng.random_range(ranges.rows.0..=ranges.rows.1),
            noise: draw_noise(ranges, rng),
            wrong_type_cols: draw_subset(&ranges.wrong_type_cols, rng),
        }),
        Shape::Wide => {
            let pairs: Vec<(Channel, Metric)> = Channel::ALL
                .into_iter()
                .flat_map(|c| Metric::ALL.into_iter().map(move |m| (c, m)))
                .collect();
            ShapeParams::Wide(WideParams {
                num_dates: rng.random_range(ranges.dates.0..=ranges.dates.1),
                noise: draw_noise(ranges, rng),
                wrong_type_cells: draw_subset(&pairs, rng),
            })
        }
        Shape::Campaign => ShapeParams::Campaign(CampaignParams {
            num_campaigns: rng.random_range(ranges.campaigns.0..=ranges.campaigns.1),
            num_dates: rng.random_range(ranges.campaign_dates.0..=ranges.campaign_dates.1),
            noise: draw_noise(ranges, rng),
        }),
    }
}
