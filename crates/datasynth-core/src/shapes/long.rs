use rand::Rng;

use crate::category::{random_value, Channel, Metric};
use crate::errors::GenerationError;
use crate::noise::{WrongTypeTarget, DEFAULT_DIVISOR};
use crate::params::{LongColumn, LongParams};
use crate::results::Generated;
use crate::shapes::apply_noise;
use crate::table::{CellValue, Table};
use crate::utils::date_series::{random_base_date, weekly_series};

/// Base dates are drawn within a year of the reference date
const BASE_DATE_WINDOW: u64 = 365;
/// Rows produced per date: channels x metrics
const ROWS_PER_DATE: usize = Channel::ALL.len() * Metric::ALL.len();

/// One row per (date, channel, metric), resampled to exactly `num_rows` rows.
pub fn generate_long<R: Rng + ?Sized>(
    params: &LongParams,
    rng: &mut R,
) -> Result<Generated, GenerationError> {
    if params.num_rows < ROWS_PER_DATE {
        return Err(GenerationError::invalid(format!(
            "long table needs at least {} rows to hold one date, got {}",
            ROWS_PER_DATE, params.num_rows
        )));
    }
    params.noise.validate()?;

    let base = random_base_date(BASE_DATE_WINDOW, rng);
    let dates = weekly_series(base, params.num_rows / ROWS_PER_DATE);

    let mut clean = Table::new(LongColumn::ALL.iter().map(|c| c.key()).collect());
    for date in dates {
        for channel in Channel::ALL {
            for metric in Metric::ALL {
                clean.push_row(vec![
                    CellValue::Date(date),
                    CellValue::Text(channel.label().to_string()),
                    CellValue::Text(metric.label().to_string()),
                    CellValue::Integer(random_value(metric, rng)),
                ])?;
            }
        }
    }

    let mut table = resample(&clean, params.num_rows, rng);

    let targets: Vec<WrongTypeTarget> = params
        .wrong_type_cols
        .iter()
        .map(|c| WrongTypeTarget::new(c.key(), c.noise_profile()))
        .collect();
    let summary = apply_noise(&mut table, &params.noise, &targets, DEFAULT_DIVISOR, rng)?;

    Ok(Generated { table, summary })
}

/// Replicate the table until it covers `n` rows, then draw `n` of the
/// copies without replacement.
fn resample<R: Rng + ?Sized>(table: &Table, n: usize, rng: &mut R) -> Table {
    let len = table.num_rows();
    let pool = if len < n { len * (n / len + 1) } else { len };
    let picks: Vec<usize> = rand::seq::index::sample(rng, pool, n)
        .into_iter()
        .map(|i| i % len)
        .collect();
    table.select_rows(&picks)
}
