use rand::Rng;

use crate::category::{random_value, Channel, Metric};
use crate::errors::GenerationError;
use crate::noise::{NoiseProfile, WrongTypeTarget, DEFAULT_DIVISOR};
use crate::params::WideParams;
use crate::results::Generated;
use crate::shapes::apply_noise;
use crate::table::{CellValue, ColumnKey, Table};
use crate::utils::date_series::{random_base_date, weekly_series};

const BASE_DATE_WINDOW: u64 = 100;
pub const INDEX_NAME: &str = "Date";

fn pair_key(channel: Channel, metric: Metric) -> ColumnKey {
    ColumnKey::grouped(channel.label(), metric.label())
}

/// Date indexed table with (channel, metric) columns.
pub fn generate_wide<R: Rng + ?Sized>(
    params: &WideParams,
    rng: &mut R,
) -> Result<Generated, GenerationError> {
    if params.num_dates == 0 {
        return Err(GenerationError::invalid("wide table needs at least one date"));
    }
    params.noise.validate()?;

    let pairs: Vec<(Channel, Metric)> = Channel::ALL
        .into_iter()
        .flat_map(|c| Metric::ALL.into_iter().map(move |m| (c, m)))
        .collect();

    let base = random_base_date(BASE_DATE_WINDOW, rng);
    let dates = weekly_series(base, params.num_dates);

    let mut table = Table::new(pairs.iter().map(|&(c, m)| pair_key(c, m)).collect());
    for _ in &dates {
        let row = pairs
            .iter()
            .map(|&(_, m)| CellValue::Integer(random_value(m, rng)))
            .collect();
        table.push_row(row)?;
    }
    table.set_index(INDEX_NAME, dates.into_iter().map(CellValue::Date).collect())?;

    let targets: Vec<WrongTypeTarget> = params
        .wrong_type_cells
        .iter()
        .map(|&(c, m)| WrongTypeTarget::new(pair_key(c, m), NoiseProfile::NumericLike))
        .collect();
    let summary = apply_noise(&mut table, &params.noise, &targets, DEFAULT_DIVISOR, rng)?;

    Ok(Generated { table, summary })
}
