use rand::Rng;

use crate::category::{random_value, Channel, Metric};
use crate::errors::GenerationError;
use crate::noise::{NoiseProfile, WrongTypeTarget, CAMPAIGN_DIVISOR};
use crate::params::CampaignParams;
use crate::results::{Generated, NoiseSummary};
use crate::shapes::apply_noise;
use crate::table::{CellValue, ColumnKey, Table};
use crate::utils::date_series::{format_dmy, random_base_date, weekly_series};
use crate::utils::letters::sequence_letters;

const BASE_DATE_WINDOW: u64 = 100;

pub fn campaign_label(index: usize) -> String {
    format!("Campaign {}", sequence_letters(index))
}

/// Flat, clean sub table: Date, Metric, TV, Radio with one row per
/// (date, metric).
pub fn build_campaign_table<R: Rng + ?Sized>(
    num_dates: usize,
    rng: &mut R,
) -> Result<Table, GenerationError> {
    if num_dates == 0 {
        return Err(GenerationError::invalid("campaign table needs at least one date"));
    }

    let mut columns = vec![ColumnKey::simple("Date"), ColumnKey::simple("Metric")];
    columns.extend(Channel::ALL.iter().map(|c| ColumnKey::simple(c.label())));
    let mut table = Table::new(columns);

    let base = random_base_date(BASE_DATE_WINDOW, rng);
    for date in weekly_series(base, num_dates) {
        let label = format_dmy(date);
        for metric in Metric::ALL {
            let mut row = vec![
                CellValue::Text(label.clone()),
                CellValue::Text(metric.label().to_string()),
            ];
            row.extend(
                Channel::ALL
                    .iter()
                    .map(|_| CellValue::Integer(random_value(metric, rng))),
            );
            table.push_row(row)?;
        }
    }
    Ok(table)
}

/// Independently noised campaigns, side by side, separated by spacers.
pub fn generate_campaigns<R: Rng + ?Sized>(
    params: &CampaignParams,
    rng: &mut R,
) -> Result<Generated, GenerationError> {
    if params.num_campaigns == 0 {
        return Err(GenerationError::invalid("at least one campaign is required"));
    }
    params.noise.validate()?;

    let targets: Vec<WrongTypeTarget> = Channel::ALL
        .iter()
        .map(|c| WrongTypeTarget::new(ColumnKey::simple(c.label()), NoiseProfile::CategoricalLike))
        .collect();

    let mut parts = Vec::with_capacity(params.num_campaigns);
    let mut summary = NoiseSummary::default();
    for i in 0..params.num_campaigns {
        let mut table = build_campaign_table(params.num_dates, rng)?;
        summary.merge(&apply_noise(
            &mut table,
            &params.noise,
            &targets,
            CAMPAIGN_DIVISOR,
            rng,
        )?);
        table.regroup(&campaign_label(i));
        if i + 1 < params.num_campaigns {
            table.push_spacer();
        }
        parts.push(table);
    }

    Ok(Generated {
        table: Table::hconcat(parts),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_campaign_labels() {
        assert_eq!(campaign_label(0), "Campaign A");
        assert_eq!(campaign_label(2), "Campaign C");
        assert_eq!(campaign_label(26), "Campaign AA");
    }

    #[test]
    fn test_zero_campaigns() {
        let mut rng = StdRng::seed_from_u64(4);
        let params = CampaignParams {
            num_campaigns: 0,
            ..CampaignParams::default()
        };
        assert!(generate_campaigns(&params, &mut rng).is_err());
    }

    #[test]
    fn test_zero_dates() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(build_campaign_table(0, &mut rng).is_err());
    }
}
