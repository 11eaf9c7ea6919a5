use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;

use crate::errors::GenerationError;

/// Media channel a value was booked on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Tv,
    Radio,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Tv, Channel::Radio];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Tv => "TV",
            Channel::Radio => "Radio",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Channel {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| GenerationError::UnknownCategory {
                kind: "channel",
                label: s.to_string(),
            })
    }
}

/// Measured quantity, each with its own valid value range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Spend,
    Grps,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Spend, Metric::Grps];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Spend => "Spend",
            Metric::Grps => "GRPs",
        }
    }

    /// Inclusive range clean values are drawn from
    pub fn range(self) -> RangeInclusive<i64> {
        match self {
            Metric::Spend => 50..=200,
            Metric::Grps => 1..=10,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or_else(|| GenerationError::UnknownCategory {
                kind: "metric",
                label: s.to_string(),
            })
    }
}

/// Draw a uniform value from the metric's declared range.
pub fn random_value<R: Rng + ?Sized>(metric: Metric, rng: &mut R) -> i64 {
    rng.random_range(metric.range())
}

/// Same as [`random_value`], keyed on a metric label.
pub fn random_value_for_label<R: Rng + ?Sized>(
    label: &str,
    rng: &mut R,
) -> Result<i64, GenerationError> {
    let metric: Metric = label.parse()?;
    Ok(random_value(metric, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_spend_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let v = random_value(Metric::Spend, &mut rng);
            assert!((50..=200).contains(&v));
        }
    }

    #[test]
    fn test_grps_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let v = random_value(Metric::Grps, &mut rng);
            assert!((1..=10).contains(&v));
        }
    }

    #[test]
    fn test_label_round_trip() {
        for m in Metric::ALL {
            assert_eq!(m.label().parse::<Metric>().unwrap(), m);
        }
        for c in Channel::ALL {
            assert_eq!(c.label().parse::<Channel>().unwrap(), c);
        }
    }

    #[test]
    fn test_unknown_metric_label() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = random_value_for_label("Reach", &mut rng).unwrap_err();
        match err {
            GenerationError::UnknownCategory { kind, label } => {
                assert_eq!(kind, "metric");
                assert_eq!(label, "Reach");
            }
            _ => panic!("Expected UnknownCategory error"),
        }
    }

    #[test]
    fn test_unknown_channel_label() {
        assert!("Print".parse::<Channel>().is_err());
        // labels are case sensitive
        assert!("tv".parse::<Channel>().is_err());
    }
}
