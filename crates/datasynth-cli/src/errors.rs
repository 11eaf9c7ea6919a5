use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Range '{name}' is inverted: min {min} > max {max}")]
    InvertedRange { name: String, min: f64, max: f64 },
    #[error("Range '{name}' must start at {minimum} or more, got {min}")]
    RangeTooLow { name: String, minimum: f64, min: f64 },
    #[error("Empty cell fraction range must stay within [0, 1], got [{min}, {max}]")]
    FractionOutOfBounds { min: f64, max: f64 },
    #[error("Unknown wrong type column '{column}'. Supported: Date, Channel, Metric, Value")]
    UnknownColumn { column: String },
    #[error("Run count must be at least 1")]
    NoRun,
}
