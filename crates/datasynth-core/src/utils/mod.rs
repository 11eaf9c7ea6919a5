pub mod date_series;
pub mod letters;
