use chrono::{Days, NaiveDate};
use rand::Rng;

/// Every generated series starts from this date plus a random offset
pub const REFERENCE_DATE: (i32, u32, u32) = (2025, 7, 10);
pub const STEP_DAYS: u64 = 7;

pub fn reference_date() -> NaiveDate {
    let (y, m, d) = REFERENCE_DATE;
    // 2025-07-10 is a valid calendar date
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Reference date shifted by a uniform offset in `0..max_offset` days
pub fn random_base_date<R: Rng + ?Sized>(max_offset: u64, rng: &mut R) -> NaiveDate {
    let offset = rng.random_range(0..max_offset.max(1));
    reference_date() + Days::new(offset)
}

/// `periods` dates, [`STEP_DAYS`] apart
pub fn weekly_series(start: NaiveDate, periods: usize) -> Vec<NaiveDate> {
    (0..periods as u64)
        .map(|i| start + Days::new(i * STEP_DAYS))
        .collect()
}

/// Zero padded day/month/year
pub fn format_dmy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
