use rand::{seq::IndexedRandom, Rng};
use tracing::debug;

use crate::errors::GenerationError;
use crate::table::{CellValue, ColumnKey, Table};

/// Divisor for long and wide shapes: `max(1, rows / 8)` rows per target
pub const DEFAULT_DIVISOR: usize = 8;
/// Divisor for campaign sub tables
pub const CAMPAIGN_DIVISOR: usize = 6;

/// Kind of data a column semantically holds, deciding which
/// substitute strings the wrong-type injector may write into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseProfile {
    NumericLike,
    DateLike,
    CategoricalLike,
}

impl NoiseProfile {
    pub fn vocabulary(self) -> &'static [&'static str] {
        match self {
            NoiseProfile::NumericLike => &["one hundred", "ten", "NaN"],
            NoiseProfile::DateLike => &["not a date", "yesterday", "soon"],
            NoiseProfile::CategoricalLike => &["low", "missing", "unknown"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongTypeTarget {
    pub column: ColumnKey,
    pub profile: NoiseProfile,
}

impl WrongTypeTarget {
    pub fn new(column: ColumnKey, profile: NoiseProfile) -> Self {
        Self { column, profile }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

pub fn check_fraction(frac: f64) -> Result<(), GenerationError> {
    if !frac.is_finite() || !(0.0..=1.0).contains(&frac) {
        return Err(GenerationError::invalid(format!(
            "empty cell fraction must lie in [0, 1], got {}",
            frac
        )));
    }
    Ok(())
}

/// Blank out `floor(size * frac)` uniformly picked cells.
///
/// Picks are drawn with replacement so the realized number of empty cells
/// can be lower than the returned pick count.
pub fn inject_empty_cells<R: Rng + ?Sized>(
    table: &mut Table,
    frac: f64,
    rng: &mut R,
) -> Result<usize, GenerationError> {
    check_fraction(frac)?;
    let (n_rows, n_cols) = (table.num_rows(), table.num_columns());
    if n_rows == 0 || n_cols == 0 {
        return Ok(0);
    }

    let num_empty = (table.size() as f64 * frac).floor() as usize;
    for _ in 0..num_empty {
        let row = rng.random_range(0..n_rows);
        let col = rng.random_range(0..n_cols);
        table.set_cell(row, col, CellValue::Empty)?;
    }
    debug!(picks = num_empty, rows = n_rows, cols = n_cols, "injected empty cells");
    Ok(num_empty)
}

/// Overwrite `max(1, rows / divisor)` distinct rows of each target column
/// with a string from the target's vocabulary.
///
/// An empty target list leaves the table untouched.
pub fn inject_wrong_types<R: Rng + ?Sized>(
    table: &mut Table,
    targets: &[WrongTypeTarget],
    divisor: usize,
    rng: &mut R,
) -> Result<Vec<CellPos>, GenerationError> {
    if divisor == 0 {
        return Err(GenerationError::invalid("wrong type divisor must be positive"));
    }
    let n_rows = table.num_rows();
    let mut touched = Vec::new();
    if n_rows == 0 {
        return Ok(touched);
    }

    let amount = (n_rows / divisor).max(1);
    for target in targets {
        let col = table.column_position(&target.column).ok_or_else(|| {
            GenerationError::invalid(format!(
                "wrong type target column '{}' not in table",
                target.column
            ))
        })?;
        let vocabulary = target.profile.vocabulary();
        for row in rand::seq::index::sample(rng, n_rows, amount).into_iter() {
            // vocabularies are never empty
            let replacement = vocabulary.choose(rng).copied().unwrap_or_default();
            table.set_cell(row, col, CellValue::Malformed(replacement.to_string()))?;
            touched.push(CellPos { row, col });
        }
        debug!(column = %target.column, rows = amount, "injected wrong types");
    }
    Ok(touched)
}
