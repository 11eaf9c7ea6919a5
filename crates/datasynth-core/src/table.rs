use std::fmt;

use chrono::NaiveDate;

use crate::errors::GenerationError;

/// A single cell of a generated table
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Date(NaiveDate),
    Text(String),
    Integer(i64),
    Empty,
    /// Deliberately wrong-typed string written by the noise injector
    Malformed(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) | CellValue::Malformed(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Text rendering used by flat output formats. `None` for missing cells.
    pub fn render(&self) -> Option<String> {
        match self {
            CellValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            CellValue::Text(s) | CellValue::Malformed(s) => Some(s.clone()),
            CellValue::Integer(v) => Some(v.to_string()),
            CellValue::Empty => None,
        }
    }
}

/// Column identifier, flat or two-level
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Simple(String),
    Grouped { group: String, field: String },
    /// Blank separator between side-by-side sub tables
    Spacer,
}

impl ColumnKey {
    pub fn simple(name: impl Into<String>) -> Self {
        ColumnKey::Simple(name.into())
    }

    pub fn grouped(group: impl Into<String>, field: impl Into<String>) -> Self {
        ColumnKey::Grouped {
            group: group.into(),
            field: field.into(),
        }
    }

    pub fn group(&self) -> Option<&str> {
        match self {
            ColumnKey::Grouped { group, .. } => Some(group.as_str()),
            _ => None,
        }
    }

    /// Lowest header level: the name, the field, or blank for a spacer
    pub fn field(&self) -> &str {
        match self {
            ColumnKey::Simple(name) => name.as_str(),
            ColumnKey::Grouped { field, .. } => field.as_str(),
            ColumnKey::Spacer => "",
        }
    }

    pub fn is_hierarchical(&self) -> bool {
        !matches!(self, ColumnKey::Simple(_))
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKey::Simple(name) => f.write_str(name),
            ColumnKey::Grouped { group, field } => write!(f, "{}|{}", group, field),
            ColumnKey::Spacer => Ok(()),
        }
    }
}

/// Named leading column keying each row (wide shape dates)
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub name: String,
    pub values: Vec<CellValue>,
}

/// In-memory, row-major table
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<ColumnKey>,
    rows: Vec<Vec<CellValue>>,
    index: Option<Index>,
}

impl Table {
    pub fn new(columns: Vec<ColumnKey>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            index: None,
        }
    }

    pub fn columns(&self) -> &[ColumnKey] {
        self.columns.as_slice()
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        self.rows.as_slice()
    }

    pub fn index(&self) -> Option<&Index> {
        self.index.as_ref()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of data cells, index excluded
    pub fn size(&self) -> usize {
        self.num_rows() * self.num_columns()
    }

    pub fn has_hierarchical_columns(&self) -> bool {
        self.columns.iter().any(ColumnKey::is_hierarchical)
    }

    pub fn column_position(&self, key: &ColumnKey) -> Option<usize> {
        self.columns.iter().position(|c| c == key)
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<(), GenerationError> {
        if row.len() != self.columns.len() {
            return Err(GenerationError::invalid(format!(
                "row has {} cells, table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Attach an index column. Its length must match the row count.
    pub fn set_index(
        &mut self,
        name: impl Into<String>,
        values: Vec<CellValue>,
    ) -> Result<(), GenerationError> {
        if values.len() != self.rows.len() {
            return Err(GenerationError::invalid(format!(
                "index has {} values, table has {} rows",
                values.len(),
                self.rows.len()
            )));
        }
        self.index = Some(Index {
            name: name.into(),
            values,
        });
        Ok(())
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: CellValue,
    ) -> Result<(), GenerationError> {
        let n_rows = self.rows.len();
        let n_cols = self.columns.len();
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or_else(|| {
                GenerationError::invalid(format!(
                    "cell ({}, {}) outside a {}x{} table",
                    row, col, n_rows, n_cols
                ))
            })?;
        *cell = value;
        Ok(())
    }

    pub fn column_values(&self, col: usize) -> impl Iterator<Item = &CellValue> {
        self.rows.iter().filter_map(move |r| r.get(col))
    }

    pub fn count_empty(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_empty()).count()
    }

    /// Rebuild from a row selection, e.g. after resampling
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: indices
                .iter()
                .filter_map(|&i| self.rows.get(i).cloned())
                .collect(),
            index: None,
        }
    }

    /// Move every column under a top-level group label.
    /// Existing groups are replaced; spacers stay as they are.
    pub fn regroup(&mut self, group: &str) {
        for key in self.columns.iter_mut() {
            let field = match key {
                ColumnKey::Simple(name) => std::mem::take(name),
                ColumnKey::Grouped { field, .. } => std::mem::take(field),
                ColumnKey::Spacer => continue,
            };
            *key = ColumnKey::grouped(group, field);
        }
    }

    /// Append a spacer column holding empty strings.
    pub fn push_spacer(&mut self) {
        self.columns.push(ColumnKey::Spacer);
        for row in self.rows.iter_mut() {
            row.push(CellValue::Text(String::new()));
        }
    }

    /// Side by side concatenation on a shared row axis.
    ///
    /// Tables shorter than the tallest one are padded with `Empty` cells.
    pub fn hconcat(tables: Vec<Table>) -> Table {
        let n_rows = tables.iter().map(Table::num_rows).max().unwrap_or(0);
        let mut columns = Vec::new();
        let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); n_rows];

        for table in tables {
            let width = table.num_columns();
            columns.extend(table.columns);
            let mut source = table.rows.into_iter();
            for row in rows.iter_mut() {
                match source.next() {
                    Some(cells) => row.extend(cells),
                    None => row.extend(std::iter::repeat_n(CellValue::Empty, width)),
                }
            }
        }

        Table {
            columns,
            rows,
            index: None,
        }
    }
}
