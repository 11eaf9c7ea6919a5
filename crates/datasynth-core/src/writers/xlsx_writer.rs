use std::path::Path;

use chrono::Datelike;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet};

use crate::errors::GenerationError;
use crate::table::{CellValue, ColumnKey, Table};
use crate::writers::{write_atomic, SheetWriter};

const DATE_FORMAT: &str = "yyyy-mm-dd";

/// One sheet per table, stacked headers for grouped columns
#[derive(Debug, Clone, Default)]
pub struct XlsxWriter;

impl XlsxWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the table into an in-memory workbook.
    pub fn to_bytes(&self, table: &Table) -> Result<Vec<u8>, GenerationError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header = Format::new().set_bold();
        let date = Format::new().set_num_format(DATE_FORMAT);

        let header_rows: u32 = if table.has_hierarchical_columns() { 2 } else { 1 };
        let offset = usize::from(table.index().is_some());

        if let Some(index) = table.index() {
            worksheet.write_string_with_format(header_rows - 1, 0, &index.name, &header)?;
            for (r, value) in index.values.iter().enumerate() {
                write_cell(worksheet, header_rows + to_row(r)?, 0, value, &date)?;
            }
        }

        if header_rows == 2 {
            write_group_row(worksheet, table.columns(), offset, &header)?;
        }
        for (c, key) in table.columns().iter().enumerate() {
            let col = to_col(c + offset)?;
            if !key.field().is_empty() {
                worksheet.write_string_with_format(header_rows - 1, col, key.field(), &header)?;
            }
        }

        for (r, row) in table.rows().iter().enumerate() {
            let xl_row = header_rows + to_row(r)?;
            for (c, value) in row.iter().enumerate() {
                write_cell(worksheet, xl_row, to_col(c + offset)?, value, &date)?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

impl SheetWriter for XlsxWriter {
    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn write(&self, table: &Table, path: &Path) -> Result<(), GenerationError> {
        let bytes = self.to_bytes(table)?;
        write_atomic(path, &bytes)
    }
}

/// Top header row: each run of columns sharing a group gets one merged label.
fn write_group_row(
    worksheet: &mut Worksheet,
    columns: &[ColumnKey],
    offset: usize,
    format: &Format,
) -> Result<(), GenerationError> {
    let mut start = 0;
    while start < columns.len() {
        let Some(group) = columns[start].group() else {
            start += 1;
            continue;
        };
        let mut end = start;
        while end + 1 < columns.len() && columns[end + 1].group() == Some(group) {
            end += 1;
        }
        let (first, last) = (to_col(start + offset)?, to_col(end + offset)?);
        if first == last {
            worksheet.write_string_with_format(0, first, group, format)?;
        } else {
            worksheet.merge_range(0, first, 0, last, group, format)?;
        }
        start = end + 1;
    }
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    date_format: &Format,
) -> Result<(), GenerationError> {
    match value {
        CellValue::Date(d) => {
            let datetime = ExcelDateTime::from_ymd(d.year() as u16, d.month() as u8, d.day() as u8)?;
            worksheet.write_datetime_with_format(row, col, &datetime, date_format)?;
        }
        CellValue::Integer(v) => {
            worksheet.write_number(row, col, *v as f64)?;
        }
        // spacer cells: Excel has no empty string cells, leave them blank
        CellValue::Text(s) if s.is_empty() => {}
        CellValue::Text(s) | CellValue::Malformed(s) => {
            worksheet.write_string(row, col, s)?;
        }
        CellValue::Empty => {}
    }
    Ok(())
}

fn to_row(r: usize) -> Result<u32, GenerationError> {
    u32::try_from(r).map_err(|_| GenerationError::invalid(format!("row {} exceeds sheet limits", r)))
}

fn to_col(c: usize) -> Result<u16, GenerationError> {
    u16::try_from(c)
        .map_err(|_| GenerationError::invalid(format!("column {} exceeds sheet limits", c)))
}
