use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::csv::WriterBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::errors::GenerationError;
use crate::table::{CellValue, Table};
use crate::writers::{write_atomic, SheetWriter};

/// Flat CSV with `group|field` headers; missing cells become nulls
#[derive(Debug, Clone, Default)]
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }

    /// All columns as nullable UTF-8, index first when present.
    pub fn to_record_batch(&self, table: &Table) -> Result<RecordBatch, GenerationError> {
        let mut fields = Vec::with_capacity(table.num_columns() + 1);
        let mut arrays: Vec<ArrayRef> = Vec::with_capacity(table.num_columns() + 1);

        if let Some(index) = table.index() {
            fields.push(Field::new(index.name.as_str(), DataType::Utf8, true));
            arrays.push(string_array(index.values.iter()));
        }
        for (c, key) in table.columns().iter().enumerate() {
            fields.push(Field::new(key.to_string(), DataType::Utf8, true));
            arrays.push(string_array(table.column_values(c)));
        }

        Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?)
    }

    pub fn to_bytes(&self, table: &Table) -> Result<Vec<u8>, GenerationError> {
        let batch = self.to_record_batch(table)?;
        let mut writer = WriterBuilder::new().with_header(true).build(Vec::new());
        writer.write(&batch)?;
        Ok(writer.into_inner())
    }
}

impl SheetWriter for CsvWriter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write(&self, table: &Table, path: &Path) -> Result<(), GenerationError> {
        let bytes = self.to_bytes(table)?;
        write_atomic(path, &bytes)
    }
}

fn string_array<'a>(values: impl Iterator<Item = &'a CellValue>) -> ArrayRef {
    Arc::new(values.map(CellValue::render).collect::<StringArray>())
}
