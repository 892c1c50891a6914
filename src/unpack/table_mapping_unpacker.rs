use crate::config::{MissingValue, TableMappingConfig};
use crate::constants::TABLE_COLUMN;
use crate::error::PipelineError;
use crate::extract::error::ExtractionError;
use crate::extract::{ExcelWorkbook, SheetRows};
use crate::transform::records::rows_to_records;
use crate::transform::{Record, TableIdentifierNormaliser};
use crate::unpack::{Document, TableMappingDocument, Unpacker, UnpackerKind};
use log::info;
use std::path::PathBuf;

/// Unpacks one worksheet of a table mapping workbook into a list of records, keeping only
/// the requested columns and replacing the DARS NIC code in table names with a placeholder.
#[derive(Debug)]
pub struct TableMappingUnpacker {
    source: PathBuf,
    sheet_name: String,
    header_row: usize,
    columns: Vec<String>,
    normaliser: TableIdentifierNormaliser,
    missing_value: MissingValue,
}

impl TableMappingUnpacker {
    pub fn new(
        source: impl Into<PathBuf>,
        sheet_name: impl Into<String>,
        header_row: usize,
        columns: Vec<String>,
        normaliser: TableIdentifierNormaliser,
    ) -> Self {
        TableMappingUnpacker {
            source: source.into(),
            sheet_name: sheet_name.into(),
            header_row,
            columns,
            normaliser,
            missing_value: MissingValue::default(),
        }
    }

    pub fn with_missing_value(mut self, missing_value: MissingValue) -> Self {
        self.missing_value = missing_value;
        self
    }

    /// Keeps the requested columns in the order they appear in the worksheet.
    fn project(&self, rows: &SheetRows) -> Result<SheetRows, ExtractionError> {
        let required: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        rows.select(&self.sheet_name, &required)
    }

    fn normalise_table(&self, mut record: Record) -> Record {
        if let Some(table) = record.get_mut(TABLE_COLUMN) {
            *table = self.normaliser.normalise_value(table.take());
        }
        record
    }
}

impl TryFrom<TableMappingConfig> for TableMappingUnpacker {
    type Error = regex::Error;

    fn try_from(config: TableMappingConfig) -> Result<Self, Self::Error> {
        let normaliser = TableIdentifierNormaliser::new(
            &config.identifier_pattern,
            config.identifier_placeholder,
        )?;
        Ok(TableMappingUnpacker::new(
            config.input_dir.join(config.file_name),
            config.sheet_name,
            config.header_row,
            config.columns,
            normaliser,
        )
        .with_missing_value(config.missing_value))
    }
}

impl Unpacker for TableMappingUnpacker {
    fn kind(&self) -> UnpackerKind {
        UnpackerKind::TableMapping
    }

    fn unpack(&self) -> Result<Document, PipelineError> {
        let mut workbook = ExcelWorkbook::open(&self.source)?;
        let rows = workbook.read_rows(&self.sheet_name, self.header_row)?;
        let projected = self.project(&rows)?;

        let records: Vec<Record> = rows_to_records(&projected, &self.missing_value)
            .into_iter()
            .map(|record| self.normalise_table(record))
            .collect();

        info!(
            "Unpacked {} table mappings from {}",
            records.len(),
            self.sheet_name
        );
        Ok(Document::TableMapping(TableMappingDocument::from(records)))
    }
}
