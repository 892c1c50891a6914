use crate::config::{MissingSheetPolicy, MissingValue, SheetSource, SheetUnpackerConfig};
use crate::error::PipelineError;
use crate::extract::ExcelWorkbook;
use crate::extract::error::ExtractionError;
use crate::transform::SheetRecords;
use crate::unpack::{Document, SheetDocument, Unpacker, UnpackerKind};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Unpacks every worksheet of a set of workbooks into
/// `{sheet_name: {row_index: {column: value}}}`.
#[derive(Debug)]
pub struct SheetUnpacker {
    input_dir: PathBuf,
    sources: Vec<SheetSource>,
    excluded_sheets: Vec<String>,
    missing_excluded_sheet: MissingSheetPolicy,
    missing_value: MissingValue,
}

impl SheetUnpacker {
    pub fn new(input_dir: impl Into<PathBuf>, sources: Vec<SheetSource>) -> Self {
        SheetUnpacker {
            input_dir: input_dir.into(),
            sources,
            excluded_sheets: vec![],
            missing_excluded_sheet: MissingSheetPolicy::default(),
            missing_value: MissingValue::default(),
        }
    }

    pub fn with_excluded_sheets(
        mut self,
        excluded_sheets: Vec<String>,
        missing_excluded_sheet: MissingSheetPolicy,
    ) -> Self {
        self.excluded_sheets = excluded_sheets;
        self.missing_excluded_sheet = missing_excluded_sheet;
        self
    }

    pub fn with_missing_value(mut self, missing_value: MissingValue) -> Self {
        self.missing_value = missing_value;
        self
    }

    /// Worksheet names to unpack, in workbook order, without the excluded ones.
    fn select_sheets(&self, workbook: &ExcelWorkbook) -> Result<Vec<String>, ExtractionError> {
        let sheet_names = workbook.sheet_names();

        for excluded in &self.excluded_sheets {
            if sheet_names.contains(excluded) {
                continue;
            }
            match self.missing_excluded_sheet {
                MissingSheetPolicy::Error => {
                    return Err(ExtractionError::MissingSheet {
                        sheet: excluded.clone(),
                        path: workbook.path().to_path_buf(),
                    });
                }
                MissingSheetPolicy::Ignore => warn!(
                    "Excluded sheet {excluded} is not part of {}. Nothing to exclude.",
                    workbook.path().display()
                ),
            }
        }

        Ok(sheet_names
            .into_iter()
            .filter(|name| !self.excluded_sheets.contains(name))
            .collect())
    }
}

impl From<SheetUnpackerConfig> for SheetUnpacker {
    fn from(config: SheetUnpackerConfig) -> Self {
        SheetUnpacker {
            input_dir: config.input_dir,
            sources: config.sources,
            excluded_sheets: config.excluded_sheets,
            missing_excluded_sheet: config.missing_excluded_sheet,
            missing_value: config.missing_value,
        }
    }
}

impl Unpacker for SheetUnpacker {
    fn kind(&self) -> UnpackerKind {
        UnpackerKind::Sheet
    }

    fn unpack(&self) -> Result<Document, PipelineError> {
        let mut document = SheetDocument::default();

        for source in &self.sources {
            let mut workbook = ExcelWorkbook::open(&self.input_dir.join(&source.file_name))?;

            for sheet_name in self.select_sheets(&workbook)? {
                let rows = workbook.read_rows(&sheet_name, 0)?;
                let records = SheetRecords::from_rows(&rows, &self.missing_value);
                debug!("Unpacked {} rows from {sheet_name}", records.len());
                document.insert_sheet(&sheet_name, records)?;
            }

            info!(
                "Unpacked {} ({} sheets so far)",
                source.file_name.display(),
                document.len()
            );
        }

        Ok(Document::Sheets(document))
    }
}
