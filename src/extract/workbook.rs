use crate::extract::{ExcelRangeReader, SheetRows};
use crate::extract::error::ExtractionError;
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use log::{debug, info};
use polars::frame::DataFrame;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// An opened spreadsheet workbook (xlsx, xlsm, xlsb, xls or ods).
pub struct ExcelWorkbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl ExcelWorkbook {
    pub fn open(path: &Path) -> Result<Self, ExtractionError> {
        info!("Attempting to extract Excel data from: {}", path.display());
        let sheets =
            open_workbook_auto(path).map_err(|source| ExtractionError::UnreadableWorkbook {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(ExcelWorkbook {
            path: path.to_path_buf(),
            sheets,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    pub fn has_sheet(&self, sheet_name: &str) -> bool {
        self.sheet_names().iter().any(|name| name == sheet_name)
    }

    fn range(&mut self, sheet_name: &str) -> Result<Range<Data>, ExtractionError> {
        if !self.has_sheet(sheet_name) {
            return Err(ExtractionError::MissingSheet {
                sheet: sheet_name.to_string(),
                path: self.path.clone(),
            });
        }
        Ok(self.sheets.worksheet_range(sheet_name)?)
    }

    pub fn read_sheet(
        &mut self,
        sheet_name: &str,
        header_row: usize,
    ) -> Result<DataFrame, ExtractionError> {
        let range = self.range(sheet_name)?;
        let df = ExcelRangeReader::new(range, sheet_name, header_row).extract_to_df()?;

        debug!(
            "Extracted {} rows from Excel Worksheet {} in Excel Workbook {}",
            df.height(),
            sheet_name,
            self.path.display()
        );
        Ok(df)
    }

    /// Like `read_sheet`, but keeps every cell as it is in the worksheet.
    pub fn read_rows(
        &mut self,
        sheet_name: &str,
        header_row: usize,
    ) -> Result<SheetRows, ExtractionError> {
        let range = self.range(sheet_name)?;
        let rows = ExcelRangeReader::new(range, sheet_name, header_row).extract_to_rows()?;

        debug!(
            "Extracted {} rows from Excel Worksheet {} in Excel Workbook {}",
            rows.len(),
            sheet_name,
            self.path.display()
        );
        Ok(rows)
    }
}
