use crate::extract::error::ExtractionError;
use crate::extract::utils::ensure_named_columns;
use calamine::Data;

/// The rows below the header of a worksheet, with every cell kept as read.
///
/// Unlike a `DataFrame` column, a column here can hold text, numbers and booleans
/// side by side. Empty text and Excel error cells are stored as `Data::Empty`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRows {
    columns: Vec<String>,
    rows: Vec<Vec<Data>>,
}

impl SheetRows {
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Vec<Data>>) -> Self {
        SheetRows { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Data>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keeps the requested columns in the order they appear in the worksheet.
    pub fn select(&self, sheet_name: &str, columns: &[&str]) -> Result<SheetRows, ExtractionError> {
        let present: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        ensure_named_columns(&present, sheet_name, columns)?;

        let kept: Vec<usize> = present
            .iter()
            .enumerate()
            .filter(|(_, name)| columns.contains(name))
            .map(|(index, _)| index)
            .collect();

        Ok(SheetRows {
            columns: kept.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| {
                    kept.iter()
                        .map(|&i| row.get(i).cloned().unwrap_or(Data::Empty))
                        .collect()
                })
                .collect(),
        })
    }
}
