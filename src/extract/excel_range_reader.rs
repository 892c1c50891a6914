use crate::extract::SheetRows;
use crate::extract::error::ExtractionError;
use crate::extract::utils::{deduplicate_column_names, unnamed_column_name};
use calamine::{Data, Range};
use log::{debug, warn};
use polars::datatypes::AnyValue;
use polars::frame::DataFrame;
use polars::prelude::TimeUnit::Milliseconds;
use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

/// Turns a worksheet range into a `DataFrame`, one column per worksheet column.
///
/// Everything above `header_row` is skipped, the header row names the columns and
/// every row below it becomes a row of the frame. Empty cells and Excel error
/// cells become nulls.
pub struct ExcelRangeReader {
    range: Range<Data>,
    sheet_name: String,
    header_row: usize,
}

impl ExcelRangeReader {
    pub(crate) fn new(range: Range<Data>, sheet_name: impl Into<String>, header_row: usize) -> Self {
        ExcelRangeReader {
            range,
            sheet_name: sheet_name.into(),
            header_row,
        }
    }

    pub fn extract_to_df(self) -> Result<DataFrame, ExtractionError> {
        if self.range.is_empty() {
            debug!("Excel Worksheet {} is empty.", self.sheet_name);
            return Ok(DataFrame::empty());
        }

        let header = self.read_header()?;
        let mut loading_vectors = self.create_loading_vectors();
        self.load_data_to_vectors(&mut loading_vectors)?;
        let columns = self.convert_vectors_to_columns(header, loading_vectors)?;
        let dataframe = DataFrame::new(columns)?;
        Ok(dataframe)
    }

    /// Reads the rows below the header without unifying column types, so every cell
    /// keeps the type it has in the worksheet.
    pub fn extract_to_rows(self) -> Result<SheetRows, ExtractionError> {
        if self.range.is_empty() {
            debug!("Excel Worksheet {} is empty.", self.sheet_name);
            return Ok(SheetRows::default());
        }

        let header = self.read_header()?;
        let rows = self
            .range
            .rows()
            .skip(self.rows_to_skip() + 1)
            .enumerate()
            .map(|(row_index, row)| {
                row.iter()
                    .enumerate()
                    .map(|(col_index, cell)| self.clean_cell(row_index, col_index, cell))
                    .collect()
            })
            .collect();
        Ok(SheetRows::new(header, rows))
    }

    fn clean_cell(&self, row_index: usize, col_index: usize, cell: &Data) -> Data {
        match cell {
            Data::Error(e) => {
                warn!(
                    "An error {e} in Excel Worksheet {} was found at row {row_index}, column {col_index}.",
                    self.sheet_name
                );
                Data::Empty
            }
            Data::String(s) if s.is_empty() => Data::Empty,
            other => other.clone(),
        }
    }

    /// Number of range rows in front of the header. The range starts at the first
    /// used cell, which isn't necessarily the first row of the worksheet.
    fn rows_to_skip(&self) -> usize {
        let start_row = self
            .range
            .start()
            .map(|(row, _)| row as usize)
            .unwrap_or(0);
        self.header_row.saturating_sub(start_row)
    }

    fn first_column(&self) -> usize {
        self.range
            .start()
            .map(|(_, col)| col as usize)
            .unwrap_or(0)
    }

    fn read_header(&self) -> Result<Vec<String>, ExtractionError> {
        let header_cells = self.range.rows().nth(self.rows_to_skip()).ok_or(
            ExtractionError::MissingHeaderRow {
                sheet: self.sheet_name.clone(),
                row: self.header_row,
            },
        )?;

        let first_column = self.first_column();
        let names = header_cells
            .iter()
            .enumerate()
            .map(|(col_index, cell)| match cell {
                Data::String(s) if !s.trim().is_empty() => s.clone(),
                Data::Empty | Data::Error(_) | Data::String(_) => {
                    unnamed_column_name(first_column + col_index)
                }
                other => other.to_string(),
            })
            .collect();

        Ok(deduplicate_column_names(names))
    }

    fn create_loading_vectors(&'_ self) -> Vec<Vec<AnyValue<'_>>> {
        let number_of_rows = self.range.height().saturating_sub(self.rows_to_skip() + 1);
        (0..self.range.width())
            .map(|_| Vec::with_capacity(number_of_rows))
            .collect()
    }

    fn load_data_to_vectors<'a>(
        &'a self,
        loading_vectors: &mut [Vec<AnyValue<'a>>],
    ) -> Result<(), ExtractionError> {
        let sheet_name = self.sheet_name.as_str();
        let data_rows = self.range.rows().skip(self.rows_to_skip() + 1);

        for (row_index, row) in data_rows.enumerate() {
            for (col_index, cell_data) in row.iter().enumerate() {
                let vector_to_load = loading_vectors.get_mut(col_index).ok_or(
                    ExtractionError::ExcelIndexing(col_index, sheet_name.to_string()),
                )?;

                match *cell_data {
                    Data::Empty => vector_to_load.push(AnyValue::Null),
                    Data::Int(ref i) => vector_to_load.push(AnyValue::Int64(*i)),
                    Data::Bool(ref b) => vector_to_load.push(AnyValue::Boolean(*b)),
                    Data::Error(ref e) => {
                        warn!(
                            "An error {e} in Excel Worksheet {sheet_name} was found at row {row_index}, column {col_index}."
                        );
                        vector_to_load.push(AnyValue::Null)
                    }
                    Data::Float(ref f) => vector_to_load.push(AnyValue::Float64(*f)),
                    Data::DateTime(ref d) => {
                        let fallback = || {
                            warn!(
                                "Could not interpret Excel DateTime in worksheet {sheet_name} at row {row_index}, column {col_index}. Entry converted to f64."
                            );
                            AnyValue::Float64(d.as_f64())
                        };

                        let time_val = if d.is_datetime() {
                            if let Some(dt) = d.as_datetime() {
                                AnyValue::Datetime(
                                    dt.and_utc().timestamp_millis(),
                                    Milliseconds,
                                    None,
                                )
                            } else {
                                fallback()
                            }
                        } else if d.is_duration() {
                            if let Some(dur) = d.as_duration() {
                                AnyValue::Duration(dur.num_milliseconds(), Milliseconds)
                            } else {
                                fallback()
                            }
                        } else {
                            fallback()
                        };

                        vector_to_load.push(time_val);
                    }
                    Data::String(ref s) if s.is_empty() => vector_to_load.push(AnyValue::Null),
                    Data::String(ref s) | Data::DateTimeIso(ref s) | Data::DurationIso(ref s) => {
                        vector_to_load.push(AnyValue::String(s))
                    }
                }
            }
        }

        Ok(())
    }

    fn convert_vectors_to_columns(
        &self,
        header: Vec<String>,
        loading_vectors: Vec<Vec<AnyValue>>,
    ) -> Result<Vec<Column>, ExtractionError> {
        header
            .into_iter()
            .zip(loading_vectors.iter())
            .map(|(name, data)| {
                // strict, so a column mixing text with numbers or booleans is not cast by polars
                let series = Series::from_any_values(name.as_str().into(), data, true)
                    .unwrap_or_else(|_| {
                        debug!(
                            "Column {} in Excel Worksheet {} contained multiple data types. These have been turned into strings.",
                            name, self.sheet_name
                        );
                        let stringified_col_data: Vec<Option<String>> =
                            data.iter().map(stringify_any_value).collect();
                        Series::new(name.as_str().into(), stringified_col_data)
                    });

                Ok(series.into_column())
            })
            .collect()
    }
}

fn stringify_any_value(value: &AnyValue) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(s) => Some(s.to_string()),
        // 123 rather than 123.0, as the worksheet shows it
        AnyValue::Float64(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Some((*f as i64).to_string())
        }
        other => Some(other.to_string()),
    }
}
