use crate::config::MissingValue;
use crate::extract::SheetRows;
use crate::transform::cell_value::cell_to_json;
use ordermap::OrderMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// One worksheet row: column name to cell value, in column order.
pub type Record = OrderMap<String, Value>;

/// Converts every row into a `Record`, replacing missing cells with the sentinel.
///
/// Cells are converted one by one, so a column mixing text, numbers and booleans
/// keeps each value as it is in the worksheet.
pub fn rows_to_records(rows: &SheetRows, missing_value: &MissingValue) -> Vec<Record> {
    rows.rows()
        .iter()
        .map(|row| {
            rows.columns()
                .iter()
                .enumerate()
                .map(|(col_index, column)| {
                    let value = row
                        .get(col_index)
                        .map(|cell| cell_to_json(cell, missing_value))
                        .unwrap_or_else(|| missing_value.sentinel());
                    (column.clone(), value)
                })
                .collect()
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexedRecord {
    /// Zero based position of the row below the header.
    pub index: usize,
    pub fields: Record,
}

/// The rows of one worksheet, in worksheet order, each carrying its row index.
///
/// Serialises to an object keyed by row index, which DAE turns back into a table with
/// `pd.DataFrame.from_dict(unpacked["sheet"], orient="index")`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRecords(Vec<IndexedRecord>);

impl SheetRecords {
    pub fn from_rows(rows: &SheetRows, missing_value: &MissingValue) -> Self {
        let records = rows_to_records(rows, missing_value)
            .into_iter()
            .enumerate()
            .map(|(index, fields)| IndexedRecord { index, fields })
            .collect();
        SheetRecords(records)
    }

    pub fn records(&self) -> &[IndexedRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<IndexedRecord>> for SheetRecords {
    fn from(records: Vec<IndexedRecord>) -> Self {
        SheetRecords(records)
    }
}

impl Serialize for SheetRecords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for record in &self.0 {
            map.serialize_entry(&record.index, &record.fields)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use serde_json::json;

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[fixture]
    fn dictionary_rows() -> SheetRows {
        SheetRows::new(
            vec![
                "display_name".to_string(),
                "variable_type".to_string(),
                "units".to_string(),
            ],
            vec![
                vec![text("DEATH_DATE"), text("Date"), Data::Empty],
                vec![text("AGE"), text("Numerical"), text("years")],
                vec![text("SEX"), text("Categorical"), Data::Empty],
            ],
        )
    }

    #[rstest]
    fn test_rows_to_records_keeps_column_order(dictionary_rows: SheetRows) {
        let records = rows_to_records(&dictionary_rows, &MissingValue::Absent);
        assert_eq!(records.len(), 3);
        let keys: Vec<&String> = records[1].keys().collect();
        assert_eq!(keys, ["display_name", "variable_type", "units"]);
        assert_eq!(records[1]["units"], json!("years"));
    }

    #[rstest]
    fn test_mixed_column_keeps_each_cell_type() {
        let rows = SheetRows::new(
            vec!["display_name".to_string(), "values".to_string()],
            vec![
                vec![text("SEX"), text("1 = Male")],
                vec![text("AGE"), Data::Float(5.0)],
                vec![text("BMI"), Data::Float(24.5)],
                vec![text("FLAG"), Data::Bool(true)],
            ],
        );

        let values: Vec<Value> = rows_to_records(&rows, &MissingValue::Absent)
            .into_iter()
            .map(|record| record["values"].clone())
            .collect();
        assert_eq!(values, [json!("1 = Male"), json!(5), json!(24.5), json!(true)]);
    }

    #[rstest]
    fn test_only_missing_cells_are_replaced(dictionary_rows: SheetRows) {
        let missing_value = MissingValue::Placeholder("None".to_string());
        let records = SheetRecords::from_rows(&dictionary_rows, &missing_value);

        for (record, original_units) in records.records().iter().zip([None, Some("years"), None]) {
            let expected = original_units.unwrap_or("None");
            assert_eq!(record.fields["units"], json!(expected));
        }
        assert_eq!(records.records()[2].fields["display_name"], json!("SEX"));
        assert_eq!(records.records()[2].fields["variable_type"], json!("Categorical"));
    }

    #[rstest]
    fn test_sheet_records_serialise_keyed_by_index(dictionary_rows: SheetRows) {
        let records = SheetRecords::from_rows(&dictionary_rows, &MissingValue::Absent);
        let value = serde_json::to_value(&records).unwrap();

        assert_eq!(
            value,
            json!({
                "0": {"display_name": "DEATH_DATE", "variable_type": "Date", "units": null},
                "1": {"display_name": "AGE", "variable_type": "Numerical", "units": "years"},
                "2": {"display_name": "SEX", "variable_type": "Categorical", "units": null},
            })
        );
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["0", "1", "2"]);
    }

    #[rstest]
    fn test_empty_sheet_serialises_to_empty_object() {
        let records = SheetRecords::from_rows(&SheetRows::default(), &MissingValue::Absent);
        assert!(records.is_empty());
        assert_eq!(serde_json::to_value(&records).unwrap(), json!({}));
    }
}
