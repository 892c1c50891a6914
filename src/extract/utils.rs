use crate::extract::error::ExtractionError;
use polars::frame::DataFrame;
use std::collections::HashMap;

pub(crate) fn unnamed_column_name(column_index: usize) -> String {
    format!("Unnamed: {column_index}")
}

/// Repeated headers get a numeric suffix, so `a, a, a` becomes `a, a.1, a.2`.
pub(crate) fn deduplicate_column_names(names: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    names
        .into_iter()
        .map(|name| {
            let count = seen.entry(name.clone()).or_insert(0);
            let unique = if *count == 0 {
                name
            } else {
                format!("{name}.{count}")
            };
            *count += 1;
            unique
        })
        .collect()
}

pub(crate) fn ensure_columns(
    df: &DataFrame,
    sheet_name: &str,
    required: &[&str],
) -> Result<(), ExtractionError> {
    let present: Vec<&str> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    ensure_named_columns(&present, sheet_name, required)
}

pub(crate) fn ensure_named_columns(
    present: &[&str],
    sheet_name: &str,
    required: &[&str],
) -> Result<(), ExtractionError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !present.contains(column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ExtractionError::MissingColumns {
            sheet: sheet_name.to_string(),
            columns: missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use rstest::rstest;

    #[rstest]
    fn test_deduplicate_column_names() {
        let names = vec![
            "table".to_string(),
            "notes".to_string(),
            "notes".to_string(),
            "notes".to_string(),
        ];
        assert_eq!(
            deduplicate_column_names(names),
            vec!["table", "notes", "notes.1", "notes.2"]
        );
    }

    #[rstest]
    fn test_ensure_columns() {
        let df = df!("table" => ["deaths"], "display_name_label" => ["Deaths"]).unwrap();
        assert!(ensure_columns(&df, "Mapping", &["table"]).is_ok());

        let err = ensure_columns(&df, "Mapping", &["table", "path", "units"]).unwrap_err();
        match err {
            ExtractionError::MissingColumns { sheet, columns } => {
                assert_eq!(sheet, "Mapping");
                assert_eq!(columns, vec!["path", "units"]);
            }
            other => panic!("Unexpected error {other}"),
        }
    }
}
