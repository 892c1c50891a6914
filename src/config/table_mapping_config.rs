use crate::config::MissingValue;
use crate::config::spec_unpacker_config::default_create_dir;
use crate::constants::{
    DARS_NIC_PATTERN, DARS_NIC_PLACEHOLDER, DISPLAY_NAME_LABEL_COLUMN, TABLE_COLUMN,
    TABLE_MAPPING_HEADER_ROW,
};
use crate::validation::config_validation::validate_unique_columns;
use crate::validation::validation_utils::validate_regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct TableMappingConfig {
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    pub file_name: PathBuf,
    #[validate(length(min = 1))]
    pub sheet_name: String,
    /// Zero based row holding the column headers. Rows above it are skipped.
    #[serde(default = "default_header_row")]
    pub header_row: usize,
    #[serde(default = "default_columns")]
    #[validate(
        length(min = 1, message = "At least one column must be retained."),
        custom(function = "validate_unique_columns")
    )]
    pub columns: Vec<String>,
    #[serde(default = "default_identifier_pattern")]
    #[validate(custom(function = "validate_regex"))]
    pub identifier_pattern: String,
    #[serde(default = "default_identifier_placeholder")]
    pub identifier_placeholder: String,
    #[serde(default)]
    pub missing_value: MissingValue,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
    #[serde(default = "default_create_dir")]
    pub create_dir: bool,
}

impl TableMappingConfig {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        file_name: impl Into<PathBuf>,
        sheet_name: impl Into<String>,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            file_name: file_name.into(),
            sheet_name: sheet_name.into(),
            header_row: default_header_row(),
            columns: default_columns(),
            identifier_pattern: default_identifier_pattern(),
            identifier_placeholder: default_identifier_placeholder(),
            missing_value: MissingValue::default(),
            output_dir: default_output_dir(),
            output_prefix: default_output_prefix(),
            create_dir: default_create_dir(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// The document is named after the processed sheet, e.g. `table_mapping_Mapping.json`.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.json", self.output_prefix, self.sheet_name))
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("excels_to_unpack")
}

fn default_header_row() -> usize {
    TABLE_MAPPING_HEADER_ROW
}

fn default_columns() -> Vec<String> {
    vec![
        TABLE_COLUMN.to_string(),
        DISPLAY_NAME_LABEL_COLUMN.to_string(),
    ]
}

fn default_identifier_pattern() -> String {
    DARS_NIC_PATTERN.to_string()
}

fn default_identifier_placeholder() -> String {
    DARS_NIC_PLACEHOLDER.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_prefix() -> String {
    "table_mapping".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_output_path_is_named_after_sheet() {
        let config = TableMappingConfig::new("excels", "mapping.xlsx", "dars_tables")
            .with_output_dir("out");
        assert_eq!(
            config.output_path(),
            PathBuf::from("out/table_mapping_dars_tables.json")
        );
    }

    #[rstest]
    fn test_defaults() {
        let config = TableMappingConfig::new("excels", "mapping.xlsx", "dars_tables");
        assert_eq!(config.header_row, 2);
        assert_eq!(config.columns, vec!["table", "display_name_label"]);
        assert!(config.validate().is_ok());
    }

    #[rstest]
    fn test_validate_rejects_invalid_pattern() {
        let mut config = TableMappingConfig::new("excels", "mapping.xlsx", "dars_tables");
        config.identifier_pattern = "_dars_nic_(".to_string();
        assert!(config.validate().is_err());
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec!["table".to_string(), "table".to_string()])]
    fn test_validate_rejects_bad_columns(#[case] columns: Vec<String>) {
        let config =
            TableMappingConfig::new("excels", "mapping.xlsx", "dars_tables").with_columns(columns);
        assert!(config.validate().is_err());
    }
}
