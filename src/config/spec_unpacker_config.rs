use crate::constants::{DEFAULT_TYPE_SUBSTITUTIONS, FIELDS_HEADER_ROW, FIELDS_SHEET};
use crate::validation::config_validation::{validate_unique_table_names, validate_type_substitutions};
use ordermap::OrderMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// One DARS product specification workbook and the DAE table it describes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct SpecSource {
    /// Workbook file name, resolved against `input_dir`.
    pub file_name: PathBuf,
    /// Name of the table in DAE. Used as the top level key of the output.
    #[validate(length(min = 1))]
    pub dae_table_name: String,
}

impl SpecSource {
    pub fn new(file_name: impl Into<PathBuf>, dae_table_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            dae_table_name: dae_table_name.into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct SpecUnpackerConfig {
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    #[validate(
        length(min = 1, message = "At least one DARS specification must be configured."),
        nested,
        custom(function = "validate_unique_table_names")
    )]
    pub specs: Vec<SpecSource>,
    #[serde(default = "default_sheet_name")]
    #[validate(length(min = 1))]
    pub sheet_name: String,
    /// Zero based row holding the column headers. Rows above it are skipped.
    #[serde(default = "default_header_row")]
    pub header_row: usize,
    /// Raw (lower-cased) DARS type label to spark type label.
    #[serde(default = "default_type_substitutions")]
    #[validate(custom(function = "validate_type_substitutions"))]
    pub type_substitutions: OrderMap<String, String>,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_create_dir")]
    pub create_dir: bool,
}

impl SpecUnpackerConfig {
    pub fn new(input_dir: impl Into<PathBuf>, specs: Vec<SpecSource>) -> Self {
        Self {
            input_dir: input_dir.into(),
            specs,
            sheet_name: default_sheet_name(),
            header_row: default_header_row(),
            type_substitutions: default_type_substitutions(),
            output_path: default_output_path(),
            create_dir: default_create_dir(),
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("dars_spec_excels")
}

fn default_sheet_name() -> String {
    FIELDS_SHEET.to_string()
}

fn default_header_row() -> usize {
    FIELDS_HEADER_ROW
}

pub(crate) fn default_type_substitutions() -> OrderMap<String, String> {
    DEFAULT_TYPE_SUBSTITUTIONS
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("dars_spec.json")
}

pub(crate) fn default_create_dir() -> bool {
    true
}
