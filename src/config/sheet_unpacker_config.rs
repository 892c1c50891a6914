use crate::config::MissingValue;
use crate::config::spec_unpacker_config::default_create_dir;
use crate::validation::config_validation::validate_unique_sheet_sources;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// What to do when a sheet listed in `excluded_sheets` is not part of a workbook.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingSheetPolicy {
    #[default]
    Error,
    Ignore,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SheetSource {
    pub file_name: PathBuf,
}

impl SheetSource {
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct SheetUnpackerConfig {
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    #[validate(
        length(min = 1, message = "At least one workbook must be configured."),
        custom(function = "validate_unique_sheet_sources")
    )]
    pub sources: Vec<SheetSource>,
    /// Sheets that never make it into the output, e.g. "Home" or "Refinements".
    #[serde(default)]
    pub excluded_sheets: Vec<String>,
    #[serde(default)]
    pub missing_excluded_sheet: MissingSheetPolicy,
    #[serde(default)]
    pub missing_value: MissingValue,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_create_dir")]
    pub create_dir: bool,
}

impl SheetUnpackerConfig {
    pub fn new(input_dir: impl Into<PathBuf>, sources: Vec<SheetSource>) -> Self {
        Self {
            input_dir: input_dir.into(),
            sources,
            excluded_sheets: vec![],
            missing_excluded_sheet: MissingSheetPolicy::default(),
            missing_value: MissingValue::default(),
            output_path: default_output_path(),
            create_dir: default_create_dir(),
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

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("excels_to_unpack")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("unpacked.json")
}
