use crate::config::{SheetSource, SpecSource};
use crate::validation::validation_utils::{fail_validation_on_duplicates, find_duplicates};
use ordermap::OrderMap;
use validator::ValidationError;

pub(crate) fn validate_unique_table_names(specs: &[SpecSource]) -> Result<(), ValidationError> {
    let duplicates = find_duplicates(specs.iter().map(|spec| spec.dae_table_name.as_str()));
    fail_validation_on_duplicates(
        &duplicates,
        "duplicates",
        "Found duplicate dae_table_name in DARS specifications",
    )
}

pub(crate) fn validate_unique_sheet_sources(
    sources: &[SheetSource],
) -> Result<(), ValidationError> {
    let duplicates = find_duplicates(sources.iter().map(|source| source.file_name.as_path()));
    fail_validation_on_duplicates(
        &duplicates,
        "duplicates",
        "Found duplicate workbooks in sheet unpacker sources",
    )
}

pub(crate) fn validate_unique_columns(columns: &[String]) -> Result<(), ValidationError> {
    let duplicates = find_duplicates(columns.iter().map(String::as_str));
    fail_validation_on_duplicates(&duplicates, "duplicates", "Found duplicate column names")
}

/// Substitutions are looked up lower-cased, so two keys differing only in case clash.
pub(crate) fn validate_type_substitutions(
    substitutions: &OrderMap<String, String>,
) -> Result<(), ValidationError> {
    let lowered: Vec<String> = substitutions.keys().map(|key| key.to_lowercase()).collect();
    let duplicates = find_duplicates(lowered.iter().map(String::as_str));
    fail_validation_on_duplicates(
        &duplicates,
        "duplicates",
        "Found type substitutions that only differ in case",
    )
}
