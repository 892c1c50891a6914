use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::hash::Hash;
use validator::ValidationError;

pub(crate) fn find_duplicates<'a, T: Eq + Hash + ?Sized>(
    items: impl IntoIterator<Item = &'a T>,
) -> Vec<&'a T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| !seen.insert(*item))
        .collect()
}

pub(crate) fn fail_validation_on_duplicates<T: Serialize>(
    duplicates: &[T],
    error_id: &'static str,
    reason: &str,
) -> Result<(), ValidationError> {
    if duplicates.is_empty() {
        Ok(())
    } else {
        let mut error = ValidationError::new(error_id);
        error.add_param(Cow::from("duplicates"), &duplicates);
        Err(error.with_message(Cow::Owned(reason.to_string())))
    }
}

pub(crate) fn validate_regex(regex: &str) -> Result<(), ValidationError> {
    match Regex::new(regex) {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut error = ValidationError::new("invalid_regex");
            error.add_param(Cow::from("regex"), &regex);
            Err(error.with_message(Cow::Owned("Invalid Regex string.".to_string())))
        }
    }
}
