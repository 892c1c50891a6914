pub(crate) mod config_validation;
pub(crate) mod validation_utils;
