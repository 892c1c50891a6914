use crate::constants::{DARS_NIC_PATTERN, DARS_NIC_PLACEHOLDER};
use regex::{NoExpand, Regex};
use serde_json::Value;
use std::borrow::Cow;

/// Replaces the versioned DARS NIC code embedded in DAE table names with a
/// placeholder, e.g. `cds_v6_0_1_dars_nic_391419_j3w9t_demographics` becomes
/// `cds_v6_0_1_{dars_nic}_demographics`.
#[derive(Debug, Clone)]
pub struct TableIdentifierNormaliser {
    pattern: Regex,
    placeholder: String,
}

impl TableIdentifierNormaliser {
    pub fn new(pattern: &str, placeholder: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            placeholder: placeholder.into(),
        })
    }

    pub fn dars_nic() -> Result<Self, regex::Error> {
        Self::new(DARS_NIC_PATTERN, DARS_NIC_PLACEHOLDER)
    }

    pub fn normalise<'a>(&self, identifier: &'a str) -> Cow<'a, str> {
        self.pattern
            .replace_all(identifier, NoExpand(self.placeholder.as_str()))
    }

    /// Only text cells are touched.
    pub fn normalise_value(&self, value: Value) -> Value {
        match value {
            Value::String(identifier) => match self.normalise(&identifier) {
                Cow::Borrowed(_) => Value::String(identifier),
                Cow::Owned(normalised) => Value::String(normalised),
            },
            other => other,
        }
    }
}
