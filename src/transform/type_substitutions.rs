use crate::constants::DEFAULT_TYPE_SUBSTITUTIONS;
use ordermap::OrderMap;
use std::collections::HashMap;

/// Maps DARS specification data types onto the spark types used in DAE.
///
/// Some DARS types don't match DAE, e.g. `numeric (decimal)` fields are stored
/// as integers. Raw types are lower-cased before the lookup and anything not
/// in the table is passed through lower-cased.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSubstitutions {
    substitutions: HashMap<String, String>,
}

impl TypeSubstitutions {
    pub fn new(substitutions: &OrderMap<String, String>) -> Self {
        Self {
            substitutions: substitutions
                .iter()
                .map(|(from, to)| (from.to_lowercase(), to.clone()))
                .collect(),
        }
    }

    pub fn normalise(&self, raw_type: &str) -> String {
        let lowered = raw_type.to_lowercase();
        match self.substitutions.get(&lowered) {
            Some(substitute) => substitute.clone(),
            None => lowered,
        }
    }
}

impl Default for TypeSubstitutions {
    fn default() -> Self {
        Self {
            substitutions: DEFAULT_TYPE_SUBSTITUTIONS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}
