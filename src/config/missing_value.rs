use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The sentinel written in place of an empty cell.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingValue {
    /// Written as JSON `null`.
    #[default]
    Absent,
    /// Written as the given text, e.g. `"None"`.
    Placeholder(String),
}

impl MissingValue {
    pub fn sentinel(&self) -> Value {
        match self {
            MissingValue::Absent => Value::Null,
            MissingValue::Placeholder(text) => Value::String(text.clone()),
        }
    }
}
