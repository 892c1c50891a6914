use crate::config::MissingValue;
use crate::constants::DATETIME_FORMAT;
use calamine::Data;
use serde_json::{Number, Value};

/// Converts a single worksheet cell into the value written to the output document.
pub(crate) fn cell_to_json(cell: &Data, missing_value: &MissingValue) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => missing_value.sentinel(),
        Data::String(s) if s.is_empty() => missing_value.sentinel(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => float_to_json(*f, missing_value),
        Data::DateTime(d) => match d.as_datetime() {
            Some(datetime) if d.is_datetime() => {
                Value::String(datetime.format(DATETIME_FORMAT).to_string())
            }
            _ => float_to_json(d.as_f64(), missing_value),
        },
    }
}

/// Whole numbers are written without a fraction, like the worksheet shows them.
/// NaN and infinities have no JSON form and count as missing.
fn float_to_json(f: f64, missing_value: &MissingValue) -> Value {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        return Value::from(f as i64);
    }
    Number::from_f64(f)
        .map(Value::Number)
        .unwrap_or_else(|| missing_value.sentinel())
}
