use serde_json::Value as JsonValue;

/// Type tag carried by every schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int,
    Float,
    Text,
}

/// Tagged value for one settings field.
///
/// All internal logic moves values of this type around; conversion to and
/// from the persisted document happens only at the storage boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Int(i32),
    Float(f64),
    Text(String),
}

impl SettingValue {
    /// Return the type tag of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            SettingValue::Bool(_) => FieldKind::Bool,
            SettingValue::Int(_) => FieldKind::Int,
            SettingValue::Float(_) => FieldKind::Float,
            SettingValue::Text(_) => FieldKind::Text,
        }
    }

    /// Convert a parsed JSON value into a `SettingValue` of the given kind.
    ///
    /// Returns `None` when the JSON value does not convert; callers treat
    /// that the same as an absent key and keep the field's default.
    pub fn from_json(kind: FieldKind, value: &JsonValue) -> Option<Self> {
        match kind {
            FieldKind::Bool => value.as_bool().map(SettingValue::Bool),
            FieldKind::Int => value
                .as_i64()
                .and_then(|raw| i32::try_from(raw).ok())
                .map(SettingValue::Int),
            FieldKind::Float => value.as_f64().map(SettingValue::Float),
            FieldKind::Text => {
                value.as_str().map(|text| SettingValue::Text(text.into()))
            },
        }
    }

    /// Convert into the JSON value written to the persisted document.
    pub fn to_json(&self) -> JsonValue {
        match self {
            SettingValue::Bool(value) => JsonValue::Bool(*value),
            SettingValue::Int(value) => JsonValue::from(*value),
            SettingValue::Float(value) => JsonValue::from(*value),
            SettingValue::Text(value) => JsonValue::String(value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{FieldKind, SettingValue};

    #[test]
    fn given_matching_json_when_converted_then_value_carries_same_kind() {
        let cases = [
            (FieldKind::Bool, json!(true), SettingValue::Bool(true)),
            (FieldKind::Int, json!(42), SettingValue::Int(42)),
            (FieldKind::Float, json!(1.5), SettingValue::Float(1.5)),
            (
                FieldKind::Text,
                json!("COM0"),
                SettingValue::Text(String::from("COM0")),
            ),
        ];

        for (kind, raw, expected) in cases {
            assert_eq!(SettingValue::from_json(kind, &raw), Some(expected));
        }
    }

    #[test]
    fn given_integer_json_when_converted_as_float_then_value_is_widened() {
        let converted = SettingValue::from_json(FieldKind::Float, &json!(3));

        assert_eq!(converted, Some(SettingValue::Float(3.0)));
    }

    #[test]
    fn given_mismatched_json_when_converted_then_returns_none() {
        assert_eq!(SettingValue::from_json(FieldKind::Bool, &json!(1)), None);
        assert_eq!(SettingValue::from_json(FieldKind::Int, &json!(2.5)), None);
        assert_eq!(
            SettingValue::from_json(FieldKind::Int, &json!("57600")),
            None
        );
        assert_eq!(
            SettingValue::from_json(FieldKind::Text, &json!(false)),
            None
        );
    }

    #[test]
    fn given_out_of_range_integer_when_converted_then_returns_none() {
        let raw = json!(i64::from(i32::MAX) + 1);

        assert_eq!(SettingValue::from_json(FieldKind::Int, &raw), None);
    }

    #[test]
    fn given_value_when_written_to_json_then_round_trip_preserves_it() {
        let values = [
            SettingValue::Bool(false),
            SettingValue::Int(-7),
            SettingValue::Float(0.02),
            SettingValue::Text(String::from("/dev/ttyUSB0")),
        ];

        for value in values {
            let raw = value.to_json();

            assert_eq!(
                SettingValue::from_json(value.kind(), &raw),
                Some(value)
            );
        }
    }
}
