//! The type classifier.
//!
//! [`classify`] assigns every [`Value`] exactly one [`Kind`]. The differ
//! only compares values of the same kind structurally; a kind mismatch is
//! always reported as an edit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Classification label for a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Null,
    Boolean,
    Undefined,
    String,
    /// Not-a-number. Kept apart from [`Kind::Number`] because two NaNs
    /// compare as unchanged while NaN against any number is an edit.
    #[serde(rename = "NaN")]
    NaN,
    Number,
    Array,
    Date,
    RegExp,
    Object,
}

impl Kind {
    /// The label used in logs and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Undefined => "undefined",
            Kind::String => "string",
            Kind::NaN => "NaN",
            Kind::Number => "number",
            Kind::Array => "array",
            Kind::Date => "date",
            Kind::RegExp => "regexp",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a value. Total: every value has exactly one kind.
///
/// Checks run in a fixed order (null, boolean, undefined, string, NaN,
/// number, array, date, regexp) and anything left over is an object.
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Boolean,
        Value::Undefined => Kind::Undefined,
        Value::String(_) => Kind::String,
        Value::Number(n) if n.is_nan() => Kind::NaN,
        Value::Number(_) => Kind::Number,
        Value::Array(_) => Kind::Array,
        Value::Date(_) => Kind::Date,
        Value::RegExp(_) => Kind::RegExp,
        Value::Object(_) => Kind::Object,
    }
}

impl Value {
    /// Shorthand for [`classify`].
    pub fn kind(&self) -> Kind {
        classify(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Object;
    use serde_json::json;

    #[test]
    fn classifies_null() {
        assert_eq!(classify(&Value::Null), Kind::Null);
    }

    #[test]
    fn classifies_boolean() {
        assert_eq!(classify(&Value::Bool(true)), Kind::Boolean);
        assert_eq!(classify(&Value::Bool(false)), Kind::Boolean);
    }

    #[test]
    fn classifies_undefined() {
        assert_eq!(classify(&Value::Undefined), Kind::Undefined);
    }

    #[test]
    fn classifies_string() {
        assert_eq!(classify(&Value::from("super string")), Kind::String);
        assert_eq!(classify(&Value::from("")), Kind::String);
    }

    #[test]
    fn nan_is_not_a_number_kind() {
        assert_eq!(classify(&Value::Number(f64::NAN)), Kind::NaN);
        assert_eq!(classify(&Value::Number(13.13)), Kind::Number);
        assert_eq!(classify(&Value::Number(f64::INFINITY)), Kind::Number);
    }

    #[test]
    fn classifies_array() {
        assert_eq!(classify(&Value::Array(Vec::new())), Kind::Array);
    }

    #[test]
    fn classifies_date() {
        let date = Value::date_from_millis(0).unwrap();
        assert_eq!(classify(&date), Kind::Date);
    }

    #[test]
    fn classifies_regexp() {
        assert_eq!(classify(&Value::regexp("something", "").unwrap()), Kind::RegExp);
        assert_eq!(classify(&Value::regexp("something", "gi").unwrap()), Kind::RegExp);
    }

    #[test]
    fn classifies_object() {
        assert_eq!(classify(&Value::Object(Object::new())), Kind::Object);
        assert_eq!(classify(&Value::from(json!({"toString": true}))), Kind::Object);
    }

    #[test]
    fn kind_labels() {
        assert_eq!(Kind::NaN.to_string(), "NaN");
        assert_eq!(serde_json::to_string(&Kind::RegExp).unwrap(), "\"regexp\"");
        assert_eq!(serde_json::to_string(&Kind::Boolean).unwrap(), "\"boolean\"");
    }
}
