use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::error::TypeError;
use crate::object::Object;
use crate::pattern::Pattern;

/// A value from the dynamic value universe being compared.
///
/// `Undefined` marks absence. It is distinct from `Null` and can still be
/// stored under an object key, so `{foo: undefined}` and `{}` differ.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    RegExp(Pattern),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// A date value from milliseconds since the UNIX epoch.
    pub fn date_from_millis(millis: i64) -> Result<Self, TypeError> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(Value::Date)
            .ok_or(TypeError::InvalidTimestamp(millis))
    }

    /// A regular-expression value.
    pub fn regexp(source: impl Into<String>, flags: &str) -> Result<Self, TypeError> {
        Pattern::new(source, flags).map(Value::RegExp)
    }

    /// Returns `true` for the absent marker.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Same-value identity.
    ///
    /// Leaves are identical when their content is: `NaN` is identical to
    /// `NaN`, and `+0` to `-0`. Dates, patterns, arrays and objects are only
    /// identical to themselves (the same reference).
    pub fn same_value(&self, other: &Value) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                // -0 must keep its sign, which the integer form would drop.
                let negative_zero = *n == 0.0 && n.is_sign_negative();
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 && !negative_zero {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Date(d) => {
                serializer.serialize_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::RegExp(p) => p.serialize(serializer),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Object(object) => serializer.collect_map(object.iter()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut object = Object::with_capacity(map.len());
                for (key, value) in map {
                    object.insert(key, Value::from(value));
                }
                Value::Object(object)
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl From<Pattern> for Value {
    fn from(p: Pattern) -> Self {
        Value::RegExp(p)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}
