//! Per-item status value.

use serde::{Serialize, Serializer};
use serde_yaml::{Number, Value};
use std::fmt;

/// Status of one inventory item, as read from its `state_flags` field.
///
/// The value is opaque: it is only compared for equality against another
/// snapshot's status or against the known status codes. A field that is
/// absent or explicitly null is [`StateFlags::Missing`], which is distinct
/// from a present `0`.
#[derive(Debug, Clone)]
pub enum StateFlags {
    /// Field absent or null
    Missing,
    /// Field present with a non-null value
    Present(Value),
}

impl StateFlags {
    /// Item generated and usable
    pub const WORKING: i64 = 3;
    /// Item inspected in game and worth keeping
    pub const VIEWED_VALUABLE: i64 = 1;
    /// Item generated but unusable
    pub const BROKEN: i64 = 17;

    /// Build from an optional field value. Tags are stripped.
    pub fn from_field(value: Option<&Value>) -> Self {
        match value.map(crate::extract::untag) {
            None | Some(Value::Null) => StateFlags::Missing,
            Some(v) => StateFlags::Present(v.clone()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, StateFlags::Missing)
    }

    /// Integral value of a numeric status (`3.0` counts as `3`, `true` as `1`).
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            StateFlags::Present(Value::Bool(b)) => Some(i64::from(*b)),
            StateFlags::Present(Value::Number(n)) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            _ => None,
        }
    }

    /// True when the status is numerically equal to `code`.
    pub fn is_code(&self, code: i64) -> bool {
        self.as_integer() == Some(code)
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

impl PartialEq for StateFlags {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StateFlags::Missing, StateFlags::Missing) => true,
            (StateFlags::Present(Value::Number(a)), StateFlags::Present(Value::Number(b))) => {
                numbers_equal(a, b)
            }
            (StateFlags::Present(Value::Bool(flag)), StateFlags::Present(Value::Number(n)))
            | (StateFlags::Present(Value::Number(n)), StateFlags::Present(Value::Bool(flag))) => {
                numbers_equal(&Number::from(i64::from(*flag)), n)
            }
            (StateFlags::Present(a), StateFlags::Present(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for StateFlags {
    fn from(code: i64) -> Self {
        StateFlags::Present(Value::Number(code.into()))
    }
}

impl From<i32> for StateFlags {
    fn from(code: i32) -> Self {
        StateFlags::from(i64::from(code))
    }
}

impl From<&str> for StateFlags {
    fn from(text: &str) -> Self {
        StateFlags::Present(Value::String(text.to_string()))
    }
}

impl fmt::Display for StateFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateFlags::Missing => f.write_str("None"),
            StateFlags::Present(Value::String(s)) => f.write_str(s),
            StateFlags::Present(Value::Number(n)) => write!(f, "{}", n),
            StateFlags::Present(Value::Bool(b)) => write!(f, "{}", b),
            StateFlags::Present(other) => match serde_json::to_string(other) {
                Ok(json) => f.write_str(&json),
                Err(_) => write!(f, "{:?}", other),
            },
        }
    }
}

impl Serialize for StateFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StateFlags::Missing => serializer.serialize_none(),
            StateFlags::Present(value) => value.serialize(serializer),
        }
    }
}
