//! Field values and field kinds.
//!
//! A form holds one [`FieldValue`] per field. The value's shape decides which
//! binding a field gets (see [`FieldKind`]):
//!
//! ```rust
//! use reform_core::{FieldKind, FieldValue};
//!
//! assert_eq!(FieldKind::infer(&FieldValue::from(true)), FieldKind::Boolean);
//! assert_eq!(FieldKind::infer(&FieldValue::from(vec!["a", "b"])), FieldKind::Array);
//! assert_eq!(FieldKind::infer(&FieldValue::from("hello")), FieldKind::Scalar);
//! assert_eq!(FieldKind::infer(&FieldValue::Null), FieldKind::Scalar);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A primitive list element.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// The current value of a form field.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum FieldValue {
    /// Unset.
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Scalar>),
}

/// Which binding shape a field is exposed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FieldKind {
    Boolean,
    Array,
    Scalar,
}

impl FieldKind {
    /// Runtime classification: booleans first, then lists, everything else is
    /// a scalar (including `Null`).
    pub fn infer(value: &FieldValue) -> Self {
        match value {
            FieldValue::Bool(_) => FieldKind::Boolean,
            FieldValue::List(_) => FieldKind::Array,
            FieldValue::Null | FieldValue::Number(_) | FieldValue::Text(_) => FieldKind::Scalar,
        }
    }

    /// Whether a field declared with this kind may hold `value`.
    pub fn accepts(self, value: &FieldValue) -> bool {
        match self {
            FieldKind::Boolean => matches!(value, FieldValue::Bool(_)),
            FieldKind::Array => matches!(value, FieldValue::List(_)),
            FieldKind::Scalar => matches!(
                value,
                FieldValue::Null | FieldValue::Number(_) | FieldValue::Text(_)
            ),
        }
    }

    /// The value a field of this kind starts with when nothing is given.
    pub fn empty_value(self) -> FieldValue {
        match self {
            FieldKind::Boolean => FieldValue::Bool(false),
            FieldKind::Array => FieldValue::List(Vec::new()),
            FieldKind::Scalar => FieldValue::Null,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
            FieldKind::Scalar => "scalar",
        })
    }
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        FieldKind::infer(self)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Displayable string for scalar-shaped consumers. `Null` has none.
    ///
    /// Lists join their elements with `,`, integral numbers print without a
    /// fractional part.
    pub fn to_display(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Number(n) => Some(format_number(*n)),
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::List(items) => Some(
                items
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => f.write_str(&format_number(*n)),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

impl From<Scalar> for FieldValue {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Bool(b) => FieldValue::Bool(b),
            Scalar::Number(n) => FieldValue::Number(n),
            Scalar::Text(t) => FieldValue::Text(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings() {
        assert_eq!(FieldValue::Null.to_display(), None);
        assert_eq!(FieldValue::from(42i64).to_display().as_deref(), Some("42"));
        assert_eq!(FieldValue::from(2.5).to_display().as_deref(), Some("2.5"));
        assert_eq!(FieldValue::from(false).to_display().as_deref(), Some("false"));
        assert_eq!(
            FieldValue::from(vec!["a", "b"]).to_display().as_deref(),
            Some("a,b")
        );
    }

    #[test]
    fn test_kind_accepts() {
        assert!(FieldKind::Scalar.accepts(&FieldValue::Null));
        assert!(FieldKind::Scalar.accepts(&FieldValue::from(3i64)));
        assert!(!FieldKind::Scalar.accepts(&FieldValue::from(true)));
        assert!(!FieldKind::Boolean.accepts(&FieldValue::Null));
        assert!(FieldKind::Array.accepts(&FieldValue::List(vec![])));
        assert!(!FieldKind::Array.accepts(&FieldValue::from("a")));
    }

    #[test]
    fn test_option_into_value() {
        let none: Option<&str> = None;
        assert_eq!(FieldValue::from(none), FieldValue::Null);
        assert_eq!(FieldValue::from(Some("x")), FieldValue::from("x"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_untagged_shape() {
        let v: FieldValue = serde_json::from_str(r#"["a", 1, true]"#).unwrap();
        assert_eq!(
            v,
            FieldValue::List(vec![
                Scalar::from("a"),
                Scalar::Number(1.0),
                Scalar::Bool(true)
            ])
        );
        let null: FieldValue = serde_json::from_str("null").unwrap();
        assert_eq!(null, FieldValue::Null);
        assert_eq!(serde_json::to_string(&FieldKind::Array).unwrap(), "\"array\"");
    }
}
