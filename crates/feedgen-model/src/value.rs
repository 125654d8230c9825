//! Scalar attribute values as supplied by the catalog collaborator.

use serde::{Deserialize, Serialize};

/// A single product attribute value.
///
/// Attribute codes are store-defined strings and are not guaranteed to be
/// present on any given record, so every consumer treats a missing attribute
/// and an empty one the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean flag (e.g. `manage_stock`).
    Bool(bool),
    /// Numeric value (quantity, price before formatting).
    Number(f64),
    /// Free-text value.
    Text(String),
    /// Multi-valued field such as additional image links.
    List(Vec<String>),
}

impl AttrValue {
    /// Returns true when the value carries no usable content.
    ///
    /// Numbers and booleans are never empty; text is empty after trimming,
    /// a list is empty when it has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            AttrValue::Bool(_) | AttrValue::Number(_) => false,
            AttrValue::Text(text) => text.trim().is_empty(),
            AttrValue::List(items) => items.is_empty(),
        }
    }

    /// Renders the value as a single string.
    ///
    /// Lists are joined with `,` (the CSV cell convention); whole numbers
    /// drop their fractional part.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            AttrValue::Bool(flag) => flag.to_string(),
            AttrValue::Number(number) => format_number(*number),
            AttrValue::Text(text) => text.clone(),
            AttrValue::List(items) => items.join(","),
        }
    }

    /// Numeric view of the value, if it has one.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(number) => Some(*number),
            AttrValue::Text(text) => text.trim().parse().ok(),
            AttrValue::Bool(_) | AttrValue::List(_) => None,
        }
    }

    /// Empty text value, the canonical "no value" result of resolution.
    #[must_use]
    pub fn empty() -> Self {
        AttrValue::Text(String::new())
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        AttrValue::Text(value.into())
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value)
    }
}

/// Renders a number without a trailing `.0` for whole values.
fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emptiness() {
        assert!(AttrValue::text("").is_empty());
        assert!(AttrValue::text("   ").is_empty());
        assert!(AttrValue::List(vec![]).is_empty());
        assert!(!AttrValue::Number(0.0).is_empty());
        assert!(!AttrValue::Bool(false).is_empty());
        assert!(!AttrValue::text("x").is_empty());
    }

    #[test]
    fn text_rendering() {
        assert_eq!(AttrValue::Number(5.0).to_text(), "5");
        assert_eq!(AttrValue::Number(25.5).to_text(), "25.5");
        assert_eq!(AttrValue::Bool(true).to_text(), "true");
        assert_eq!(
            AttrValue::List(vec!["a".to_string(), "b".to_string()]).to_text(),
            "a,b"
        );
    }

    #[test]
    fn numeric_view_parses_text() {
        assert_eq!(AttrValue::text("12.5").as_number(), Some(12.5));
        assert_eq!(AttrValue::text("twelve").as_number(), None);
        assert_eq!(AttrValue::Number(3.0).as_number(), Some(3.0));
    }

    #[test]
    fn untagged_json_shapes() {
        let value: AttrValue = serde_json::from_str("25.5").expect("number");
        assert_eq!(value, AttrValue::Number(25.5));
        let value: AttrValue = serde_json::from_str("true").expect("bool");
        assert_eq!(value, AttrValue::Bool(true));
        let value: AttrValue = serde_json::from_str("\"red\"").expect("text");
        assert_eq!(value, AttrValue::text("red"));
        let value: AttrValue = serde_json::from_str("[\"a\",\"b\"]").expect("list");
        assert_eq!(
            value,
            AttrValue::List(vec!["a".to_string(), "b".to_string()])
        );
    }
}
