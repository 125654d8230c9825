//! Product records and resolved feed attribute dictionaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::AttrValue;

/// A catalog product as handed to the engine: attribute code → value.
///
/// Owned by the catalog collaborator and read-only here. A variant/child
/// product may come with a second record (its parent) supplying fallback
/// values at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(flatten)]
    attributes: BTreeMap<String, AttrValue>,
}

impl ProductRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.attributes.insert(code.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&AttrValue> {
        self.attributes.get(code)
    }

    /// Text rendering of an attribute; empty string when absent.
    #[must_use]
    pub fn text(&self, code: &str) -> String {
        self.get(code).map(AttrValue::to_text).unwrap_or_default()
    }

    /// True when the attribute is present and non-empty.
    #[must_use]
    pub fn has_value(&self, code: &str) -> bool {
        self.get(code).is_some_and(|value| !value.is_empty())
    }

    /// Identifier used to key error reports: `id`, falling back to `sku`.
    #[must_use]
    pub fn identity(&self) -> String {
        for code in ["id", "sku"] {
            if self.has_value(code) {
                return self.text(code);
            }
        }
        "<unknown>".to_string()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.attributes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl FromIterator<(String, AttrValue)> for ProductRecord {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

/// The per-product output of resolution and transformation: destination
/// attribute name → final value, ready for validation and serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedAttributes {
    #[serde(flatten)]
    values: BTreeMap<String, AttrValue>,
}

impl FeedAttributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    /// Text rendering of an attribute; empty string when absent.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(AttrValue::to_text).unwrap_or_default()
    }

    /// True when the attribute is present and non-empty.
    #[must_use]
    pub fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    /// Applies `f` to the value under `name`, if present.
    pub fn update(&mut self, name: &str, f: impl FnOnce(AttrValue) -> AttrValue) {
        if let Some(value) = self.values.remove(name) {
            self.values.insert(name.to_string(), f(value));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttrValue)> {
        self.values.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, AttrValue)> for FeedAttributes {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_prefers_id_over_sku() {
        let mut product = ProductRecord::new();
        product.insert("sku", "SKU-1");
        assert_eq!(product.identity(), "SKU-1");
        product.insert("id", "42");
        assert_eq!(product.identity(), "42");
        assert_eq!(ProductRecord::new().identity(), "<unknown>");
    }

    #[test]
    fn has_value_ignores_blank_text() {
        let mut product = ProductRecord::new();
        product.insert("color", "  ");
        assert!(!product.has_value("color"));
        assert!(!product.has_value("missing"));
    }

    #[test]
    fn update_replaces_in_place() {
        let mut attrs = FeedAttributes::new();
        attrs.set("title", "hi");
        attrs.update("title", |value| {
            AttrValue::text(value.to_text().to_uppercase())
        });
        assert_eq!(attrs.text("title"), "HI");
    }
}
