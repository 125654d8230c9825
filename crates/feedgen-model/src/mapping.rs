//! Declarative mapping rules: how one destination attribute derives its
//! value from a product record.
//!
//! Rules are plain configuration data (serde-round-trippable, so per-platform
//! overrides can be loaded from a TOML table) and are interpreted by the
//! resolver in `feedgen-map`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Where a mapping rule takes its raw value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingSource {
    /// Look up `value` as an attribute code on the product record.
    Attribute,
    /// Use `value` verbatim.
    Static,
    /// Dispatch to the named function in the rule function registry.
    Rule,
    /// Look up the product's category key (attribute named by `value`) in the
    /// caller-supplied category→taxonomy mapping.
    Taxonomy,
}

/// When the parent record's value substitutes for the product's own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentFallback {
    /// Never consult the parent.
    #[default]
    Never,
    /// Use the parent's value only when the product's own is empty.
    IfEmpty,
    /// The parent's value wins whenever a parent record exists; the product's
    /// own value is used only when no parent was supplied.
    Always,
}

/// One transformer application: a name registered in the transformer library
/// plus its string parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformerInvocation {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

impl TransformerInvocation {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// A declarative instruction for deriving one destination attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRule {
    pub source: MappingSource,
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transformers: Vec<TransformerInvocation>,
    #[serde(default)]
    pub use_parent: ParentFallback,
}

impl MappingRule {
    #[must_use]
    pub fn attribute(code: impl Into<String>) -> Self {
        Self::with_source(MappingSource::Attribute, code)
    }

    /// A fixed value; `use_parent` is ignored for this source type.
    #[must_use]
    pub fn constant(value: impl Into<String>) -> Self {
        Self::with_source(MappingSource::Static, value)
    }

    #[must_use]
    pub fn rule(name: impl Into<String>) -> Self {
        Self::with_source(MappingSource::Rule, name)
    }

    #[must_use]
    pub fn taxonomy(category_attribute: impl Into<String>) -> Self {
        Self::with_source(MappingSource::Taxonomy, category_attribute)
    }

    fn with_source(source: MappingSource, value: impl Into<String>) -> Self {
        Self {
            source,
            value: value.into(),
            transformers: Vec::new(),
            use_parent: ParentFallback::Never,
        }
    }

    #[must_use]
    pub fn parent(mut self, fallback: ParentFallback) -> Self {
        self.use_parent = fallback;
        self
    }

    /// Appends a parameterless transformer to the chain.
    #[must_use]
    pub fn then(self, name: impl Into<String>) -> Self {
        self.then_with(TransformerInvocation::new(name))
    }

    /// Appends a transformer invocation to the chain.
    #[must_use]
    pub fn then_with(mut self, invocation: TransformerInvocation) -> Self {
        self.transformers.push(invocation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chains_transformers_in_order() {
        let rule = MappingRule::attribute("name")
            .then("sanitize")
            .then_with(TransformerInvocation::new("truncate").with_param("max_length", "150"));
        assert_eq!(rule.source, MappingSource::Attribute);
        assert_eq!(rule.transformers.len(), 2);
        assert_eq!(rule.transformers[0].name, "sanitize");
        assert_eq!(rule.transformers[1].param("max_length"), Some("150"));
    }

    #[test]
    fn snake_case_round_trip() {
        let rule = MappingRule::attribute("brand").parent(ParentFallback::IfEmpty);
        let json = serde_json::to_string(&rule).expect("serialize");
        assert!(json.contains("\"attribute\""));
        assert!(json.contains("\"if_empty\""));
        let round: MappingRule = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round, rule);
    }
}
