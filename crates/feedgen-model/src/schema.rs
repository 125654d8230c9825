//! Platform schemas: the static description of one feed destination.
//!
//! A schema is configuration data created once at startup and shared
//! read-only across the run. Destination-specific behavior is expressed as
//! data (enumerations, format rules, conditional requirements) wherever
//! possible; only genuinely novel per-platform logic lives in the two
//! function hooks.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::mapping::MappingRule;
use crate::record::FeedAttributes;

/// Output encodings a destination can accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedFormat {
    Xml,
    Csv,
    JsonLines,
}

impl fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeedFormat::Xml => "xml",
            FeedFormat::Csv => "csv",
            FeedFormat::JsonLines => "jsonl",
        };
        f.write_str(name)
    }
}

/// One destination attribute: name, label, and whether the validator treats
/// an empty value as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
    pub name: String,
    pub label: String,
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

impl AttributeSpec {
    #[must_use]
    pub fn required(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: true,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn optional(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: false,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Which synonym table the transformation pass applies to an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumNormalizer {
    Availability,
    Condition,
    Gender,
    AgeGroup,
    Boolean,
}

/// Fixed-pattern field checks the validator runs for a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatRule {
    /// 13-digit EAN.
    Ean { attribute: String },
    /// `\d+\.\d{2}\s[A-Z]{3}` formatted price.
    Price { attribute: String },
    /// Well-formed absolute URL.
    Url { attribute: String },
}

/// A data-driven conditional requirement: when the trigger attribute fires,
/// every listed attribute must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalRule {
    /// Attribute whose value triggers the rule. The rule only fires when the
    /// attribute is non-empty.
    pub attribute: String,
    /// Fire only when the value equals this token (case-insensitive).
    pub equals: Option<String>,
    /// Do not fire when the value equals this token (case-insensitive).
    pub not_equals: Option<String>,
    /// Attributes that become required when the rule fires.
    pub requires: Vec<String>,
}

impl ConditionalRule {
    #[must_use]
    pub fn when_equals(
        attribute: impl Into<String>,
        token: impl Into<String>,
        requires: Vec<String>,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            equals: Some(token.into()),
            not_equals: None,
            requires,
        }
    }

    /// Fires for any non-empty value except `token`.
    #[must_use]
    pub fn when_set_and_not(
        attribute: impl Into<String>,
        token: impl Into<String>,
        requires: Vec<String>,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            equals: None,
            not_equals: Some(token.into()),
            requires,
        }
    }
}

/// Hook for destination-wide normalization beyond the data-driven pass.
pub type CustomTransformFn = fn(&mut FeedAttributes, &PlatformSchema);

/// Hook for destination business rules too specific to express as data.
/// Returns human-readable error strings; never panics.
pub type CustomCheckFn = fn(&FeedAttributes, &PlatformSchema) -> Vec<String>;

/// Static description of one feed destination.
///
/// Instances are process-lifetime singletons registered once; all fields are
/// read-only after construction.
#[derive(Debug, Clone)]
pub struct PlatformSchema {
    pub code: String,
    pub display_name: String,
    pub supported_formats: BTreeSet<FeedFormat>,
    pub default_format: FeedFormat,
    /// Declared attributes in output order; covers both required and
    /// optional attributes via the `required` flag.
    pub attributes: Vec<AttributeSpec>,
    pub default_mappings: BTreeMap<String, MappingRule>,
    /// XML root element name.
    pub root_element: String,
    /// XML per-item element name.
    pub item_element: String,
    /// Namespace declarations in output order: (prefix, uri). An empty
    /// prefix declares the default namespace.
    pub namespaces: Vec<(String, String)>,
    /// Prefix applied to attributes listed in `namespaced_attributes`.
    pub item_prefix: Option<String>,
    pub namespaced_attributes: BTreeSet<String>,
    pub taxonomy_file: Option<PathBuf>,
    /// Per-attribute allowed value sets, checked case-insensitively.
    pub enumerations: BTreeMap<String, Vec<String>>,
    /// Attributes the transformation pass normalizes by synonym table.
    pub enum_normalizers: BTreeMap<String, EnumNormalizer>,
    /// Attributes forced through price formatting by the transformation pass.
    pub price_attributes: BTreeSet<String>,
    /// Attributes rendered as real JSON booleans in JSON Lines output.
    pub boolean_attributes: BTreeSet<String>,
    pub title_limit: Option<usize>,
    pub description_limit: Option<usize>,
    /// Platform-specific boolean tokens (`yes`/`no` vs `true`/`false`).
    pub true_token: String,
    pub false_token: String,
    /// `in_stock` vs `in stock` spelling for availability tokens.
    pub availability_underscore: bool,
    /// Whether the identifier-exists check applies to this destination.
    pub identifier_rule: bool,
    pub format_rules: Vec<FormatRule>,
    pub conditional_rules: Vec<ConditionalRule>,
    pub custom_transform: Option<CustomTransformFn>,
    pub custom_checks: Vec<CustomCheckFn>,
}

impl PlatformSchema {
    /// A minimal schema supporting every format, with no attributes, checks,
    /// or mappings. Concrete destinations start here and fill in their data.
    #[must_use]
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            supported_formats: [FeedFormat::Xml, FeedFormat::Csv, FeedFormat::JsonLines]
                .into_iter()
                .collect(),
            default_format: FeedFormat::Xml,
            attributes: Vec::new(),
            default_mappings: BTreeMap::new(),
            root_element: "feed".to_string(),
            item_element: "entry".to_string(),
            namespaces: Vec::new(),
            item_prefix: None,
            namespaced_attributes: BTreeSet::new(),
            taxonomy_file: None,
            enumerations: BTreeMap::new(),
            enum_normalizers: BTreeMap::new(),
            price_attributes: BTreeSet::new(),
            boolean_attributes: BTreeSet::new(),
            title_limit: None,
            description_limit: None,
            true_token: "yes".to_string(),
            false_token: "no".to_string(),
            availability_underscore: false,
            identifier_rule: false,
            format_rules: Vec::new(),
            conditional_rules: Vec::new(),
            custom_transform: None,
            custom_checks: Vec::new(),
        }
    }

    pub fn required_attributes(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.attributes.iter().filter(|spec| spec.required)
    }

    pub fn optional_attributes(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.attributes.iter().filter(|spec| !spec.required)
    }

    /// Declared attribute names in output order.
    pub fn attribute_order(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|spec| spec.name.as_str())
    }

    #[must_use]
    pub fn supports_format(&self, format: FeedFormat) -> bool {
        self.supported_formats.contains(&format)
    }

    /// True iff a taxonomy file path is configured for this destination.
    #[must_use]
    pub fn supports_category_mapping(&self) -> bool {
        self.taxonomy_file.is_some()
    }

    /// Allowed values for an attribute, if the destination declares any.
    #[must_use]
    pub fn enumeration(&self, attribute: &str) -> Option<&[String]> {
        self.enumerations.get(attribute).map(Vec::as_slice)
    }
}
