//! The mapping resolver: one rule, one product, one raw value.

use std::collections::BTreeMap;

use tracing::trace;

use feedgen_model::{
    AttrValue, FeedAttributes, FeedError, MappingRule, MappingSource, ParentFallback,
    PlatformSchema, ProductRecord,
};
use feedgen_transform::{TransformContext, apply_chain};

use crate::rules;

/// Everything resolution needs beyond the product itself.
pub struct ResolveContext<'a> {
    pub schema: &'a PlatformSchema,
    pub transform: &'a TransformContext,
    /// Pre-resolved category key → destination taxonomy id/path, supplied by
    /// the catalog collaborator for `taxonomy`-typed rules.
    pub category_map: &'a BTreeMap<String, String>,
}

/// Resolves one mapping rule to a raw value, then applies the rule's
/// transformer chain in order.
///
/// Missing attributes resolve to an empty value (subject to the rule's
/// parent-fallback policy); only configuration mistakes (an unknown
/// transformer or rule-function name) are errors.
pub fn resolve_rule(
    attribute: &str,
    rule: &MappingRule,
    product: &ProductRecord,
    parent: Option<&ProductRecord>,
    ctx: &ResolveContext<'_>,
) -> Result<AttrValue, FeedError> {
    let raw = match rule.source {
        MappingSource::Static => AttrValue::text(rule.value.clone()),
        MappingSource::Attribute => resolve_attribute(rule, product, parent),
        MappingSource::Rule => {
            let Some(function) = rules::lookup(&rule.value) else {
                return Err(FeedError::UnknownRuleFunction {
                    attribute: attribute.to_string(),
                    name: rule.value.clone(),
                });
            };
            function(product, parent, ctx)
        }
        MappingSource::Taxonomy => resolve_taxonomy(rule, product, parent, ctx),
    };
    trace!(attribute, raw = %raw.to_text(), "resolved");
    apply_chain(attribute, raw, &rule.transformers, ctx.transform)
}

/// Resolves every rule in a mapping table into a feed attribute dictionary.
pub fn resolve_all(
    mappings: &BTreeMap<String, MappingRule>,
    product: &ProductRecord,
    parent: Option<&ProductRecord>,
    ctx: &ResolveContext<'_>,
) -> Result<FeedAttributes, FeedError> {
    let mut attrs = FeedAttributes::new();
    for (attribute, rule) in mappings {
        let value = resolve_rule(attribute, rule, product, parent, ctx)?;
        attrs.set(attribute.clone(), value);
    }
    Ok(attrs)
}

/// Attribute lookup with the rule's parent-fallback policy.
///
/// `always` means the parent's value wins whenever a parent record exists;
/// the product's own value is used only when no parent was supplied.
fn resolve_attribute(
    rule: &MappingRule,
    product: &ProductRecord,
    parent: Option<&ProductRecord>,
) -> AttrValue {
    let own = product.get(&rule.value).cloned();
    let from_parent = || parent.and_then(|record| record.get(&rule.value).cloned());

    let resolved = match rule.use_parent {
        ParentFallback::Never => own,
        ParentFallback::IfEmpty => match own {
            Some(value) if !value.is_empty() => Some(value),
            _ => from_parent().or(own),
        },
        ParentFallback::Always => match parent {
            Some(_) => from_parent(),
            None => own,
        },
    };
    resolved.unwrap_or_else(AttrValue::empty)
}

fn resolve_taxonomy(
    rule: &MappingRule,
    product: &ProductRecord,
    parent: Option<&ProductRecord>,
    ctx: &ResolveContext<'_>,
) -> AttrValue {
    let lookup = |record: &ProductRecord| -> Option<String> {
        let key = record.text(&rule.value);
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        ctx.category_map.get(key).cloned()
    };

    let own = lookup(product);
    let mapped = match rule.use_parent {
        ParentFallback::Never => own,
        ParentFallback::IfEmpty => own.or_else(|| parent.and_then(lookup)),
        ParentFallback::Always => match parent {
            Some(record) => lookup(record),
            None => own,
        },
    };
    mapped.map(AttrValue::Text).unwrap_or_else(AttrValue::empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> PlatformSchema {
        let mut schema = PlatformSchema::new("demo", "Demo");
        schema.availability_underscore = true;
        schema
    }

    fn context<'a>(
        schema: &'a PlatformSchema,
        transform: &'a TransformContext,
        category_map: &'a BTreeMap<String, String>,
    ) -> ResolveContext<'a> {
        ResolveContext {
            schema,
            transform,
            category_map,
        }
    }

    fn product() -> ProductRecord {
        let mut record = ProductRecord::new();
        record.insert("sku", "SKU-1");
        record.insert("name", "Laptop");
        record.insert("brand", "");
        record.insert("category_id", "42");
        record
    }

    fn parent() -> ProductRecord {
        let mut record = ProductRecord::new();
        record.insert("name", "Laptop Family");
        record.insert("brand", "Initech");
        record.insert("category_id", "77");
        record
    }

    #[test]
    fn static_source_ignores_records() {
        let schema = schema();
        let transform = TransformContext::for_schema(&schema, "AUD");
        let map = BTreeMap::new();
        let ctx = context(&schema, &transform, &map);
        let rule = MappingRule::constant("new").parent(ParentFallback::Always);
        let value =
            resolve_rule("condition", &rule, &product(), Some(&parent()), &ctx).expect("static");
        assert_eq!(value, AttrValue::text("new"));
    }

    #[test]
    fn attribute_parent_never() {
        let schema = schema();
        let transform = TransformContext::for_schema(&schema, "AUD");
        let map = BTreeMap::new();
        let ctx = context(&schema, &transform, &map);
        let rule = MappingRule::attribute("brand");
        let value =
            resolve_rule("brand", &rule, &product(), Some(&parent()), &ctx).expect("resolve");
        assert!(value.is_empty());
    }

    #[test]
    fn attribute_parent_if_empty() {
        let schema = schema();
        let transform = TransformContext::for_schema(&schema, "AUD");
        let map = BTreeMap::new();
        let ctx = context(&schema, &transform, &map);
        let rule = MappingRule::attribute("brand").parent(ParentFallback::IfEmpty);
        let value =
            resolve_rule("brand", &rule, &product(), Some(&parent()), &ctx).expect("resolve");
        assert_eq!(value, AttrValue::text("Initech"));
        // Non-empty own value is kept
        let rule = MappingRule::attribute("name").parent(ParentFallback::IfEmpty);
        let value =
            resolve_rule("title", &rule, &product(), Some(&parent()), &ctx).expect("resolve");
        assert_eq!(value, AttrValue::text("Laptop"));
    }

    #[test]
    fn attribute_parent_always_wins_when_present() {
        let schema = schema();
        let transform = TransformContext::for_schema(&schema, "AUD");
        let map = BTreeMap::new();
        let ctx = context(&schema, &transform, &map);
        let rule = MappingRule::attribute("name").parent(ParentFallback::Always);
        let value =
            resolve_rule("title", &rule, &product(), Some(&parent()), &ctx).expect("resolve");
        assert_eq!(value, AttrValue::text("Laptop Family"));
        // Without a parent the product's own value is the fallback
        let value = resolve_rule("title", &rule, &product(), None, &ctx).expect("resolve");
        assert_eq!(value, AttrValue::text("Laptop"));
    }

    #[test]
    fn rule_source_dispatches_by_name() {
        let schema = schema();
        let transform = TransformContext::for_schema(&schema, "AUD");
        let map = BTreeMap::new();
        let ctx = context(&schema, &transform, &map);
        let mut record = product();
        record.insert("quantity", 5.0);
        record.insert("manage_stock", true);
        let rule = MappingRule::rule("stock_status");
        let value = resolve_rule("availability", &rule, &record, None, &ctx).expect("resolve");
        assert_eq!(value, AttrValue::text("in_stock"));
    }

    #[test]
    fn unknown_rule_function_is_fatal() {
        let schema = schema();
        let transform = TransformContext::for_schema(&schema, "AUD");
        let map = BTreeMap::new();
        let ctx = context(&schema, &transform, &map);
        let rule = MappingRule::rule("phase_of_moon");
        let error = resolve_rule("availability", &rule, &product(), None, &ctx)
            .expect_err("unregistered rule");
        assert!(matches!(error, FeedError::UnknownRuleFunction { .. }));
    }

    #[test]
    fn taxonomy_uses_category_map_with_parent_fallback() {
        let schema = schema();
        let transform = TransformContext::for_schema(&schema, "AUD");
        let mut map = BTreeMap::new();
        map.insert("77".to_string(), "Electronics > Computers".to_string());
        let ctx = context(&schema, &transform, &map);
        let rule = MappingRule::taxonomy("category_id").parent(ParentFallback::IfEmpty);
        // Product's own category (42) has no mapping; parent's (77) does
        let value = resolve_rule("google_product_category", &rule, &product(), Some(&parent()), &ctx)
            .expect("resolve");
        assert_eq!(value, AttrValue::text("Electronics > Computers"));
    }

    #[test]
    fn transformer_chain_runs_after_resolution() {
        let schema = schema();
        let transform = TransformContext::for_schema(&schema, "AUD");
        let map = BTreeMap::new();
        let ctx = context(&schema, &transform, &map);
        let rule = MappingRule::attribute("name")
            .then_with(
                feedgen_model::TransformerInvocation::new("truncate").with_param("max_length", "3"),
            );
        let value = resolve_rule("title", &rule, &product(), None, &ctx).expect("resolve");
        assert_eq!(value, AttrValue::text("Lap"));
    }

    #[test]
    fn resolve_all_builds_the_dictionary() {
        let schema = schema();
        let transform = TransformContext::for_schema(&schema, "AUD");
        let map = BTreeMap::new();
        let ctx = context(&schema, &transform, &map);
        let mut mappings = BTreeMap::new();
        mappings.insert("id".to_string(), MappingRule::attribute("sku"));
        mappings.insert("condition".to_string(), MappingRule::constant("new"));
        let attrs = resolve_all(&mappings, &product(), None, &ctx).expect("resolve all");
        assert_eq!(attrs.text("id"), "SKU-1");
        assert_eq!(attrs.text("condition"), "new");
    }
}
