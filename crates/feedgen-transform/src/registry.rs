//! Name→function registry for the transformer library.
//!
//! Mapping rules reference transformers by name; an unknown name is a
//! configuration error that aborts the whole run, while any value a known
//! transformer cannot handle is coerced rather than rejected.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use feedgen_model::{AttrValue, FeedError, TransformerInvocation};

use crate::category::limit_category_depth;
use crate::context::TransformContext;
use crate::datetime::format_date;
use crate::enums::{
    normalize_age_group, normalize_availability, normalize_boolean, normalize_condition,
    normalize_gender,
};
use crate::price::format_price;
use crate::text::{sanitize_text, truncate_text};

/// A registered transformer: pure and total over any [`AttrValue`].
pub type TransformerFn =
    fn(&AttrValue, &BTreeMap<String, String>, &TransformContext) -> AttrValue;

static REGISTRY: OnceLock<BTreeMap<&'static str, TransformerFn>> = OnceLock::new();

fn registry() -> &'static BTreeMap<&'static str, TransformerFn> {
    REGISTRY.get_or_init(|| {
        let mut map: BTreeMap<&'static str, TransformerFn> = BTreeMap::new();
        map.insert("sanitize", sanitize_transformer);
        map.insert("truncate", truncate_transformer);
        map.insert("format_price", price_transformer);
        map.insert("normalize_boolean", boolean_transformer);
        map.insert("normalize_availability", availability_transformer);
        map.insert("normalize_condition", condition_transformer);
        map.insert("normalize_gender", gender_transformer);
        map.insert("normalize_age_group", age_group_transformer);
        map.insert("limit_category_depth", category_depth_transformer);
        map.insert("format_date", date_transformer);
        map
    })
}

/// Looks up a transformer by registered name.
#[must_use]
pub fn lookup(name: &str) -> Option<TransformerFn> {
    registry().get(name).copied()
}

/// All registered transformer names, sorted.
#[must_use]
pub fn transformer_names() -> Vec<&'static str> {
    registry().keys().copied().collect()
}

/// Applies a rule's transformer chain in declaration order.
///
/// `attribute` is only used to name the offender when a chain references an
/// unregistered transformer.
pub fn apply_chain(
    attribute: &str,
    value: AttrValue,
    invocations: &[TransformerInvocation],
    ctx: &TransformContext,
) -> Result<AttrValue, FeedError> {
    let mut current = value;
    for invocation in invocations {
        let Some(transformer) = lookup(&invocation.name) else {
            return Err(FeedError::UnknownTransformer {
                attribute: attribute.to_string(),
                name: invocation.name.clone(),
            });
        };
        current = transformer(&current, &invocation.params, ctx);
    }
    Ok(current)
}

fn sanitize_transformer(
    value: &AttrValue,
    _params: &BTreeMap<String, String>,
    _ctx: &TransformContext,
) -> AttrValue {
    match value {
        AttrValue::List(items) => {
            AttrValue::List(items.iter().map(|item| sanitize_text(item)).collect())
        }
        other => AttrValue::Text(sanitize_text(&other.to_text())),
    }
}

fn truncate_transformer(
    value: &AttrValue,
    params: &BTreeMap<String, String>,
    _ctx: &TransformContext,
) -> AttrValue {
    let Some(max) = params.get("max_length").and_then(|raw| raw.parse().ok()) else {
        // Missing or unparsable length: leave the value alone
        return value.clone();
    };
    let suffix = params.get("suffix").map(String::as_str).unwrap_or("");
    AttrValue::Text(truncate_text(&value.to_text(), max, suffix))
}

fn price_transformer(
    value: &AttrValue,
    params: &BTreeMap<String, String>,
    ctx: &TransformContext,
) -> AttrValue {
    format_price(value, params.get("currency").map(String::as_str), ctx)
}

fn boolean_transformer(
    value: &AttrValue,
    _params: &BTreeMap<String, String>,
    ctx: &TransformContext,
) -> AttrValue {
    normalize_boolean(value, ctx)
}

fn availability_transformer(
    value: &AttrValue,
    _params: &BTreeMap<String, String>,
    ctx: &TransformContext,
) -> AttrValue {
    normalize_availability(value, ctx)
}

fn condition_transformer(
    value: &AttrValue,
    _params: &BTreeMap<String, String>,
    _ctx: &TransformContext,
) -> AttrValue {
    normalize_condition(value)
}

fn gender_transformer(
    value: &AttrValue,
    _params: &BTreeMap<String, String>,
    _ctx: &TransformContext,
) -> AttrValue {
    normalize_gender(value)
}

fn age_group_transformer(
    value: &AttrValue,
    _params: &BTreeMap<String, String>,
    _ctx: &TransformContext,
) -> AttrValue {
    normalize_age_group(value)
}

fn category_depth_transformer(
    value: &AttrValue,
    params: &BTreeMap<String, String>,
    _ctx: &TransformContext,
) -> AttrValue {
    let Some(max_levels) = params.get("max_levels").and_then(|raw| raw.parse().ok()) else {
        return value.clone();
    };
    let separator = params.get("separator").map(String::as_str).unwrap_or(" > ");
    limit_category_depth(value, max_levels, separator)
}

fn date_transformer(
    value: &AttrValue,
    params: &BTreeMap<String, String>,
    _ctx: &TransformContext,
) -> AttrValue {
    let Some(output_format) = params.get("output_format") else {
        return value.clone();
    };
    format_date(value, output_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedgen_model::TransformerInvocation;

    #[test]
    fn chain_applies_in_order() {
        let ctx = TransformContext::new("AUD");
        let chain = vec![
            TransformerInvocation::new("sanitize"),
            TransformerInvocation::new("truncate").with_param("max_length", "5"),
        ];
        let out = apply_chain("title", AttrValue::text("<b>hello world</b>"), &chain, &ctx)
            .expect("known transformers");
        assert_eq!(out, AttrValue::text("hello"));
    }

    #[test]
    fn unknown_transformer_is_fatal() {
        let ctx = TransformContext::new("AUD");
        let chain = vec![TransformerInvocation::new("shout")];
        let error = apply_chain("title", AttrValue::text("x"), &chain, &ctx)
            .expect_err("unregistered name");
        assert!(matches!(error, FeedError::UnknownTransformer { .. }));
    }

    #[test]
    fn every_documented_name_is_registered() {
        for name in [
            "sanitize",
            "truncate",
            "format_price",
            "normalize_boolean",
            "normalize_availability",
            "normalize_condition",
            "normalize_gender",
            "normalize_age_group",
            "limit_category_depth",
            "format_date",
        ] {
            assert!(lookup(name).is_some(), "missing transformer: {name}");
        }
    }

    #[test]
    fn truncate_on_number_coerces() {
        let ctx = TransformContext::new("AUD");
        let chain = vec![TransformerInvocation::new("truncate").with_param("max_length", "2")];
        let out = apply_chain("qty", AttrValue::Number(12345.0), &chain, &ctx).expect("coerces");
        assert_eq!(out, AttrValue::text("12"));
    }
}
