//! Destination-wide transformation pass.
//!
//! Runs after per-attribute mapping rules and applies the blanket
//! normalization every destination insists on, whether or not the mapping
//! configuration declared it: price formatting, title/description cleanup at
//! the platform's length limits, and the schema's enum-normalizer table.
//! Re-running the pass on its own output is a no-op.

use feedgen_model::{EnumNormalizer, FeedAttributes, PlatformSchema};

use crate::context::TransformContext;
use crate::enums::{
    normalize_age_group, normalize_availability, normalize_boolean, normalize_condition,
    normalize_gender,
};
use crate::price::format_price;
use crate::text::{sanitize_text, truncate_text};

/// Applies the destination-wide pass in place.
pub fn apply_platform_pass(
    attrs: &mut FeedAttributes,
    schema: &PlatformSchema,
    ctx: &TransformContext,
) {
    for attribute in &schema.price_attributes {
        attrs.update(attribute, |value| {
            if value.is_empty() {
                value
            } else {
                format_price(&value, None, ctx)
            }
        });
    }

    clean_text_attribute(attrs, "title", schema.title_limit);
    clean_text_attribute(attrs, "description", schema.description_limit);

    for (attribute, normalizer) in &schema.enum_normalizers {
        attrs.update(attribute, |value| {
            if value.is_empty() {
                return value;
            }
            match normalizer {
                EnumNormalizer::Availability => normalize_availability(&value, ctx),
                EnumNormalizer::Condition => normalize_condition(&value),
                EnumNormalizer::Gender => normalize_gender(&value),
                EnumNormalizer::AgeGroup => normalize_age_group(&value),
                EnumNormalizer::Boolean => normalize_boolean(&value, ctx),
            }
        });
    }

    if let Some(custom) = schema.custom_transform {
        custom(attrs, schema);
    }
}

fn clean_text_attribute(attrs: &mut FeedAttributes, name: &str, limit: Option<usize>) {
    attrs.update(name, |value| {
        let mut text = sanitize_text(&value.to_text());
        if let Some(max) = limit {
            text = truncate_text(&text, max, "");
        }
        feedgen_model::AttrValue::Text(text)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedgen_model::AttrValue;

    fn schema() -> PlatformSchema {
        let mut schema = PlatformSchema::new("demo", "Demo");
        schema.price_attributes = ["price", "sale_price"]
            .into_iter()
            .map(str::to_string)
            .collect();
        schema.title_limit = Some(10);
        schema.availability_underscore = true;
        schema
            .enum_normalizers
            .insert("availability".to_string(), EnumNormalizer::Availability);
        schema
            .enum_normalizers
            .insert("condition".to_string(), EnumNormalizer::Condition);
        schema
    }

    fn resolved() -> FeedAttributes {
        let mut attrs = FeedAttributes::new();
        attrs.set("title", "<b>A very nice laptop</b>");
        attrs.set("price", AttrValue::Number(25.5));
        attrs.set("availability", AttrValue::Number(3.0));
        attrs.set("condition", "Pre-Owned");
        attrs
    }

    #[test]
    fn pass_applies_blanket_normalization() {
        let schema = schema();
        let ctx = TransformContext::for_schema(&schema, "AUD");
        let mut attrs = resolved();
        apply_platform_pass(&mut attrs, &schema, &ctx);
        assert_eq!(attrs.text("price"), "25.50 AUD");
        assert_eq!(attrs.text("title"), "A very nic");
        assert_eq!(attrs.text("availability"), "in_stock");
        assert_eq!(attrs.text("condition"), "used");
    }

    #[test]
    fn pass_is_idempotent() {
        let schema = schema();
        let ctx = TransformContext::for_schema(&schema, "AUD");
        let mut once = resolved();
        apply_platform_pass(&mut once, &schema, &ctx);
        let mut twice = once.clone();
        apply_platform_pass(&mut twice, &schema, &ctx);
        assert_eq!(once, twice);
    }

    #[test]
    fn custom_transform_hook_runs_last() {
        fn uppercase_id(attrs: &mut FeedAttributes, _schema: &PlatformSchema) {
            attrs.update("id", |value| {
                AttrValue::text(value.to_text().to_uppercase())
            });
        }
        let mut schema = schema();
        schema.custom_transform = Some(uppercase_id);
        let ctx = TransformContext::for_schema(&schema, "AUD");
        let mut attrs = FeedAttributes::new();
        attrs.set("id", "sku-1");
        apply_platform_pass(&mut attrs, &schema, &ctx);
        assert_eq!(attrs.text("id"), "SKU-1");
    }

    #[test]
    fn empty_values_stay_empty() {
        let schema = schema();
        let ctx = TransformContext::for_schema(&schema, "AUD");
        let mut attrs = FeedAttributes::new();
        attrs.set("price", "");
        apply_platform_pass(&mut attrs, &schema, &ctx);
        assert_eq!(attrs.text("price"), "");
    }
}
