//! OpenAI Commerce destination schema.
//!
//! JSON Lines feed with real boolean eligibility flags. The
//! checkout-eligibility cross-checks are the one destination behavior here
//! that cannot be expressed as data, so they live in a custom check.

use feedgen_model::{
    AttributeSpec, ConditionalRule, EnumNormalizer, FeedAttributes, FeedFormat, FormatRule,
    MappingRule, ParentFallback, PlatformSchema, TransformerInvocation,
};

pub(crate) fn schema() -> PlatformSchema {
    let mut schema = PlatformSchema::new("openai", "OpenAI Commerce");
    schema.supported_formats = [FeedFormat::JsonLines].into_iter().collect();
    schema.default_format = FeedFormat::JsonLines;
    schema.true_token = "true".to_string();
    schema.false_token = "false".to_string();

    schema.attributes = vec![
        AttributeSpec::required("id", "Product ID"),
        AttributeSpec::required("title", "Title"),
        AttributeSpec::required("description", "Description"),
        AttributeSpec::required("link", "Product URL"),
        AttributeSpec::required("price", "Price"),
        AttributeSpec::required("availability", "Availability"),
        AttributeSpec::required("seller_name", "Seller name"),
        AttributeSpec::optional("image_link", "Image URL"),
        AttributeSpec::optional("seller_url", "Seller URL"),
        AttributeSpec::optional("seller_privacy_policy", "Seller privacy policy URL"),
        AttributeSpec::optional("seller_tos", "Seller terms of service URL"),
        AttributeSpec::optional("is_eligible_search", "Eligible for search"),
        AttributeSpec::optional("is_eligible_checkout", "Eligible for checkout"),
        AttributeSpec::optional("availability_date", "Availability date"),
        AttributeSpec::optional("inventory_quantity", "Inventory quantity"),
    ];

    schema.default_mappings = [
        ("id", MappingRule::attribute("sku")),
        ("title", MappingRule::attribute("name").then("sanitize")),
        (
            "description",
            MappingRule::attribute("description")
                .parent(ParentFallback::IfEmpty)
                .then("sanitize"),
        ),
        ("link", MappingRule::attribute("url")),
        ("image_link", MappingRule::attribute("image")),
        ("price", MappingRule::attribute("price").then("format_price")),
        ("availability", MappingRule::rule("stock_status")),
        ("seller_name", MappingRule::attribute("store_name")),
        ("seller_url", MappingRule::attribute("store_url")),
        (
            "seller_privacy_policy",
            MappingRule::attribute("privacy_policy_url"),
        ),
        ("seller_tos", MappingRule::attribute("terms_url")),
        (
            "is_eligible_search",
            MappingRule::attribute("searchable").then("normalize_boolean"),
        ),
        (
            "is_eligible_checkout",
            MappingRule::attribute("checkout_enabled").then("normalize_boolean"),
        ),
        (
            "availability_date",
            MappingRule::attribute("restock_date").then_with(
                TransformerInvocation::new("format_date").with_param("output_format", "%Y-%m-%d"),
            ),
        ),
        ("inventory_quantity", MappingRule::attribute("quantity")),
    ]
    .into_iter()
    .map(|(attribute, rule)| (attribute.to_string(), rule))
    .collect();

    schema.enumerations = [(
        "availability".to_string(),
        vec![
            "in_stock".to_string(),
            "out_of_stock".to_string(),
            "pre_order".to_string(),
        ],
    )]
    .into_iter()
    .collect();

    schema.enum_normalizers = [
        ("availability", EnumNormalizer::Availability),
        ("is_eligible_search", EnumNormalizer::Boolean),
        ("is_eligible_checkout", EnumNormalizer::Boolean),
    ]
    .into_iter()
    .map(|(attribute, normalizer)| (attribute.to_string(), normalizer))
    .collect();

    schema.price_attributes = ["price"].into_iter().map(str::to_string).collect();
    schema.boolean_attributes = ["is_eligible_search", "is_eligible_checkout"]
        .into_iter()
        .map(str::to_string)
        .collect();
    schema.title_limit = Some(150);
    schema.description_limit = Some(5000);
    schema.availability_underscore = true;

    schema.format_rules = vec![
        FormatRule::Price {
            attribute: "price".to_string(),
        },
        FormatRule::Url {
            attribute: "link".to_string(),
        },
    ];
    schema.conditional_rules = vec![ConditionalRule::when_equals(
        "availability",
        "pre_order",
        vec!["availability_date".to_string()],
    )];
    schema.custom_checks = vec![check_checkout_eligibility];

    schema
}

/// Checkout-eligible products must carry seller policy links and must also
/// be searchable.
fn check_checkout_eligibility(attrs: &FeedAttributes, schema: &PlatformSchema) -> Vec<String> {
    let mut errors = Vec::new();
    if !attrs
        .text("is_eligible_checkout")
        .trim()
        .eq_ignore_ascii_case(&schema.true_token)
    {
        return errors;
    }
    for required in ["seller_privacy_policy", "seller_tos"] {
        if !attrs.has_value(required) {
            errors.push(format!(
                "Attribute {required} is required when is_eligible_checkout is true"
            ));
        }
    }
    if !attrs
        .text("is_eligible_search")
        .trim()
        .eq_ignore_ascii_case(&schema.true_token)
    {
        errors.push(
            "is_eligible_search must be true when is_eligible_checkout is true".to_string(),
        );
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_requires_policies_and_search() {
        let schema = schema();
        let mut attrs = FeedAttributes::new();
        attrs.set("is_eligible_checkout", "true");
        let errors = check_checkout_eligibility(&attrs, &schema);
        assert_eq!(errors.len(), 3);

        attrs.set("seller_privacy_policy", "https://shop.example/privacy");
        attrs.set("seller_tos", "https://shop.example/tos");
        attrs.set("is_eligible_search", "true");
        assert!(check_checkout_eligibility(&attrs, &schema).is_empty());
    }

    #[test]
    fn non_checkout_products_are_unconstrained() {
        let schema = schema();
        let mut attrs = FeedAttributes::new();
        attrs.set("is_eligible_checkout", "false");
        assert!(check_checkout_eligibility(&attrs, &schema).is_empty());
    }
}
