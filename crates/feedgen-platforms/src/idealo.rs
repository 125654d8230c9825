//! Idealo comparison-engine destination schema.
//!
//! CSV-only feed keyed on EAN; category paths are capped at three levels.

use feedgen_model::{
    AttributeSpec, FeedFormat, FormatRule, MappingRule, ParentFallback, PlatformSchema,
    TransformerInvocation,
};

pub(crate) fn schema() -> PlatformSchema {
    let mut schema = PlatformSchema::new("idealo", "Idealo");
    schema.supported_formats = [FeedFormat::Csv].into_iter().collect();
    schema.default_format = FeedFormat::Csv;

    schema.attributes = vec![
        AttributeSpec::required("sku", "Offer ID"),
        AttributeSpec::required("name", "Product name"),
        AttributeSpec::required("price", "Price"),
        AttributeSpec::required("url", "Offer URL"),
        AttributeSpec::required("image_url", "Image URL"),
        AttributeSpec::optional("ean", "EAN"),
        AttributeSpec::optional("brand", "Brand"),
        AttributeSpec::optional("description", "Description"),
        AttributeSpec::optional("category_path", "Category path"),
        AttributeSpec::optional("delivery_time", "Delivery time"),
        AttributeSpec::optional("shipping_costs", "Shipping costs"),
    ];

    schema.default_mappings = [
        ("sku", MappingRule::attribute("sku")),
        ("name", MappingRule::attribute("name").then("sanitize")),
        ("price", MappingRule::attribute("price").then("format_price")),
        ("url", MappingRule::attribute("url")),
        ("image_url", MappingRule::attribute("image")),
        ("ean", MappingRule::attribute("ean")),
        (
            "brand",
            MappingRule::attribute("manufacturer").parent(ParentFallback::IfEmpty),
        ),
        (
            "description",
            MappingRule::attribute("description")
                .parent(ParentFallback::IfEmpty)
                .then("sanitize"),
        ),
        (
            "category_path",
            MappingRule::attribute("category_path").then_with(
                TransformerInvocation::new("limit_category_depth").with_param("max_levels", "3"),
            ),
        ),
        ("delivery_time", MappingRule::attribute("delivery_time")),
        ("shipping_costs", MappingRule::attribute("shipping_cost")),
    ]
    .into_iter()
    .map(|(attribute, rule)| (attribute.to_string(), rule))
    .collect();

    schema.price_attributes = ["price"].into_iter().map(str::to_string).collect();
    schema.title_limit = Some(255);

    schema.format_rules = vec![
        FormatRule::Ean {
            attribute: "ean".to_string(),
        },
        FormatRule::Price {
            attribute: "price".to_string(),
        },
        FormatRule::Url {
            attribute: "url".to_string(),
        },
    ];

    schema
}
