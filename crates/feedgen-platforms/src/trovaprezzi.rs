//! Trovaprezzi comparison-engine destination schema.

use feedgen_model::{
    AttributeSpec, EnumNormalizer, FeedFormat, FormatRule, MappingRule, ParentFallback,
    PlatformSchema,
};

pub(crate) fn schema() -> PlatformSchema {
    let mut schema = PlatformSchema::new("trovaprezzi", "Trovaprezzi");
    schema.supported_formats = [FeedFormat::Csv].into_iter().collect();
    schema.default_format = FeedFormat::Csv;

    schema.attributes = vec![
        AttributeSpec::required("code", "Offer code"),
        AttributeSpec::required("name", "Product name"),
        AttributeSpec::required("price", "Price"),
        AttributeSpec::required("link", "Offer URL"),
        AttributeSpec::optional("description", "Description"),
        AttributeSpec::optional("image", "Image URL"),
        AttributeSpec::optional("availability", "Availability"),
        AttributeSpec::optional("shipping_cost", "Shipping cost"),
        AttributeSpec::optional("ean", "EAN"),
        AttributeSpec::optional("brand", "Brand"),
    ];

    schema.default_mappings = [
        ("code", MappingRule::attribute("sku")),
        ("name", MappingRule::attribute("name").then("sanitize")),
        ("price", MappingRule::attribute("price").then("format_price")),
        ("link", MappingRule::attribute("url")),
        (
            "description",
            MappingRule::attribute("description")
                .parent(ParentFallback::IfEmpty)
                .then("sanitize"),
        ),
        ("image", MappingRule::attribute("image")),
        ("availability", MappingRule::rule("stock_status")),
        ("shipping_cost", MappingRule::attribute("shipping_cost")),
        ("ean", MappingRule::attribute("ean")),
        (
            "brand",
            MappingRule::attribute("manufacturer").parent(ParentFallback::IfEmpty),
        ),
    ]
    .into_iter()
    .map(|(attribute, rule)| (attribute.to_string(), rule))
    .collect();

    schema.enumerations = [(
        "availability".to_string(),
        vec!["in stock".to_string(), "out of stock".to_string()],
    )]
    .into_iter()
    .collect();
    schema
        .enum_normalizers
        .insert("availability".to_string(), EnumNormalizer::Availability);

    schema.price_attributes = ["price"].into_iter().map(str::to_string).collect();
    schema.availability_underscore = false;

    schema.format_rules = vec![
        FormatRule::Ean {
            attribute: "ean".to_string(),
        },
        FormatRule::Price {
            attribute: "price".to_string(),
        },
        FormatRule::Url {
            attribute: "link".to_string(),
        },
    ];

    schema
}
