//! Bing Shopping destination schema.

use feedgen_model::{
    AttributeSpec, EnumNormalizer, FeedFormat, FormatRule, MappingRule, ParentFallback,
    PlatformSchema,
};

pub(crate) fn schema() -> PlatformSchema {
    let mut schema = PlatformSchema::new("bing", "Bing Shopping");
    schema.supported_formats = [FeedFormat::Xml, FeedFormat::Csv].into_iter().collect();
    schema.default_format = FeedFormat::Csv;

    schema.root_element = "feed".to_string();
    schema.item_element = "item".to_string();
    schema.namespaces = vec![
        (String::new(), "http://www.w3.org/2005/Atom".to_string()),
        ("g".to_string(), "http://base.google.com/ns/1.0".to_string()),
    ];
    schema.item_prefix = Some("g".to_string());
    schema.namespaced_attributes = ["id", "price", "availability", "condition", "brand", "mpn"]
        .into_iter()
        .map(str::to_string)
        .collect();

    schema.attributes = vec![
        AttributeSpec::required("id", "Merchant product ID"),
        AttributeSpec::required("title", "Title"),
        AttributeSpec::required("link", "Product URL"),
        AttributeSpec::required("price", "Price"),
        AttributeSpec::required("description", "Description"),
        AttributeSpec::required("image_link", "Image URL"),
        AttributeSpec::optional("availability", "Availability"),
        AttributeSpec::optional("condition", "Condition"),
        AttributeSpec::optional("brand", "Brand"),
        AttributeSpec::optional("mpn", "MPN"),
        AttributeSpec::optional("shipping", "Shipping cost"),
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
        (
            "condition",
            MappingRule::attribute("condition").then("normalize_condition"),
        ),
        (
            "brand",
            MappingRule::attribute("manufacturer").parent(ParentFallback::IfEmpty),
        ),
        ("mpn", MappingRule::attribute("sku")),
        ("shipping", MappingRule::attribute("shipping_cost")),
    ]
    .into_iter()
    .map(|(attribute, rule)| (attribute.to_string(), rule))
    .collect();

    schema.enumerations = [
        (
            "availability",
            vec!["in stock", "out of stock", "preorder", "backorder"],
        ),
        ("condition", vec!["new", "refurbished", "used"]),
    ]
    .into_iter()
    .map(|(attribute, values)| {
        (
            attribute.to_string(),
            values.into_iter().map(str::to_string).collect(),
        )
    })
    .collect();

    schema.enum_normalizers = [
        ("availability", EnumNormalizer::Availability),
        ("condition", EnumNormalizer::Condition),
    ]
    .into_iter()
    .map(|(attribute, normalizer)| (attribute.to_string(), normalizer))
    .collect();

    schema.price_attributes = ["price"].into_iter().map(str::to_string).collect();
    schema.title_limit = Some(150);
    schema.description_limit = Some(5000);
    schema.availability_underscore = false;

    schema.format_rules = vec![
        FormatRule::Price {
            attribute: "price".to_string(),
        },
        FormatRule::Url {
            attribute: "link".to_string(),
        },
    ];

    schema
}
