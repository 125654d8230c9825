//! Pinterest catalog destination schema.
//!
//! Pinterest classifies against the Google product taxonomy, so the taxonomy
//! file is shared with the Google destination.

use std::path::PathBuf;

use feedgen_model::{
    AttributeSpec, EnumNormalizer, FeedFormat, FormatRule, MappingRule, ParentFallback,
    PlatformSchema,
};

pub(crate) fn schema() -> PlatformSchema {
    let mut schema = PlatformSchema::new("pinterest", "Pinterest Catalogs");
    schema.supported_formats = [FeedFormat::Xml, FeedFormat::Csv].into_iter().collect();
    schema.default_format = FeedFormat::Csv;

    schema.root_element = "feed".to_string();
    schema.item_element = "item".to_string();
    schema.namespaces = vec![
        (String::new(), "http://www.w3.org/2005/Atom".to_string()),
        ("g".to_string(), "http://base.google.com/ns/1.0".to_string()),
    ];
    schema.item_prefix = Some("g".to_string());
    schema.namespaced_attributes = [
        "id",
        "price",
        "sale_price",
        "availability",
        "condition",
        "brand",
        "image_link",
        "google_product_category",
        "item_group_id",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    schema.attributes = vec![
        AttributeSpec::required("id", "Product ID"),
        AttributeSpec::required("title", "Title"),
        AttributeSpec::required("description", "Description"),
        AttributeSpec::required("link", "Product URL"),
        AttributeSpec::required("image_link", "Image URL"),
        AttributeSpec::required("price", "Price"),
        AttributeSpec::required("availability", "Availability"),
        AttributeSpec::optional("sale_price", "Sale price"),
        AttributeSpec::optional("condition", "Condition"),
        AttributeSpec::optional("brand", "Brand"),
        AttributeSpec::optional("google_product_category", "Google product category"),
        AttributeSpec::optional("item_group_id", "Item group ID"),
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
        (
            "sale_price",
            MappingRule::attribute("special_price").then("format_price"),
        ),
        ("availability", MappingRule::rule("stock_status")),
        (
            "condition",
            MappingRule::attribute("condition").then("normalize_condition"),
        ),
        (
            "brand",
            MappingRule::attribute("manufacturer").parent(ParentFallback::IfEmpty),
        ),
        (
            "google_product_category",
            MappingRule::taxonomy("category_id").parent(ParentFallback::IfEmpty),
        ),
        (
            "item_group_id",
            MappingRule::attribute("sku").parent(ParentFallback::Always),
        ),
    ]
    .into_iter()
    .map(|(attribute, rule)| (attribute.to_string(), rule))
    .collect();

    schema.taxonomy_file = Some(PathBuf::from("taxonomies/google.txt"));

    schema.enumerations = [
        ("availability", vec!["in stock", "out of stock", "preorder"]),
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

    schema.price_attributes = ["price", "sale_price"]
        .into_iter()
        .map(str::to_string)
        .collect();
    schema.title_limit = Some(500);
    schema.description_limit = Some(10000);
    schema.availability_underscore = false;

    schema.format_rules = vec![
        FormatRule::Price {
            attribute: "price".to_string(),
        },
        FormatRule::Price {
            attribute: "sale_price".to_string(),
        },
        FormatRule::Url {
            attribute: "link".to_string(),
        },
        FormatRule::Url {
            attribute: "image_link".to_string(),
        },
    ];

    schema
}
