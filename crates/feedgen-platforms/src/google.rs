//! Google Shopping destination schema.

use std::path::PathBuf;

use feedgen_model::{
    AttributeSpec, ConditionalRule, EnumNormalizer, FeedFormat, FormatRule, MappingRule,
    ParentFallback, PlatformSchema, TransformerInvocation,
};

const TITLE_LIMIT: usize = 150;
const DESCRIPTION_LIMIT: usize = 5000;

pub(crate) fn schema() -> PlatformSchema {
    let mut schema = PlatformSchema::new("google", "Google Shopping");
    schema.supported_formats = [FeedFormat::Xml, FeedFormat::Csv].into_iter().collect();
    schema.default_format = FeedFormat::Xml;

    schema.root_element = "feed".to_string();
    schema.item_element = "entry".to_string();
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
        "availability_date",
        "condition",
        "brand",
        "gtin",
        "mpn",
        "identifier_exists",
        "image_link",
        "additional_image_link",
        "google_product_category",
        "item_group_id",
        "shipping_weight",
        "gender",
        "age_group",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    schema.attributes = vec![
        AttributeSpec::required("id", "Product ID"),
        AttributeSpec::required("title", "Title"),
        AttributeSpec::required("description", "Description"),
        AttributeSpec::required("link", "Product URL"),
        AttributeSpec::required("image_link", "Main image URL"),
        AttributeSpec::required("price", "Price"),
        AttributeSpec::required("availability", "Availability"),
        AttributeSpec::optional("condition", "Condition"),
        AttributeSpec::optional("brand", "Brand"),
        AttributeSpec::optional("gtin", "GTIN"),
        AttributeSpec::optional("mpn", "MPN"),
        AttributeSpec::optional("identifier_exists", "Identifier exists")
            .describe("Set to 'no' for products without gtin/mpn/brand"),
        AttributeSpec::optional("google_product_category", "Google product category"),
        AttributeSpec::optional("item_group_id", "Item group ID"),
        AttributeSpec::optional("additional_image_link", "Additional image URLs"),
        AttributeSpec::optional("sale_price", "Sale price"),
        AttributeSpec::optional("availability_date", "Availability date"),
        AttributeSpec::optional("gender", "Gender"),
        AttributeSpec::optional("age_group", "Age group"),
        AttributeSpec::optional("shipping_weight", "Shipping weight"),
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
        (
            "additional_image_link",
            MappingRule::attribute("additional_images"),
        ),
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
        ("gtin", MappingRule::attribute("ean")),
        ("mpn", MappingRule::attribute("sku")),
        ("identifier_exists", MappingRule::rule("identifier_exists")),
        (
            "google_product_category",
            MappingRule::taxonomy("category_id").parent(ParentFallback::IfEmpty),
        ),
        (
            "item_group_id",
            MappingRule::attribute("sku").parent(ParentFallback::Always),
        ),
        (
            "availability_date",
            MappingRule::attribute("restock_date").then_with(
                TransformerInvocation::new("format_date").with_param("output_format", "%Y-%m-%d"),
            ),
        ),
        (
            "gender",
            MappingRule::attribute("gender").then("normalize_gender"),
        ),
        (
            "age_group",
            MappingRule::attribute("age_group").then("normalize_age_group"),
        ),
        ("shipping_weight", MappingRule::rule("shipping_weight")),
    ]
    .into_iter()
    .map(|(attribute, rule)| (attribute.to_string(), rule))
    .collect();

    schema.taxonomy_file = Some(PathBuf::from("taxonomies/google.txt"));

    schema.enumerations = [
        (
            "availability",
            vec!["in_stock", "out_of_stock", "preorder", "backorder"],
        ),
        ("condition", vec!["new", "refurbished", "used"]),
        ("gender", vec!["male", "female", "unisex"]),
        (
            "age_group",
            vec!["newborn", "infant", "toddler", "kids", "adult"],
        ),
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
        ("gender", EnumNormalizer::Gender),
        ("age_group", EnumNormalizer::AgeGroup),
    ]
    .into_iter()
    .map(|(attribute, normalizer)| (attribute.to_string(), normalizer))
    .collect();

    schema.price_attributes = ["price", "sale_price"]
        .into_iter()
        .map(str::to_string)
        .collect();
    schema.title_limit = Some(TITLE_LIMIT);
    schema.description_limit = Some(DESCRIPTION_LIMIT);
    schema.availability_underscore = true;
    schema.identifier_rule = true;

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
    schema.conditional_rules = vec![ConditionalRule::when_equals(
        "availability",
        "preorder",
        vec!["availability_date".to_string()],
    )];

    schema
}
