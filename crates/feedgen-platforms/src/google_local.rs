//! Google Local Inventory destination schema.
//!
//! Per-store stock feed: one record per product per store, with pickup
//! metadata and the extended local availability enumeration.

use feedgen_model::{
    AttributeSpec, ConditionalRule, EnumNormalizer, FeedFormat, FormatRule, MappingRule,
    PlatformSchema,
};

pub(crate) fn schema() -> PlatformSchema {
    let mut schema = PlatformSchema::new("google_local", "Google Local Inventory");
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
        "store_code",
        "price",
        "sale_price",
        "availability",
        "quantity",
        "pickup_method",
        "pickup_sla",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    schema.attributes = vec![
        AttributeSpec::required("store_code", "Store code"),
        AttributeSpec::required("id", "Product ID"),
        AttributeSpec::required("availability", "Availability"),
        AttributeSpec::optional("price", "Local price"),
        AttributeSpec::optional("sale_price", "Local sale price"),
        AttributeSpec::optional("quantity", "Quantity on hand"),
        AttributeSpec::optional("pickup_method", "Pickup method"),
        AttributeSpec::optional("pickup_sla", "Pickup SLA"),
    ];

    schema.default_mappings = [
        ("store_code", MappingRule::attribute("store_code")),
        ("id", MappingRule::attribute("sku")),
        ("availability", MappingRule::rule("stock_status")),
        ("price", MappingRule::attribute("price").then("format_price")),
        (
            "sale_price",
            MappingRule::attribute("special_price").then("format_price"),
        ),
        ("quantity", MappingRule::attribute("quantity")),
        ("pickup_method", MappingRule::attribute("pickup_method")),
        ("pickup_sla", MappingRule::attribute("pickup_sla")),
    ]
    .into_iter()
    .map(|(attribute, rule)| (attribute.to_string(), rule))
    .collect();

    schema.enumerations = [
        (
            "availability",
            vec![
                "in_stock",
                "out_of_stock",
                "limited_availability",
                "on_display_to_order",
            ],
        ),
        (
            "pickup_method",
            vec!["buy", "reserve", "ship to store", "not supported"],
        ),
        (
            "pickup_sla",
            vec![
                "same day",
                "next day",
                "2-day",
                "3-day",
                "4-day",
                "5-day",
                "6-day",
                "multi-week",
            ],
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

    schema
        .enum_normalizers
        .insert("availability".to_string(), EnumNormalizer::Availability);

    schema.price_attributes = ["price", "sale_price"]
        .into_iter()
        .map(str::to_string)
        .collect();
    schema.availability_underscore = true;

    schema.format_rules = vec![FormatRule::Price {
        attribute: "price".to_string(),
    }];
    schema.conditional_rules = vec![ConditionalRule::when_set_and_not(
        "pickup_method",
        "not supported",
        vec!["pickup_sla".to_string()],
    )];

    schema
}
