//! Tests for feedgen-model types.

use feedgen_model::{
    AttrValue, FeedError, MappingRule, MappingSource, ParentFallback, ProductRecord,
    TransformerInvocation,
};

#[test]
fn mapping_rules_load_from_toml() {
    let overrides = r#"
        [title]
        source = "attribute"
        value = "name"
        use_parent = "if_empty"

        [[title.transformers]]
        name = "sanitize"

        [[title.transformers]]
        name = "truncate"
        params = { max_length = "150" }

        [condition]
        source = "static"
        value = "new"
    "#;
    let mappings: std::collections::BTreeMap<String, MappingRule> =
        toml::from_str(overrides).expect("parse overrides");

    let title = &mappings["title"];
    assert_eq!(title.source, MappingSource::Attribute);
    assert_eq!(title.value, "name");
    assert_eq!(title.use_parent, ParentFallback::IfEmpty);
    assert_eq!(title.transformers.len(), 2);
    assert_eq!(title.transformers[1].param("max_length"), Some("150"));

    let condition = &mappings["condition"];
    assert_eq!(condition.source, MappingSource::Static);
    assert_eq!(condition.use_parent, ParentFallback::Never);
    assert!(condition.transformers.is_empty());
}

#[test]
fn product_record_from_json_object() {
    let raw = r#"{
        "sku": "SKU-9",
        "name": "Blue Shirt",
        "price": 25.5,
        "in_stock": true,
        "additional_images": ["a.jpg", "b.jpg"]
    }"#;
    let product: ProductRecord = serde_json::from_str(raw).expect("parse product");
    assert_eq!(product.text("sku"), "SKU-9");
    assert_eq!(product.get("price"), Some(&AttrValue::Number(25.5)));
    assert_eq!(product.get("in_stock"), Some(&AttrValue::Bool(true)));
    assert_eq!(
        product.get("additional_images"),
        Some(&AttrValue::List(vec![
            "a.jpg".to_string(),
            "b.jpg".to_string()
        ]))
    );
    assert_eq!(product.identity(), "SKU-9");
}

#[test]
fn transformer_invocation_builder() {
    let invocation = TransformerInvocation::new("format_date").with_param("output_format", "%Y-%m-%d");
    assert_eq!(invocation.param("output_format"), Some("%Y-%m-%d"));
    assert_eq!(invocation.param("missing"), None);
}

#[test]
fn error_messages_name_the_offender() {
    let error = FeedError::UnknownTransformer {
        attribute: "title".to_string(),
        name: "shout".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "mapping for 'title' references unknown transformer: shout"
    );
    let error = FeedError::UnknownPlatform {
        code: "altavista".to_string(),
    };
    assert_eq!(error.to_string(), "unknown platform code: altavista");
}
