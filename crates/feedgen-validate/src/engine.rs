//! Validation engine: runs the schema's checks in a fixed order.

use feedgen_model::{FeedAttributes, PlatformSchema};

use crate::checks;

/// Validates one resolved, transformed product against a destination schema.
///
/// Check order: required attributes, identifier-exists, enumerations,
/// sale-price cross-field, format rules, conditional requirements, then the
/// schema's custom check functions. The returned list is empty iff the
/// product is feed-eligible.
#[must_use]
pub fn validate(attrs: &FeedAttributes, schema: &PlatformSchema) -> Vec<String> {
    let mut errors = Vec::new();

    checks::required::check(attrs, schema, &mut errors);
    if schema.identifier_rule {
        checks::identifiers::check(attrs, schema, &mut errors);
    }
    checks::enums::check(attrs, schema, &mut errors);
    checks::price::check_sale_price(attrs, &mut errors);
    checks::format::check(attrs, schema, &mut errors);
    checks::conditional::check(attrs, schema, &mut errors);
    for custom in &schema.custom_checks {
        errors.extend(custom(attrs, schema));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedgen_model::{AttributeSpec, FormatRule};

    fn schema() -> PlatformSchema {
        let mut schema = PlatformSchema::new("demo", "Demo");
        schema.attributes = vec![
            AttributeSpec::required("id", "ID"),
            AttributeSpec::required("title", "Title"),
            AttributeSpec::optional("color", "Color"),
        ];
        schema.identifier_rule = true;
        schema.enumerations.insert(
            "availability".to_string(),
            vec!["in_stock".to_string(), "out_of_stock".to_string()],
        );
        schema.format_rules = vec![FormatRule::Price {
            attribute: "price".to_string(),
        }];
        schema
    }

    fn eligible() -> FeedAttributes {
        let mut attrs = FeedAttributes::new();
        attrs.set("id", "1");
        attrs.set("title", "Laptop");
        attrs.set("brand", "Initech");
        attrs.set("availability", "in_stock");
        attrs.set("price", "25.50 AUD");
        attrs
    }

    #[test]
    fn eligible_product_has_no_errors() {
        assert!(validate(&eligible(), &schema()).is_empty());
    }

    #[test]
    fn missing_required_attribute_is_reported_first() {
        let mut attrs = eligible();
        attrs.set("title", "");
        let errors = validate(&attrs, &schema());
        assert_eq!(errors[0], "Missing required attribute: title");
    }

    #[test]
    fn optional_attributes_may_be_empty() {
        let attrs = eligible();
        // color is declared optional and absent
        assert!(validate(&attrs, &schema()).is_empty());
    }

    #[test]
    fn errors_accumulate_in_check_order() {
        let mut attrs = FeedAttributes::new();
        attrs.set("availability", "teleporting");
        attrs.set("price", "cheap");
        let errors = validate(&attrs, &schema());
        // required (x2), identifier, enumeration, price format
        assert!(errors.len() >= 4);
        assert!(errors[0].starts_with("Missing required attribute"));
        assert!(errors.iter().any(|error| error.contains("teleporting")));
        assert!(errors.iter().any(|error| error.contains("cheap")));
    }
}
