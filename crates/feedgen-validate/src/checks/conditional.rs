//! Data-driven conditional requirements.

use feedgen_model::{ConditionalRule, FeedAttributes, PlatformSchema};

pub fn check(attrs: &FeedAttributes, schema: &PlatformSchema, errors: &mut Vec<String>) {
    for rule in &schema.conditional_rules {
        if !fires(attrs, rule) {
            continue;
        }
        for required in &rule.requires {
            if !attrs.has_value(required) {
                errors.push(format!(
                    "Attribute {required} is required when {} is '{}'",
                    rule.attribute,
                    attrs.text(&rule.attribute)
                ));
            }
        }
    }
}

fn fires(attrs: &FeedAttributes, rule: &ConditionalRule) -> bool {
    if !attrs.has_value(&rule.attribute) {
        return false;
    }
    let value = attrs.text(&rule.attribute);
    let value = value.trim();
    if let Some(token) = &rule.equals
        && !value.eq_ignore_ascii_case(token)
    {
        return false;
    }
    if let Some(token) = &rule.not_equals
        && value.eq_ignore_ascii_case(token)
    {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preorder_requires_availability_date() {
        let mut schema = PlatformSchema::new("demo", "Demo");
        schema.conditional_rules = vec![ConditionalRule::when_equals(
            "availability",
            "pre_order",
            vec!["availability_date".to_string()],
        )];
        let mut attrs = FeedAttributes::new();
        attrs.set("availability", "pre_order");
        let mut errors = Vec::new();
        check(&attrs, &schema, &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("availability_date"));

        attrs.set("availability_date", "2026-09-01");
        let mut errors = Vec::new();
        check(&attrs, &schema, &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn pickup_method_excludes_not_supported() {
        let mut schema = PlatformSchema::new("demo", "Demo");
        schema.conditional_rules = vec![ConditionalRule::when_set_and_not(
            "pickup_method",
            "not supported",
            vec!["pickup_sla".to_string()],
        )];
        let mut attrs = FeedAttributes::new();
        attrs.set("pickup_method", "not supported");
        let mut errors = Vec::new();
        check(&attrs, &schema, &mut errors);
        assert!(errors.is_empty());

        attrs.set("pickup_method", "buy");
        let mut errors = Vec::new();
        check(&attrs, &schema, &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("pickup_sla"));
    }
}
