//! Enumerated-value membership.

use feedgen_model::{FeedAttributes, PlatformSchema};

pub fn check(attrs: &FeedAttributes, schema: &PlatformSchema, errors: &mut Vec<String>) {
    for (attribute, allowed) in &schema.enumerations {
        let Some(value) = attrs.get(attribute) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        let text = value.to_text();
        let member = allowed
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(text.trim()));
        if !member {
            errors.push(format!(
                "Invalid value '{text}' for {attribute} (allowed: {})",
                allowed.join(", ")
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        let mut schema = PlatformSchema::new("demo", "Demo");
        schema.enumerations.insert(
            "condition".to_string(),
            vec!["new".to_string(), "used".to_string()],
        );
        let mut attrs = FeedAttributes::new();
        attrs.set("condition", "NEW");
        let mut errors = Vec::new();
        check(&attrs, &schema, &mut errors);
        assert!(errors.is_empty());

        attrs.set("condition", "mint");
        check(&attrs, &schema, &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("mint"));
        assert!(errors[0].contains("condition"));
    }
}
