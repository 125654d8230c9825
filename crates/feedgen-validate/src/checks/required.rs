//! Required-attribute presence.

use feedgen_model::{FeedAttributes, PlatformSchema};

pub fn check(attrs: &FeedAttributes, schema: &PlatformSchema, errors: &mut Vec<String>) {
    for spec in schema.required_attributes() {
        if !attrs.has_value(&spec.name) {
            errors.push(format!("Missing required attribute: {}", spec.name));
        }
    }
}
