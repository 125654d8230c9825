//! Schema-free "custom" destination.
//!
//! No required attributes, no default mappings, no checks: the caller's
//! mapping configuration defines the entire output shape.

use feedgen_model::{FeedFormat, PlatformSchema};

pub(crate) fn schema() -> PlatformSchema {
    let mut schema = PlatformSchema::new("custom", "Custom Export");
    schema.default_format = FeedFormat::Csv;
    schema.root_element = "products".to_string();
    schema.item_element = "product".to_string();
    schema
}
