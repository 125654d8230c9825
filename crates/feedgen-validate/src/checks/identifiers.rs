//! Identifier-exists rule.
//!
//! Destinations that require product identifiers accept identifier-less
//! products only when `identifier_exists` explicitly carries the
//! destination's false-token.

use feedgen_model::{FeedAttributes, PlatformSchema};

const IDENTIFIER_ATTRIBUTES: [&str; 3] = ["gtin", "mpn", "brand"];

pub fn check(attrs: &FeedAttributes, schema: &PlatformSchema, errors: &mut Vec<String>) {
    let has_identifier = IDENTIFIER_ATTRIBUTES
        .iter()
        .any(|name| attrs.has_value(name));
    if has_identifier {
        return;
    }
    let flag = attrs.text("identifier_exists");
    if !flag.trim().eq_ignore_ascii_case(&schema.false_token) {
        errors.push(format!(
            "No gtin, mpn or brand supplied and identifier_exists is not '{}'",
            schema.false_token
        ));
    }
}
