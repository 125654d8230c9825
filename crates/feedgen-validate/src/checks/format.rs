//! Fixed-pattern field checks.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use feedgen_model::{FeedAttributes, FormatRule, PlatformSchema};

static EAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{13}$").expect("valid EAN pattern"));

static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d{2}\s[A-Z]{3}$").expect("valid price pattern"));

pub fn check(attrs: &FeedAttributes, schema: &PlatformSchema, errors: &mut Vec<String>) {
    for rule in &schema.format_rules {
        match rule {
            FormatRule::Ean { attribute } => {
                check_pattern(attrs, attribute, &EAN_PATTERN, "a 13-digit EAN", errors);
            }
            FormatRule::Price { attribute } => {
                check_pattern(
                    attrs,
                    attribute,
                    &PRICE_PATTERN,
                    "an amount with currency (e.g. 25.50 AUD)",
                    errors,
                );
            }
            FormatRule::Url { attribute } => check_url(attrs, attribute, errors),
        }
    }
}

fn check_pattern(
    attrs: &FeedAttributes,
    attribute: &str,
    pattern: &Regex,
    expected: &str,
    errors: &mut Vec<String>,
) {
    if !attrs.has_value(attribute) {
        return;
    }
    let value = attrs.text(attribute);
    if !pattern.is_match(value.trim()) {
        errors.push(format!(
            "Attribute {attribute} value '{value}' is not {expected}"
        ));
    }
}

fn check_url(attrs: &FeedAttributes, attribute: &str, errors: &mut Vec<String>) {
    if !attrs.has_value(attribute) {
        return;
    }
    let value = attrs.text(attribute);
    match Url::parse(value.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(format!(
            "Attribute {attribute} value '{value}' is not a well-formed URL"
        )),
    }
}
