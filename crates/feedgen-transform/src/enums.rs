//! Enumeration normalizers backed by fixed synonym tables.
//!
//! The tables are finite and explicit so every normalizer is total and
//! deterministic: unmapped input still produces a member of the destination's
//! enumerated output set.

use feedgen_model::AttrValue;

use crate::context::TransformContext;

/// Collapses truthy input (`1`, `true`, `yes`, `on`, case-insensitive) to the
/// destination's true-token; everything else becomes the false-token.
#[must_use]
pub fn normalize_boolean(value: &AttrValue, ctx: &TransformContext) -> AttrValue {
    let truthy = match value {
        AttrValue::Bool(flag) => *flag,
        other => matches!(
            other.to_text().trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
    };
    if truthy {
        AttrValue::text(ctx.true_token.clone())
    } else {
        AttrValue::text(ctx.false_token.clone())
    }
}

/// Maps a stock signal to the destination's availability token.
///
/// Numeric input: `> 0` is in stock, `<= 0` out of stock. Text input is
/// matched against a fixed synonym table; destination-recognized tokens
/// (`preorder`, `backorder`, …) pass through verbatim; anything unmatched
/// defaults to out of stock.
#[must_use]
pub fn normalize_availability(value: &AttrValue, ctx: &TransformContext) -> AttrValue {
    let token = match value {
        AttrValue::Number(number) => stock_token(*number > 0.0, ctx),
        AttrValue::Bool(flag) => stock_token(*flag, ctx),
        other => {
            let text = other.to_text();
            let needle = text.trim().to_lowercase();
            match needle.as_str() {
                "in_stock" | "in stock" | "instock" | "available" | "1" | "yes" => {
                    stock_token(true, ctx)
                }
                "out_of_stock" | "out of stock" | "outofstock" | "unavailable" | "0" | "no" => {
                    stock_token(false, ctx)
                }
                _ => {
                    let compact = compact_key(&needle);
                    if let Some(recognized) = ctx
                        .recognized_availability
                        .iter()
                        .find(|token| compact_key(token) == compact)
                    {
                        recognized.clone()
                    } else if let Some(quantity) = other.as_number() {
                        stock_token(quantity > 0.0, ctx)
                    } else {
                        stock_token(false, ctx)
                    }
                }
            }
        }
    };
    AttrValue::Text(token)
}

fn stock_token(in_stock: bool, ctx: &TransformContext) -> String {
    if in_stock {
        ctx.in_stock_token().to_string()
    } else {
        ctx.out_of_stock_token().to_string()
    }
}

/// Alphanumeric-only key for lenient token matching, so `pre-order`,
/// `preorder` and `pre_order` all land on the destination's canonical
/// spelling.
fn compact_key(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Collapses free-text condition to `new`, `refurbished`, or `used`;
/// unmatched input defaults to `new`.
#[must_use]
pub fn normalize_condition(value: &AttrValue) -> AttrValue {
    let token = match value.to_text().trim().to_lowercase().as_str() {
        "used" | "second hand" | "second-hand" | "secondhand" | "pre-owned" | "preowned" => "used",
        "refurbished" | "refurb" | "renewed" | "reconditioned" | "remanufactured" => "refurbished",
        _ => "new",
    };
    AttrValue::text(token)
}

/// Collapses free-text gender to `male`, `female`, or `unisex`; unmatched
/// input defaults to `unisex`.
#[must_use]
pub fn normalize_gender(value: &AttrValue) -> AttrValue {
    let token = match value.to_text().trim().to_lowercase().as_str() {
        "male" | "m" | "man" | "men" | "mens" | "men's" | "boy" | "boys" => "male",
        "female" | "f" | "woman" | "women" | "womens" | "women's" | "girl" | "girls" => "female",
        _ => "unisex",
    };
    AttrValue::text(token)
}

/// Collapses free-text age group to `newborn`, `infant`, `toddler`, `kids`,
/// or `adult`; unmatched input defaults to `adult`.
#[must_use]
pub fn normalize_age_group(value: &AttrValue) -> AttrValue {
    let token = match value.to_text().trim().to_lowercase().as_str() {
        "newborn" => "newborn",
        "infant" | "baby" | "babies" => "infant",
        "toddler" | "toddlers" => "toddler",
        "kids" | "kid" | "child" | "children" | "junior" | "youth" => "kids",
        _ => "adult",
    };
    AttrValue::text(token)
}
