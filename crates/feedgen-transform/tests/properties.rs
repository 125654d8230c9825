//! Property tests for the transformer library invariants.

use feedgen_model::AttrValue;
use feedgen_transform::TransformContext;
use proptest::prelude::*;

use feedgen_transform::enums::normalize_availability;
use feedgen_transform::text::truncate_text;

proptest! {
    /// The result of truncation never exceeds the byte limit, for any input.
    #[test]
    fn truncate_never_exceeds_limit(input in ".{0,64}", max in 0usize..48, suffix in ".{0,8}") {
        let out = truncate_text(&input, max, &suffix);
        prop_assert!(out.len() <= max, "len {} > max {max}", out.len());
    }

    /// Truncation is idempotent: a second application changes nothing.
    #[test]
    fn truncate_is_idempotent(input in ".{0,64}", max in 0usize..48) {
        let once = truncate_text(&input, max, "");
        prop_assert_eq!(truncate_text(&once, max, ""), once);
    }

    /// `normalize_availability` is total and its output always belongs to the
    /// destination's availability enumeration.
    #[test]
    fn availability_output_is_always_enumerated(input in ".{0,32}") {
        let mut ctx = TransformContext::new("AUD");
        ctx.availability_underscore = true;
        ctx.recognized_availability =
            vec!["preorder".to_string(), "backorder".to_string()];
        let out = normalize_availability(&AttrValue::text(input), &ctx);
        let token = out.to_text();
        prop_assert!(
            ["in_stock", "out_of_stock", "preorder", "backorder"].contains(&token.as_str()),
            "unexpected token: {}", token
        );
    }

    /// Numeric stock signals map purely on their sign.
    #[test]
    fn availability_numeric_sign(quantity in -1000.0f64..1000.0) {
        let ctx = TransformContext::new("AUD");
        let out = normalize_availability(&AttrValue::Number(quantity), &ctx);
        let expected = if quantity > 0.0 { "in_stock" } else { "out_of_stock" };
        prop_assert_eq!(out, AttrValue::text(expected));
    }
}
