//! Cross-field price rules.

use feedgen_model::FeedAttributes;
use feedgen_transform::price::parse_price;

/// Sale price must be strictly less than the regular price, compared
/// numerically after stripping any currency annotation.
pub fn check_sale_price(attrs: &FeedAttributes, errors: &mut Vec<String>) {
    if !attrs.has_value("price") || !attrs.has_value("sale_price") {
        return;
    }
    let (regular, _) = parse_price(&attrs.text("price"));
    let (sale, _) = parse_price(&attrs.text("sale_price"));
    let (Some(regular), Some(sale)) = (regular, sale) else {
        // Malformed amounts are reported by the price format rule instead
        return;
    };
    if sale >= regular {
        errors.push(format!(
            "Sale price {sale:.2} must be lower than regular price {regular:.2}"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_above_regular_is_an_error() {
        let mut attrs = FeedAttributes::new();
        attrs.set("price", "20.00 USD");
        attrs.set("sale_price", "25.00 USD");
        let mut errors = Vec::new();
        check_sale_price(&attrs, &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("must be lower than regular price"));
    }

    #[test]
    fn equal_prices_are_rejected_too() {
        let mut attrs = FeedAttributes::new();
        attrs.set("price", "20.00 USD");
        attrs.set("sale_price", "20.00 USD");
        let mut errors = Vec::new();
        check_sale_price(&attrs, &mut errors);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn discounted_sale_passes() {
        let mut attrs = FeedAttributes::new();
        attrs.set("price", "25.00 USD");
        attrs.set("sale_price", "20.00 USD");
        let mut errors = Vec::new();
        check_sale_price(&attrs, &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_sale_price_is_fine() {
        let mut attrs = FeedAttributes::new();
        attrs.set("price", "25.00 USD");
        let mut errors = Vec::new();
        check_sale_price(&attrs, &mut errors);
        assert!(errors.is_empty());
    }
}
