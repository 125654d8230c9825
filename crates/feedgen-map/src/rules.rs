//! Rule function registry.
//!
//! `rule`-typed mappings dispatch by name to one of these functions, which
//! derive a value from the whole product record rather than a single
//! attribute. An unregistered name is a configuration error and aborts the
//! run.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use feedgen_model::{AttrValue, ProductRecord};

use crate::resolver::ResolveContext;

/// A registered rule function: derives one raw value from the product (and
/// its parent, when present).
pub type RuleFn =
    fn(&ProductRecord, Option<&ProductRecord>, &ResolveContext<'_>) -> AttrValue;

static REGISTRY: OnceLock<BTreeMap<&'static str, RuleFn>> = OnceLock::new();

fn registry() -> &'static BTreeMap<&'static str, RuleFn> {
    REGISTRY.get_or_init(|| {
        let mut map: BTreeMap<&'static str, RuleFn> = BTreeMap::new();
        map.insert("stock_status", stock_status);
        map.insert("identifier_exists", identifier_exists);
        map.insert("shipping_weight", shipping_weight);
        map
    })
}

pub(crate) fn lookup(name: &str) -> Option<RuleFn> {
    registry().get(name).copied()
}

/// All registered rule function names, sorted.
#[must_use]
pub fn rule_names() -> Vec<&'static str> {
    registry().keys().copied().collect()
}

/// Infers availability from the stock bookkeeping attributes.
///
/// In stock when quantity is positive, or when stock is not managed at all,
/// or when backorders are accepted; out of stock otherwise. The token
/// follows the destination's spelling convention.
fn stock_status(
    product: &ProductRecord,
    _parent: Option<&ProductRecord>,
    ctx: &ResolveContext<'_>,
) -> AttrValue {
    let manage_stock = product
        .get("manage_stock")
        .map(is_truthy)
        .unwrap_or(true);
    let backorders = product.get("backorders").map(is_truthy).unwrap_or(false);
    let quantity = product
        .get("quantity")
        .or_else(|| product.get("qty"))
        .and_then(AttrValue::as_number)
        .unwrap_or(0.0);

    let in_stock = !manage_stock || backorders || quantity > 0.0;
    if in_stock {
        AttrValue::text(ctx.transform.in_stock_token())
    } else {
        AttrValue::text(ctx.transform.out_of_stock_token())
    }
}

/// Destination "identifier exists" flag: the platform's false-token when the
/// product carries none of gtin/mpn/brand, the true-token otherwise.
fn identifier_exists(
    product: &ProductRecord,
    _parent: Option<&ProductRecord>,
    ctx: &ResolveContext<'_>,
) -> AttrValue {
    let has_identifier = ["gtin", "ean", "mpn", "brand", "manufacturer"]
        .iter()
        .any(|code| product.has_value(code));
    if has_identifier {
        AttrValue::text(ctx.schema.true_token.clone())
    } else {
        AttrValue::text(ctx.schema.false_token.clone())
    }
}

/// Weight plus its unit, e.g. `1.5 kg`. The unit comes from the product's
/// `weight_unit` attribute, defaulting to kilograms.
fn shipping_weight(
    product: &ProductRecord,
    _parent: Option<&ProductRecord>,
    _ctx: &ResolveContext<'_>,
) -> AttrValue {
    let Some(weight) = product.get("weight").and_then(AttrValue::as_number) else {
        return AttrValue::empty();
    };
    let unit = match product.text("weight_unit").trim() {
        "" => "kg".to_string(),
        unit => unit.to_string(),
    };
    AttrValue::Text(format!("{weight} {unit}"))
}

fn is_truthy(value: &AttrValue) -> bool {
    match value {
        AttrValue::Bool(flag) => *flag,
        AttrValue::Number(number) => *number != 0.0,
        other => matches!(
            other.to_text().trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
    }
}
