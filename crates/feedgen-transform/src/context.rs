//! Per-run transformer context.

use feedgen_model::PlatformSchema;

/// Destination conventions the transformer library needs at call time.
///
/// Copied out of the platform schema once per run so the transformer
/// functions stay schema-independent and trivially shareable across worker
/// threads.
#[derive(Debug, Clone)]
pub struct TransformContext {
    /// Currency applied by `format_price` when neither the parameter nor the
    /// value itself carries one.
    pub default_currency: String,
    /// Token `normalize_boolean` emits for truthy input.
    pub true_token: String,
    /// Token `normalize_boolean` emits for everything else.
    pub false_token: String,
    /// `in_stock`/`out_of_stock` vs `in stock`/`out of stock` spelling.
    pub availability_underscore: bool,
    /// Destination availability tokens that pass through verbatim
    /// (e.g. `preorder`, `backorder`, `limited_availability`).
    pub recognized_availability: Vec<String>,
}

impl TransformContext {
    /// Neutral context for callers outside any particular destination.
    #[must_use]
    pub fn new(default_currency: impl Into<String>) -> Self {
        Self {
            default_currency: default_currency.into(),
            true_token: "yes".to_string(),
            false_token: "no".to_string(),
            availability_underscore: true,
            recognized_availability: Vec::new(),
        }
    }

    /// Context carrying one destination's conventions.
    #[must_use]
    pub fn for_schema(schema: &PlatformSchema, default_currency: impl Into<String>) -> Self {
        Self {
            default_currency: default_currency.into(),
            true_token: schema.true_token.clone(),
            false_token: schema.false_token.clone(),
            availability_underscore: schema.availability_underscore,
            recognized_availability: schema
                .enumeration("availability")
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
        }
    }

    /// The destination's in-stock token under its spelling convention.
    #[must_use]
    pub fn in_stock_token(&self) -> &'static str {
        if self.availability_underscore {
            "in_stock"
        } else {
            "in stock"
        }
    }

    /// The destination's out-of-stock token under its spelling convention.
    #[must_use]
    pub fn out_of_stock_token(&self) -> &'static str {
        if self.availability_underscore {
            "out_of_stock"
        } else {
            "out of stock"
        }
    }
}
