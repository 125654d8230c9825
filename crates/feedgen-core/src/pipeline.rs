//! Feed generation pipeline.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, info};

use feedgen_map::{ResolveContext, resolve_all};
use feedgen_model::{
    FeedAttributes, FeedError, FeedRunReport, MappingRule, PlatformSchema, ProductIssues,
    ProductRecord,
};
use feedgen_transform::{TransformContext, apply_platform_pass};
use feedgen_validate::validate;

use crate::cancel::CancelToken;

/// Run-wide options supplied by the caller.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Currency applied when neither mapping nor value carries one.
    pub default_currency: String,
    /// Process products on the rayon pool. Output order is the input order
    /// either way.
    pub parallel: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            default_currency: "AUD".to_string(),
            parallel: true,
        }
    }
}

/// Outcome of a feed run: feed-eligible items in input order plus the
/// skip report.
#[derive(Debug, Clone)]
pub struct FeedRun {
    pub items: Vec<FeedAttributes>,
    pub report: FeedRunReport,
}

enum Outcome {
    Eligible(FeedAttributes),
    Skipped(ProductIssues),
    Cancelled,
}

/// Resolves, transforms, and validates every product against one schema.
///
/// Products are independent, so they may be processed concurrently; the
/// output preserves input order regardless. Validation failures skip the
/// offending product and are reported; only configuration mistakes (unknown
/// transformer or rule-function names) abort the run.
pub fn generate_feed(
    products: &[(ProductRecord, Option<ProductRecord>)],
    schema: &PlatformSchema,
    mappings: &BTreeMap<String, MappingRule>,
    category_map: &BTreeMap<String, String>,
    options: &PipelineOptions,
    cancel: &CancelToken,
) -> Result<FeedRun, FeedError> {
    let transform = TransformContext::for_schema(schema, options.default_currency.clone());
    let ctx = ResolveContext {
        schema,
        transform: &transform,
        category_map,
    };

    let outcomes: Vec<Outcome> = if options.parallel {
        products
            .par_iter()
            .map(|(product, parent)| process_one(product, parent.as_ref(), mappings, &ctx, cancel))
            .collect::<Result<_, _>>()?
    } else {
        products
            .iter()
            .map(|(product, parent)| process_one(product, parent.as_ref(), mappings, &ctx, cancel))
            .collect::<Result<_, _>>()?
    };

    let mut items = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Eligible(attrs) => items.push(attrs),
            Outcome::Skipped(issues) => skipped.push(issues),
            Outcome::Cancelled => {}
        }
    }

    let cancelled = cancel.is_cancelled();
    info!(
        platform = %schema.code,
        total = products.len(),
        written = items.len(),
        skipped = skipped.len(),
        cancelled,
        "feed run finished"
    );

    let report = FeedRunReport {
        platform_code: schema.code.clone(),
        total: products.len(),
        written: items.len(),
        skipped,
        cancelled,
    };
    Ok(FeedRun { items, report })
}

fn process_one(
    product: &ProductRecord,
    parent: Option<&ProductRecord>,
    mappings: &BTreeMap<String, MappingRule>,
    ctx: &ResolveContext<'_>,
    cancel: &CancelToken,
) -> Result<Outcome, FeedError> {
    if cancel.is_cancelled() {
        return Ok(Outcome::Cancelled);
    }

    let mut attrs = resolve_all(mappings, product, parent, ctx)?;
    apply_platform_pass(&mut attrs, ctx.schema, ctx.transform);

    let errors = validate(&attrs, ctx.schema);
    if errors.is_empty() {
        Ok(Outcome::Eligible(attrs))
    } else {
        debug!(
            product = %product.identity(),
            platform = %ctx.schema.code,
            errors = errors.len(),
            "product skipped"
        );
        Ok(Outcome::Skipped(ProductIssues {
            product_id: product.identity(),
            platform_code: ctx.schema.code.clone(),
            errors,
        }))
    }
}

/// The schema's default mapping table with caller overrides applied on top.
/// Overrides replace whole entries.
#[must_use]
pub fn merged_mappings(
    schema: &PlatformSchema,
    overrides: &BTreeMap<String, MappingRule>,
) -> BTreeMap<String, MappingRule> {
    let mut mappings = schema.default_mappings.clone();
    for (attribute, rule) in overrides {
        mappings.insert(attribute.clone(), rule.clone());
    }
    mappings
}
