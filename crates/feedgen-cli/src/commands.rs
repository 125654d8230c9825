//! Command implementations.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use tracing::info;

use feedgen_core::{CancelToken, FeedRun, PipelineOptions, generate_feed, merged_mappings};
use feedgen_model::{FeedFormat, FeedRunReport, MappingRule, ProductRecord};
use feedgen_output::publish_feed;
use feedgen_platforms::default_registry;
use feedgen_taxonomy::load_taxonomy;

use crate::cli::{GenerateArgs, TaxonomyArgs};

/// One element of the product input file: flat attributes plus an optional
/// nested parent record.
#[derive(Debug, Deserialize)]
struct ProductInput {
    #[serde(default)]
    parent: Option<ProductRecord>,
    #[serde(flatten)]
    product: ProductRecord,
}

/// Outcome handed to the summary printer.
pub struct GenerateResult {
    pub platform_name: String,
    pub report: FeedRunReport,
    pub output: PathBuf,
    pub format: FeedFormat,
    pub report_path: Option<PathBuf>,
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let schema = default_registry().get(&args.platform)?;
    let format = args
        .format
        .map(FeedFormat::from)
        .unwrap_or(schema.default_format);

    let raw = fs::read_to_string(&args.products)
        .with_context(|| format!("read products file {}", args.products.display()))?;
    let inputs: Vec<ProductInput> =
        serde_json::from_str(&raw).context("parse products file (expected a JSON array)")?;
    let products: Vec<(ProductRecord, Option<ProductRecord>)> = inputs
        .into_iter()
        .map(|input| (input.product, input.parent))
        .collect();

    let overrides = match &args.mappings {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read mapping overrides {}", path.display()))?;
            toml::from_str::<BTreeMap<String, MappingRule>>(&raw)
                .context("parse mapping overrides")?
        }
        None => BTreeMap::new(),
    };
    let mappings = merged_mappings(&schema, &overrides);

    let category_map = match &args.category_map {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read category map {}", path.display()))?;
            serde_json::from_str::<BTreeMap<String, String>>(&raw).context("parse category map")?
        }
        None => BTreeMap::new(),
    };

    let options = PipelineOptions {
        default_currency: args.currency.clone(),
        parallel: !args.sequential,
    };

    let spinner = progress_spinner(&schema.display_name, products.len());
    let run: FeedRun = generate_feed(
        &products,
        &schema,
        &mappings,
        &category_map,
        &options,
        &CancelToken::new(),
    )?;
    spinner.finish_and_clear();

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("feed_{}.{format}", schema.code)));
    publish_feed(&output, &run.items, &schema, format)?;
    info!(output = %output.display(), written = run.report.written, "feed written");

    let report_path = match &args.report {
        Some(path) => {
            let json =
                serde_json::to_string_pretty(&run.report).context("encode skip report")?;
            fs::write(path, json)
                .with_context(|| format!("write skip report {}", path.display()))?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(GenerateResult {
        platform_name: schema.display_name.clone(),
        report: run.report,
        output,
        format,
        report_path,
    })
}

pub fn run_platforms() -> Result<()> {
    for schema in default_registry().iter() {
        let formats: Vec<String> = schema
            .supported_formats
            .iter()
            .map(ToString::to_string)
            .collect();
        println!(
            "{:<14} {:<28} formats: {}",
            schema.code,
            schema.display_name,
            formats.join(", ")
        );
    }
    Ok(())
}

pub fn run_taxonomy(args: &TaxonomyArgs) -> Result<()> {
    let schema = default_registry().get(&args.platform)?;
    let Some(path) = &schema.taxonomy_file else {
        anyhow::bail!(
            "platform {} does not support category mapping",
            schema.code
        );
    };
    let index = load_taxonomy(path);
    let matches = index.search(&args.query, args.limit);
    if matches.is_empty() {
        println!("no matches");
        return Ok(());
    }
    for entry in matches {
        if entry.id.is_empty() {
            println!("{}", entry.path);
        } else {
            println!("{:<8} {}", entry.id, entry.path);
        }
    }
    Ok(())
}

fn progress_spinner(platform: &str, total: usize) -> ProgressBar {
    let spinner = ProgressBar::new_spinner().with_message(format!(
        "generating {platform} feed for {total} products"
    ));
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
