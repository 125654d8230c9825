//! CLI argument definitions for the feed generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use feedgen_model::FeedFormat;

#[derive(Parser)]
#[command(
    name = "feedgen",
    version,
    about = "Multi-platform product feed generator",
    long_about = "Generate shopping feeds from catalog product data.\n\n\
                  Supports Google Shopping, Facebook/Meta, Bing, Pinterest, Idealo,\n\
                  Trovaprezzi, OpenAI Commerce, Google Local Inventory and custom\n\
                  exports, in XML, CSV and JSON Lines."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a feed for one destination platform.
    Generate(GenerateArgs),

    /// List the registered destination platforms.
    Platforms,

    /// Search a destination's category taxonomy.
    Taxonomy(TaxonomyArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Product JSON file: an array of flat attribute objects. An optional
    /// nested "parent" object supplies the variant parent record.
    #[arg(value_name = "PRODUCTS")]
    pub products: PathBuf,

    /// Destination platform code (see `feedgen platforms`).
    #[arg(long)]
    pub platform: String,

    /// Output format (default: the platform's default format).
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output file (default: feed_<platform>.<ext> in the working directory).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Default currency for prices without one.
    #[arg(long, default_value = "AUD")]
    pub currency: String,

    /// TOML file of mapping overrides (attribute -> mapping rule), merged
    /// over the platform's default mapping table.
    #[arg(long, value_name = "PATH")]
    pub mappings: Option<PathBuf>,

    /// JSON file mapping category keys to destination taxonomy values,
    /// consumed by taxonomy-typed mapping rules.
    #[arg(long = "category-map", value_name = "PATH")]
    pub category_map: Option<PathBuf>,

    /// Write the structured skip report (JSON) to this path.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Process products sequentially instead of on the worker pool.
    #[arg(long)]
    pub sequential: bool,
}

#[derive(Parser)]
pub struct TaxonomyArgs {
    /// Free-text query; every word must match.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Platform whose taxonomy file to search.
    #[arg(long)]
    pub platform: String,

    /// Maximum number of matches to print.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Xml,
    Csv,
    Jsonl,
}

impl From<FormatArg> for FeedFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Xml => FeedFormat::Xml,
            FormatArg::Csv => FeedFormat::Csv,
            FormatArg::Jsonl => FeedFormat::JsonLines,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
