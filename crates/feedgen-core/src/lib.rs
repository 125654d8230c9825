//! Per-product feed pipeline: resolve → transform → validate, fanned out
//! over a worker pool with stable output order.

mod cancel;
mod pipeline;

pub use cancel::CancelToken;
pub use pipeline::{FeedRun, PipelineOptions, generate_feed, merged_mappings};
