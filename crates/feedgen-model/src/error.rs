//! Engine-wide error taxonomy.
//!
//! Only configuration mistakes and output I/O are fatal; per-product
//! validation failures travel as [`crate::report::ProductIssues`] instead,
//! and transformer degradations never surface as errors at all.

use std::path::PathBuf;

use crate::schema::FeedFormat;

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("unknown platform code: {code}")]
    UnknownPlatform { code: String },

    #[error("mapping for '{attribute}' references unknown transformer: {name}")]
    UnknownTransformer { attribute: String, name: String },

    #[error("mapping for '{attribute}' references unknown rule function: {name}")]
    UnknownRuleFunction { attribute: String, name: String },

    #[error("format {format} is not supported by platform {platform}")]
    UnsupportedFormat {
        platform: String,
        format: FeedFormat,
    },

    #[error("failed to write feed output {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FeedError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
