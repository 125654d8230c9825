//! Serialization errors.

use std::path::PathBuf;

use feedgen_model::FeedError;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Configuration mistake (unsupported format).
    #[error(transparent)]
    Config(#[from] FeedError),

    #[error("feed write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("xml encoding failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("csv encoding failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure while publishing the final feed file. The partially written
    /// temporary sink is removed; no half-written feed is ever published.
    #[error("failed to publish feed to {path}: {source}")]
    Publish {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
