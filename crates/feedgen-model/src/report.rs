//! Structured reporting for a feed run.

use serde::{Deserialize, Serialize};

/// Validation errors that excluded one product from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductIssues {
    pub product_id: String,
    pub platform_code: String,
    pub errors: Vec<String>,
}

/// Outcome of one feed run: how many products were written, which were
/// skipped and why, and whether the run was cancelled mid-flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedRunReport {
    pub platform_code: String,
    pub total: usize,
    pub written: usize,
    pub skipped: Vec<ProductIssues>,
    pub cancelled: bool,
}

impl FeedRunReport {
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    #[must_use]
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}
