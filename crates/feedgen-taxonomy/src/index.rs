//! Parsed taxonomy index and AND-substring search.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Leading `<digits> - ` id prefix of a taxonomy line.
static ID_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*-\s*").expect("valid id-prefix pattern"));

/// One taxonomy category: optional numeric id plus the category path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    /// Numeric id as written in the file; empty for id-less lines.
    pub id: String,
    pub path: String,
}

/// One line of the file, pre-lowered for matching.
#[derive(Debug, Clone)]
struct IndexedLine {
    entry: TaxonomyEntry,
    lowered: String,
}

/// An immutable, fully-parsed taxonomy file.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyIndex {
    lines: Vec<IndexedLine>,
}

impl TaxonomyIndex {
    /// Parses taxonomy file content, dropping blank and `#`-comment lines.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut lines = Vec::new();
        for raw in content.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let entry = parse_line(line);
            lines.push(IndexedLine {
                lowered: line.to_lowercase(),
                entry,
            });
        }
        Self { lines }
    }

    /// An index with no entries, used for missing or unreadable files.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Finds up to `limit` entries matching every whitespace-split term of
    /// the query as a case-insensitive substring, in file order.
    ///
    /// Scanning stops as soon as `limit` matches are found.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<TaxonomyEntry> {
        if limit == 0 {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        let terms: Vec<&str> = needle.split_whitespace().collect();
        let mut matches = Vec::new();
        for line in &self.lines {
            if terms.iter().all(|term| line.lowered.contains(term)) {
                matches.push(line.entry.clone());
                if matches.len() >= limit {
                    break;
                }
            }
        }
        matches
    }
}

fn parse_line(line: &str) -> TaxonomyEntry {
    if let Some(captures) = ID_PREFIX.captures(line) {
        let id = captures[1].to_string();
        let path = line[captures[0].len()..].to_string();
        TaxonomyEntry { id, path }
    } else {
        TaxonomyEntry {
            id: String::new(),
            path: line.to_string(),
        }
    }
}
