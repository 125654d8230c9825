//! Process-lifetime taxonomy cache.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::warn;

use crate::index::TaxonomyIndex;

static CACHE: OnceLock<Mutex<BTreeMap<PathBuf, Arc<TaxonomyIndex>>>> = OnceLock::new();

fn cache() -> &'static Mutex<BTreeMap<PathBuf, Arc<TaxonomyIndex>>> {
    CACHE.get_or_init(|| Mutex::new(BTreeMap::new()))
}

/// Loads (or returns the cached) taxonomy index for a file.
///
/// Each file is read at most once per process; the parsed index is immutable
/// afterwards, so concurrent searches need no further locking. A missing or
/// unreadable file degrades to an empty index and a warning, never an error.
#[must_use]
pub fn load_taxonomy(path: &Path) -> Arc<TaxonomyIndex> {
    let mut guard = cache().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(index) = guard.get(path) {
        return Arc::clone(index);
    }
    let index = match std::fs::read_to_string(path) {
        Ok(content) => Arc::new(TaxonomyIndex::parse(&content)),
        Err(error) => {
            warn!(path = %path.display(), %error, "taxonomy file unreadable, matching disabled");
            Arc::new(TaxonomyIndex::empty())
        }
    };
    guard.insert(path.to_path_buf(), Arc::clone(&index));
    index
}
