//! Destination taxonomy files: lazy loading and free-text matching.
//!
//! A taxonomy is a flat UTF-8 text file, one category per line, optionally
//! prefixed with a numeric id (`166 - Electronics > Computers > Laptops`).
//! Each file is read at most once per process and the parsed index is shared
//! read-only across concurrent searches.

mod index;
mod matcher;

pub use index::{TaxonomyEntry, TaxonomyIndex};
pub use matcher::load_taxonomy;
