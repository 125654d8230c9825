//! Atomic feed publishing.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::debug;

use feedgen_model::{FeedAttributes, FeedFormat, PlatformSchema};

use crate::error::OutputError;
use crate::serialize_feed;

/// Writes the feed to a temporary sibling and renames it into place only on
/// full success, so a failed run never corrupts a previously published feed.
pub fn publish_feed(
    path: &Path,
    items: &[FeedAttributes],
    schema: &PlatformSchema,
    format: FeedFormat,
) -> Result<(), OutputError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Publish {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let tmp_path = tmp_sibling(path);
    let result = write_to(&tmp_path, items, schema, format);
    if let Err(error) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        OutputError::Publish {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(path = %path.display(), items = items.len(), "feed published");
    Ok(())
}

fn write_to(
    tmp_path: &Path,
    items: &[FeedAttributes],
    schema: &PlatformSchema,
    format: FeedFormat,
) -> Result<(), OutputError> {
    let file = File::create(tmp_path).map_err(|source| OutputError::Publish {
        path: tmp_path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);
    serialize_feed(writer, items, schema, format)
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
