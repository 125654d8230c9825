//! Feed serialization: XML, CSV, and JSON Lines encoders.
//!
//! Writers are streaming: items are accepted one at a time so a caller can
//! bound memory on very large catalogs. Requesting a format outside the
//! schema's supported set is a configuration error.

mod csv;
mod error;
mod jsonl;
mod publish;
mod xml;

pub use self::csv::{CsvFeedWriter, csv_columns};
pub use self::error::OutputError;
pub use self::jsonl::JsonLinesFeedWriter;
pub use self::publish::publish_feed;
pub use self::xml::XmlFeedWriter;

use std::io::Write;

use feedgen_model::{FeedAttributes, FeedError, FeedFormat, PlatformSchema};

/// Serializes a whole feed to `writer` in the requested format.
pub fn serialize_feed<W: Write>(
    writer: W,
    items: &[FeedAttributes],
    schema: &PlatformSchema,
    format: FeedFormat,
) -> Result<(), OutputError> {
    if !schema.supports_format(format) {
        return Err(FeedError::UnsupportedFormat {
            platform: schema.code.clone(),
            format,
        }
        .into());
    }
    match format {
        FeedFormat::Xml => {
            let mut feed = XmlFeedWriter::new(writer, schema)?;
            for item in items {
                feed.write_item(item)?;
            }
            feed.finish()?;
        }
        FeedFormat::Csv => {
            let mut feed = CsvFeedWriter::new(writer, csv_columns(schema, items));
            for item in items {
                feed.write_item(item)?;
            }
            feed.finish()?;
        }
        FeedFormat::JsonLines => {
            let mut feed = JsonLinesFeedWriter::new(writer, schema);
            for item in items {
                feed.write_item(item)?;
            }
            feed.finish()?;
        }
    }
    Ok(())
}

/// Item attribute names in output order: the schema's declared order first,
/// then any undeclared attributes in name order.
pub(crate) fn ordered_item_keys<'a>(
    schema: &'a PlatformSchema,
    attrs: &'a FeedAttributes,
) -> Vec<&'a str> {
    let mut keys: Vec<&str> = schema
        .attribute_order()
        .filter(|name| attrs.get(name).is_some())
        .collect();
    for key in attrs.keys() {
        if !schema.attribute_order().any(|name| name == key.as_str()) {
            keys.push(key.as_str());
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedgen_platforms::default_registry;

    #[test]
    fn unsupported_format_is_a_configuration_error() {
        let schema = default_registry().get("idealo").expect("idealo registered");
        let error = serialize_feed(Vec::new(), &[], &schema, FeedFormat::Xml)
            .expect_err("idealo is csv-only");
        assert!(matches!(
            error,
            OutputError::Config(FeedError::UnsupportedFormat { .. })
        ));
    }
}
