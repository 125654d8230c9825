//! CSV feed writer.

use std::io::Write;

use csv::WriterBuilder;

use feedgen_model::{FeedAttributes, PlatformSchema};

use crate::error::OutputError;

/// Header columns for a feed: declared attributes present in at least one
/// item, in schema order, then undeclared attributes in name order. The
/// column set is stable across the whole feed.
#[must_use]
pub fn csv_columns(schema: &PlatformSchema, items: &[FeedAttributes]) -> Vec<String> {
    let mut columns: Vec<String> = schema
        .attribute_order()
        .filter(|name| items.iter().any(|item| item.get(name).is_some()))
        .map(str::to_string)
        .collect();
    let mut extras: Vec<String> = Vec::new();
    for item in items {
        for key in item.keys() {
            if !columns.iter().any(|column| column == key)
                && !extras.iter().any(|extra| extra == key)
            {
                extras.push(key.clone());
            }
        }
    }
    extras.sort();
    columns.extend(extras);
    columns
}

/// Streaming CSV writer over a fixed column set.
pub struct CsvFeedWriter<W: Write> {
    writer: csv::Writer<W>,
    columns: Vec<String>,
    header_written: bool,
}

impl<W: Write> CsvFeedWriter<W> {
    #[must_use]
    pub fn new(inner: W, columns: Vec<String>) -> Self {
        Self {
            writer: WriterBuilder::new().from_writer(inner),
            columns,
            header_written: false,
        }
    }

    /// Writes one row; missing values render as empty cells.
    pub fn write_item(&mut self, attrs: &FeedAttributes) -> Result<(), OutputError> {
        if !self.header_written {
            self.writer.write_record(&self.columns)?;
            self.header_written = true;
        }
        let row: Vec<String> = self
            .columns
            .iter()
            .map(|column| attrs.text(column))
            .collect();
        self.writer.write_record(&row)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), OutputError> {
        if !self.header_written {
            self.writer.write_record(&self.columns)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedgen_platforms::default_registry;

    #[test]
    fn header_follows_schema_order_with_extras_last() {
        let schema = default_registry().get("google").expect("google registered");
        let mut first = FeedAttributes::new();
        first.set("id", "1");
        first.set("price", "25.50 AUD");
        first.set("zz_custom", "x");
        let mut second = FeedAttributes::new();
        second.set("id", "2");
        second.set("title", "Laptop");

        let columns = csv_columns(&schema, &[first.clone(), second.clone()]);
        assert_eq!(columns[0], "id");
        // Declared order: title comes before price in the schema
        let title_pos = columns.iter().position(|c| c == "title").expect("title");
        let price_pos = columns.iter().position(|c| c == "price").expect("price");
        assert!(title_pos < price_pos);
        assert_eq!(columns.last().map(String::as_str), Some("zz_custom"));

        let mut writer = CsvFeedWriter::new(Vec::new(), columns);
        writer.write_item(&first).expect("row one");
        writer.write_item(&second).expect("row two");
        writer.finish().expect("flush");
    }

    #[test]
    fn missing_values_render_empty() {
        let schema = default_registry().get("custom").expect("custom registered");
        let mut first = FeedAttributes::new();
        first.set("a", "1");
        let mut second = FeedAttributes::new();
        second.set("b", "2");

        let columns = csv_columns(&schema, &[first.clone(), second.clone()]);
        assert_eq!(columns, vec!["a".to_string(), "b".to_string()]);

        let mut buffer = Vec::new();
        {
            let mut writer = CsvFeedWriter::new(&mut buffer, columns);
            writer.write_item(&first).expect("row one");
            writer.write_item(&second).expect("row two");
            writer.finish().expect("flush");
        }
        let text = String::from_utf8(buffer).expect("utf-8");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("a,b"));
        assert_eq!(lines.next(), Some("1,"));
        assert_eq!(lines.next(), Some(",2"));
    }

    #[test]
    fn empty_feed_still_emits_the_header() {
        let mut buffer = Vec::new();
        {
            let writer = CsvFeedWriter::new(&mut buffer, vec!["id".to_string()]);
            writer.finish().expect("flush");
        }
        let text = String::from_utf8(buffer).expect("utf-8");
        assert_eq!(text.trim_end(), "id");
    }
}
