//! Atom-style XML feed writer.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use feedgen_model::{AttrValue, FeedAttributes, PlatformSchema};

use crate::error::OutputError;
use crate::ordered_item_keys;

/// Streaming XML writer: declaration and root element up front, one item
/// element per product, root close on `finish`.
pub struct XmlFeedWriter<'a, W: Write> {
    writer: Writer<W>,
    schema: &'a PlatformSchema,
}

impl<'a, W: Write> XmlFeedWriter<'a, W> {
    pub fn new(inner: W, schema: &'a PlatformSchema) -> Result<Self, OutputError> {
        let mut writer = Writer::new_with_indent(inner, b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new(schema.root_element.as_str());
        for (prefix, uri) in &schema.namespaces {
            if prefix.is_empty() {
                root.push_attribute(("xmlns", uri.as_str()));
            } else {
                root.push_attribute((format!("xmlns:{prefix}").as_str(), uri.as_str()));
            }
        }
        writer.write_event(Event::Start(root))?;

        Ok(Self { writer, schema })
    }

    /// Writes one item element. Attributes appear in the schema's declared
    /// order; empty values are omitted; list values repeat the element.
    pub fn write_item(&mut self, attrs: &FeedAttributes) -> Result<(), OutputError> {
        let item = self.schema.item_element.as_str();
        self.writer.write_event(Event::Start(BytesStart::new(item)))?;

        for name in ordered_item_keys(self.schema, attrs) {
            let Some(value) = attrs.get(name) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let element = element_name(self.schema, name);
            match value {
                AttrValue::List(entries) => {
                    for entry in entries {
                        write_text_element(&mut self.writer, &element, entry)?;
                    }
                }
                other => write_text_element(&mut self.writer, &element, &other.to_text())?,
            }
        }

        self.writer.write_event(Event::End(BytesEnd::new(item)))?;
        Ok(())
    }

    /// Closes the root element and returns the underlying writer.
    pub fn finish(mut self) -> Result<W, OutputError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(self.schema.root_element.as_str())))?;
        Ok(self.writer.into_inner())
    }
}

fn element_name(schema: &PlatformSchema, attribute: &str) -> String {
    match &schema.item_prefix {
        Some(prefix) if schema.namespaced_attributes.contains(attribute) => {
            format!("{prefix}:{attribute}")
        }
        _ => attribute.to_string(),
    }
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), OutputError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedgen_platforms::default_registry;

    fn render(items: &[FeedAttributes]) -> String {
        let schema = default_registry().get("google").expect("google registered");
        let mut writer = XmlFeedWriter::new(Vec::new(), &schema).expect("begin feed");
        for item in items {
            writer.write_item(item).expect("write item");
        }
        let bytes = writer.finish().expect("finish feed");
        String::from_utf8(bytes).expect("utf-8 output")
    }

    #[test]
    fn declares_namespaces_on_the_root() {
        let output = render(&[]);
        assert!(output.contains("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(output.contains("xmlns=\"http://www.w3.org/2005/Atom\""));
        assert!(output.contains("xmlns:g=\"http://base.google.com/ns/1.0\""));
        assert!(output.trim_end().ends_with("</feed>"));
    }

    #[test]
    fn namespaced_attributes_get_the_prefix() {
        let mut item = FeedAttributes::new();
        item.set("id", "SKU-1");
        item.set("title", "Laptop");
        item.set("price", "25.50 AUD");
        let output = render(&[item]);
        assert!(output.contains("<g:id>SKU-1</g:id>"));
        assert!(output.contains("<title>Laptop</title>"));
        assert!(output.contains("<g:price>25.50 AUD</g:price>"));
    }

    #[test]
    fn list_values_repeat_the_element() {
        let mut item = FeedAttributes::new();
        item.set(
            "additional_image_link",
            AttrValue::List(vec!["a.jpg".to_string(), "b.jpg".to_string()]),
        );
        let output = render(&[item]);
        assert_eq!(output.matches("<g:additional_image_link>").count(), 2);
    }

    #[test]
    fn text_is_escaped() {
        let mut item = FeedAttributes::new();
        item.set("title", "Fish & Chips <deluxe>");
        let output = render(&[item]);
        assert!(output.contains("Fish &amp; Chips &lt;deluxe&gt;"));
    }

    #[test]
    fn empty_values_are_omitted() {
        let mut item = FeedAttributes::new();
        item.set("title", "Laptop");
        item.set("brand", "");
        let output = render(&[item]);
        assert!(!output.contains("<g:brand>"));
    }
}
