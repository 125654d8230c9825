//! JSON Lines feed writer.

use std::io::Write;

use serde_json::{Map, Value};

use feedgen_model::{AttrValue, FeedAttributes, PlatformSchema};

use crate::error::OutputError;
use crate::ordered_item_keys;

/// One compact JSON object per line. Attributes the schema declares as
/// boolean-typed are emitted as real JSON booleans rather than string tokens.
pub struct JsonLinesFeedWriter<'a, W: Write> {
    inner: W,
    schema: &'a PlatformSchema,
}

impl<'a, W: Write> JsonLinesFeedWriter<'a, W> {
    #[must_use]
    pub fn new(inner: W, schema: &'a PlatformSchema) -> Self {
        Self { inner, schema }
    }

    pub fn write_item(&mut self, attrs: &FeedAttributes) -> Result<(), OutputError> {
        let mut object = Map::new();
        for name in ordered_item_keys(self.schema, attrs) {
            let Some(value) = attrs.get(name) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            object.insert(name.to_string(), self.json_value(name, value));
        }
        serde_json::to_writer(&mut self.inner, &Value::Object(object))?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W, OutputError> {
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn json_value(&self, name: &str, value: &AttrValue) -> Value {
        if self.schema.boolean_attributes.contains(name) {
            return Value::Bool(is_true_token(value, &self.schema.true_token));
        }
        match value {
            AttrValue::Bool(flag) => Value::Bool(*flag),
            AttrValue::Number(number) => serde_json::Number::from_f64(*number)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(value.to_text())),
            AttrValue::Text(text) => Value::String(text.clone()),
            AttrValue::List(entries) => Value::Array(
                entries
                    .iter()
                    .map(|entry| Value::String(entry.clone()))
                    .collect(),
            ),
        }
    }
}

fn is_true_token(value: &AttrValue, true_token: &str) -> bool {
    match value {
        AttrValue::Bool(flag) => *flag,
        other => {
            let text = other.to_text();
            let text = text.trim();
            text.eq_ignore_ascii_case(true_token)
                || matches!(text.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedgen_platforms::default_registry;

    #[test]
    fn booleans_are_real_json_booleans() {
        let schema = default_registry().get("openai").expect("openai registered");
        let mut item = FeedAttributes::new();
        item.set("id", "SKU-1");
        item.set("is_eligible_checkout", "true");
        item.set("is_eligible_search", "false");

        let mut writer = JsonLinesFeedWriter::new(Vec::new(), &schema);
        writer.write_item(&item).expect("write item");
        let bytes = writer.finish().expect("finish");
        let line = String::from_utf8(bytes).expect("utf-8");

        let parsed: serde_json::Value = serde_json::from_str(line.trim()).expect("valid json");
        assert_eq!(parsed["id"], serde_json::json!("SKU-1"));
        assert_eq!(parsed["is_eligible_checkout"], serde_json::json!(true));
        assert_eq!(parsed["is_eligible_search"], serde_json::json!(false));
    }

    #[test]
    fn one_object_per_line_no_enclosing_array() {
        let schema = default_registry().get("openai").expect("openai registered");
        let mut first = FeedAttributes::new();
        first.set("id", "1");
        let mut second = FeedAttributes::new();
        second.set("id", "2");

        let mut writer = JsonLinesFeedWriter::new(Vec::new(), &schema);
        writer.write_item(&first).expect("first");
        writer.write_item(&second).expect("second");
        let text = String::from_utf8(writer.finish().expect("finish")).expect("utf-8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.starts_with('{')));
    }

    #[test]
    fn numbers_stay_numeric() {
        let schema = default_registry().get("openai").expect("openai registered");
        let mut item = FeedAttributes::new();
        item.set("inventory_quantity", AttrValue::Number(7.0));
        let mut writer = JsonLinesFeedWriter::new(Vec::new(), &schema);
        writer.write_item(&item).expect("write");
        let text = String::from_utf8(writer.finish().expect("finish")).expect("utf-8");
        let parsed: serde_json::Value = serde_json::from_str(text.trim()).expect("valid json");
        assert_eq!(parsed["inventory_quantity"], serde_json::json!(7.0));
    }
}
