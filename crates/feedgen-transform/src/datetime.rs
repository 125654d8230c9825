//! Date re-rendering for feed timestamp fields.

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use feedgen_model::AttrValue;

/// Re-renders a date-like value in the given strftime `output_format`.
///
/// Input that cannot be parsed, or a malformed output format, yields an
/// empty string; a bad date is never fatal for a single attribute.
#[must_use]
pub fn format_date(value: &AttrValue, output_format: &str) -> AttrValue {
    let text = value.to_text();
    let Some(datetime) = parse_datetime(text.trim()) else {
        return AttrValue::empty();
    };
    let items: Vec<Item<'_>> = StrftimeItems::new(output_format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return AttrValue::empty();
    }
    AttrValue::Text(datetime.format_with_items(items.iter()).to_string())
}

/// Parses the date formats catalogs commonly emit, in order of specificity.
#[must_use]
pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    if input.is_empty() {
        return None;
    }
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return Some(datetime);
        }
    }
    const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d.%m.%Y", "%Y%m%d"];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    None
}
