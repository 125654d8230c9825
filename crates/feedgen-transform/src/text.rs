//! Free-text cleanup: markup stripping and length limiting.

/// Strips markup, decodes HTML entities, collapses whitespace, and trims.
///
/// Entities are decoded once, then any markup the decode exposed is
/// stripped. A `<` that cannot open a tag (not followed by a letter, `/` or
/// `!`, or never closed) is kept as literal text.
#[must_use]
pub fn sanitize_text(input: &str) -> String {
    let decoded = decode_entities(input);
    let stripped = strip_tags(&decoded);
    collapse_whitespace(&stripped)
}

/// Limits a string to `max` bytes, flooring to a char boundary.
///
/// When truncation occurs, `suffix` is appended only if it still fits within
/// `max`; the result never exceeds `max` bytes.
#[must_use]
pub fn truncate_text(input: &str, max: usize, suffix: &str) -> String {
    if input.len() <= max {
        return input.to_string();
    }
    if suffix.len() <= max {
        let keep = floor_char_boundary(input, max - suffix.len());
        let mut out = String::with_capacity(keep + suffix.len());
        out.push_str(&input[..keep]);
        out.push_str(suffix);
        out
    } else {
        let keep = floor_char_boundary(input, max);
        input[..keep].to_string()
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find('<') {
        let after = &rest[open + 1..];
        let opens_tag = after
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '/' || ch == '!');
        if let Some(close) = after.find('>')
            && opens_tag
        {
            out.push_str(&rest[..open]);
            // A stripped tag separates words
            out.push(' ');
            rest = &after[close + 1..];
        } else {
            // Literal '<', or an unclosed tag: keep as text
            out.push_str(&rest[..=open]);
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp..];
        match decode_one_entity(after) {
            Some((decoded, consumed)) => {
                out.push_str(&decoded);
                rest = &after[consumed..];
            }
            None => {
                out.push('&');
                rest = &after[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decodes a single entity at the start of `input` (which begins with `&`).
/// Returns the replacement text and the number of bytes consumed.
fn decode_one_entity(input: &str) -> Option<(String, usize)> {
    let semicolon = input[1..].find(';')? + 1;
    let body = &input[1..semicolon];
    if body.is_empty() || body.len() > 10 {
        return None;
    }
    let decoded = match body {
        "amp" => "&".to_string(),
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "quot" => "\"".to_string(),
        "apos" => "'".to_string(),
        "nbsp" => " ".to_string(),
        _ => {
            let code = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok()?
            } else {
                return None;
            };
            char::from_u32(code)?.to_string()
        }
    };
    Some((decoded, semicolon + 1))
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_markup_and_entities() {
        assert_eq!(
            sanitize_text("<p>Great&nbsp;&amp; cheap</p>  laptop"),
            "Great & cheap laptop"
        );
        assert_eq!(sanitize_text("&lt;b&gt;bold&lt;/b&gt; text"), "bold text");
        assert_eq!(sanitize_text("  plain   text  "), "plain text");
    }

    #[test]
    fn sanitize_keeps_literal_angle_brackets() {
        assert_eq!(sanitize_text("a < b and 1 <2"), "a < b and 1 <2");
    }

    #[test]
    fn sanitize_decodes_numeric_entities() {
        assert_eq!(sanitize_text("caf&#233;"), "café");
        assert_eq!(sanitize_text("caf&#xE9;"), "café");
        assert_eq!(sanitize_text("broken &#; entity"), "broken &#; entity");
    }

    #[test]
    fn truncate_literals() {
        assert_eq!(truncate_text("hello world", 5, ""), "hello");
        let result = truncate_text("hello world", 5, "…");
        assert_eq!(result, "he…");
        assert!(result.len() <= 5);
    }

    #[test]
    fn truncate_short_input_untouched() {
        assert_eq!(truncate_text("abc", 10, "…"), "abc");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        // Each 'é' is two bytes; cutting mid-char must floor to a boundary
        let result = truncate_text("ééééé", 5, "");
        assert_eq!(result, "éé");
        assert!(result.len() <= 5);
    }

    #[test]
    fn truncate_oversized_suffix_dropped() {
        let result = truncate_text("hello world", 2, "...");
        assert_eq!(result, "he");
    }
}
