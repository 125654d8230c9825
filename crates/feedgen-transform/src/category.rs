//! Category path depth limiting.

use feedgen_model::AttrValue;

/// Truncates a delimited category path to at most `max_levels` segments.
#[must_use]
pub fn limit_category_depth(value: &AttrValue, max_levels: usize, separator: &str) -> AttrValue {
    if max_levels == 0 {
        return AttrValue::empty();
    }
    let text = value.to_text();
    let segments: Vec<&str> = text.split(separator).collect();
    if segments.len() <= max_levels {
        return AttrValue::Text(text);
    }
    AttrValue::Text(segments[..max_levels].join(separator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_paths_are_cut() {
        let path = AttrValue::text("Electronics > Computers > Laptops > Gaming");
        assert_eq!(
            limit_category_depth(&path, 2, " > "),
            AttrValue::text("Electronics > Computers")
        );
    }

    #[test]
    fn shallow_paths_unchanged() {
        let path = AttrValue::text("Electronics > Computers");
        assert_eq!(limit_category_depth(&path, 3, " > "), path);
    }

    #[test]
    fn zero_levels_empties_the_path() {
        let path = AttrValue::text("Electronics");
        assert_eq!(limit_category_depth(&path, 0, " > "), AttrValue::empty());
    }
}
