//! Sample identifier rewriting.
//!
//! Raw identifiers are `/`-separated, e.g. `12345/ab`. The rewrite:
//!
//! 1. Appends the literal suffix marker `d` to the first part when absent.
//! 2. Substitutes the two Greek capitals that appear in lab exports for
//!    their Latin look-alikes. Everything else passes through; this is
//!    intentionally partial, not a full transliteration.
//! 3. Joins all parts with `_`.
//!
//! There are no error paths. Empty parts survive as empty segments.

/// Substitute Greek capital Alpha and Beta with their Latin look-alikes.
pub fn transliterate(part: &str) -> String {
    part.chars()
        .map(|c| match c {
            'Α' => 'A',
            'Β' => 'B',
            _ => c,
        })
        .collect()
}

/// Rewrite a raw `/`-separated sample identifier into its derived form.
///
/// # Example
/// ```
/// use specmerge::transform_sample_id;
///
/// assert_eq!(transform_sample_id("12345/ab"), "12345d_ab");
/// assert_eq!(transform_sample_id("12345d/ab"), "12345d_ab");
/// ```
pub fn transform_sample_id(raw: &str) -> String {
    let mut parts: Vec<String> = raw.split('/').map(str::to_string).collect();
    // split always yields at least one part, even for empty input
    if !parts[0].ends_with('d') {
        parts[0].push('d');
    }

    parts
        .iter()
        .map(|p| transliterate(p))
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transliterate_greek_capitals() {
        assert_eq!(transliterate("ΑΒ12"), "AB12");
    }

    #[test]
    fn test_transliterate_is_partial() {
        // Only Alpha and Beta are mapped; Gamma and lowercase pass through.
        assert_eq!(transliterate("Γα"), "Γα");
    }

    #[test]
    fn test_suffix_appended_when_absent() {
        assert_eq!(transform_sample_id("12345/ab"), "12345d_ab");
    }

    #[test]
    fn test_suffix_not_duplicated() {
        assert_eq!(transform_sample_id("12345d/ab"), "12345d_ab");
    }

    #[test]
    fn test_suffix_on_first_part_only() {
        assert_eq!(transform_sample_id("123/456"), "123d_456");
    }

    #[test]
    fn test_greek_substitution_in_parts() {
        assert_eq!(transform_sample_id("Α1/Β2"), "A1d_B2");
        assert_eq!(transform_sample_id("Α1d/Β2"), "A1d_B2");
    }

    #[test]
    fn test_empty_parts_preserved() {
        assert_eq!(transform_sample_id("12345d//ab"), "12345d__ab");
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(transform_sample_id("12345"), "12345d");
    }

    #[test]
    fn test_empty_input_gets_suffix() {
        assert_eq!(transform_sample_id(""), "d");
    }
}
