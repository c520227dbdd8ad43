//! Parsing of enumerate bracket arguments into numbering descriptors.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shape of a recognized format argument, applied after bracket stripping
/// and trimming: an optional `(` prefix, exactly one alphabet character,
/// an optional `.` or `)` suffix. A bare alphabet letter matches the shape
/// with both captures absent.
static SHAPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| return Regex::new(r"^(\()?([1aAiI])([.)])?$").expect("valid regex"));

/// The five supported numbering alphabets, selected by the characters
/// `1 a A i I` in a format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alphabet {
    /// Base-10 numbering: `1, 2, 3, …`
    Decimal,
    /// Bijective base-26 letters: `a, b, …, z, aa, ab, …`
    LowerLatin,
    /// Lowercase Roman numerals: `i, ii, iii, iv, …`
    LowerRoman,
    /// Uppercase variant of [`Alphabet::LowerLatin`].
    UpperLatin,
    /// Uppercase variant of [`Alphabet::LowerRoman`].
    UpperRoman,
}

/// Normalized numbering configuration for one enumerate block, parsed once
/// from its bracket argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    /// Which numbering alphabet to count in.
    pub alphabet: Alphabet,
    /// Decoration placed before the numeral, e.g. `(` from `[(a)]`.
    pub prefix: String,
    /// Decoration placed after the numeral, e.g. `)` from `[(a)]`.
    pub suffix: String,
}

impl Default for FormatDescriptor {
    /// The decimal default used when the argument is absent, empty, or
    /// unrecognized: `1.`, `2.`, `3.`, …
    fn default() -> Self {
        return Self {
            alphabet: Alphabet::Decimal,
            prefix: String::new(),
            suffix: ".".to_string(),
        };
    }
}

/// Parse a raw bracket argument (brackets included) into a descriptor.
///
/// An absent or empty argument yields the decimal default silently. An
/// argument that doesn't match the shape also yields the decimal default,
/// plus the rejected text so the caller can surface a diagnostic — never
/// an error, since the block must still render.
pub fn parse_format_argument(raw: Option<&str>) -> (FormatDescriptor, Option<String>) {
    let Some(raw) = raw else {
        return (FormatDescriptor::default(), None);
    };
    let inner = raw.strip_prefix('[').unwrap_or(raw);
    let inner = inner.strip_suffix(']').unwrap_or(inner).trim();
    if inner.is_empty() {
        return (FormatDescriptor::default(), None);
    }

    let Some(cap) = SHAPE_PATTERN.captures(inner) else {
        return (FormatDescriptor::default(), Some(inner.to_string()));
    };

    let Some(alphabet) = cap.get(2).and_then(|m| return alphabet_for_text(m.as_str())) else {
        return (FormatDescriptor::default(), Some(inner.to_string()));
    };

    let prefix = cap.get(1).map_or_else(String::new, |m| return m.as_str().to_string());
    let suffix = match cap.get(3) {
        Some(punctuation) => punctuation.as_str().to_string(),
        // Only decimal keeps a suffix when none was written.
        None if matches!(alphabet, Alphabet::Decimal) => ".".to_string(),
        None => String::new(),
    };

    return (FormatDescriptor { alphabet, prefix, suffix }, None);
}

/// Map a captured alphabet character to its alphabet.
fn alphabet_for_text(text: &str) -> Option<Alphabet> {
    return match text {
        "1" => Some(Alphabet::Decimal),
        "a" => Some(Alphabet::LowerLatin),
        "A" => Some(Alphabet::UpperLatin),
        "i" => Some(Alphabet::LowerRoman),
        "I" => Some(Alphabet::UpperRoman),
        _ => None,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_argument_is_the_decimal_default() {
        let (descriptor, rejected) = parse_format_argument(None);
        assert_eq!(descriptor, FormatDescriptor::default());
        assert_eq!(descriptor.alphabet, Alphabet::Decimal);
        assert_eq!(descriptor.suffix, ".");
        assert!(rejected.is_none());
    }

    #[test]
    fn empty_brackets_are_the_decimal_default_without_diagnostic() {
        let (descriptor, rejected) = parse_format_argument(Some("[]"));
        assert_eq!(descriptor, FormatDescriptor::default());
        assert!(rejected.is_none());

        let (descriptor, rejected) = parse_format_argument(Some("[  ]"));
        assert_eq!(descriptor, FormatDescriptor::default());
        assert!(rejected.is_none());
    }

    #[test]
    fn letter_with_closing_paren() {
        let (descriptor, rejected) = parse_format_argument(Some("[a)]"));
        assert_eq!(descriptor.alphabet, Alphabet::LowerLatin);
        assert_eq!(descriptor.prefix, "");
        assert_eq!(descriptor.suffix, ")");
        assert!(rejected.is_none());
    }

    #[test]
    fn parenthesized_upper_roman() {
        let (descriptor, rejected) = parse_format_argument(Some("[(I)]"));
        assert_eq!(descriptor.alphabet, Alphabet::UpperRoman);
        assert_eq!(descriptor.prefix, "(");
        assert_eq!(descriptor.suffix, ")");
        assert!(rejected.is_none());
    }

    #[test]
    fn bare_letter_gets_no_suffix_except_decimal() {
        let (descriptor, _) = parse_format_argument(Some("[A]"));
        assert_eq!(descriptor.alphabet, Alphabet::UpperLatin);
        assert_eq!(descriptor.prefix, "");
        assert_eq!(descriptor.suffix, "");

        let (descriptor, _) = parse_format_argument(Some("[1]"));
        assert_eq!(descriptor.alphabet, Alphabet::Decimal);
        assert_eq!(descriptor.suffix, ".");
    }

    #[test]
    fn whitespace_around_the_argument_is_trimmed() {
        let (descriptor, rejected) = parse_format_argument(Some("[ i. ]"));
        assert_eq!(descriptor.alphabet, Alphabet::LowerRoman);
        assert_eq!(descriptor.suffix, ".");
        assert!(rejected.is_none());
    }

    #[test]
    fn unrecognized_argument_falls_back_with_the_rejected_text() {
        let (descriptor, rejected) = parse_format_argument(Some("[xyz]"));
        assert_eq!(descriptor, FormatDescriptor::default());
        assert_eq!(rejected.as_deref(), Some("xyz"));
    }
}
