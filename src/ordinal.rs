//! Ordinal label generation for ordered-list items.

use crate::format::{Alphabet, FormatDescriptor};

/// Descending value table for the subtractive Roman-numeral algorithm.
const ROMAN_VALUES: [(u32, &str); 13] = [
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

/// Render the display label for the `counter`-th item under `descriptor`:
/// the counter in the descriptor's alphabet, wrapped in its decorations.
pub fn ordinal_label(counter: u32, descriptor: &FormatDescriptor) -> String {
    let numeral = match descriptor.alphabet {
        Alphabet::Decimal => counter.to_string(),
        Alphabet::LowerLatin => latin_numeral(counter),
        Alphabet::LowerRoman => roman_numeral(counter),
        Alphabet::UpperLatin => latin_numeral(counter).to_ascii_uppercase(),
        Alphabet::UpperRoman => roman_numeral(counter).to_ascii_uppercase(),
    };
    return format!("{}{numeral}{}", descriptor.prefix, descriptor.suffix);
}

/// Bijective base-26 numeral over `a`–`z`: 1 → "a", 26 → "z", 27 → "aa".
/// Each digit position ranges 1–26, hence the `-1` adjustment per step
/// (this is not zero-padded positional base-26).
fn latin_numeral(counter: u32) -> String {
    let mut letters: Vec<char> = Vec::new();
    let mut remaining = counter;
    while remaining > 0 {
        remaining = remaining.saturating_sub(1);
        let digit = u8::try_from(remaining % 26).unwrap_or(0);
        letters.push(char::from(b'a'.saturating_add(digit)));
        remaining /= 26;
    }
    letters.reverse();
    return letters.into_iter().collect();
}

/// Subtractive Roman numeral, lowercase. Counters outside `1..=3999` have
/// no Roman form and fall back to the decimal text of the counter.
fn roman_numeral(counter: u32) -> String {
    if counter == 0 || counter >= 4000 {
        return counter.to_string();
    }
    let mut numeral = String::new();
    let mut remaining = counter;
    for (value, glyphs) in ROMAN_VALUES {
        while remaining >= value {
            numeral.push_str(glyphs);
            remaining = remaining.saturating_sub(value);
        }
    }
    return numeral;
}
