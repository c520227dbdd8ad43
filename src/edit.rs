//! The replace-range helper used by the editing collaborator.

use crate::error::Error;

/// Compute the buffer text after replacing `[from, to)` with `insert`.
///
/// Pure: the host editor owns the actual buffer mutation and is expected to
/// re-scan afterwards, since a scan's offsets are only valid for the exact
/// text they were computed from.
///
/// # Errors
///
/// Returns `Error::RangeInverted` if `from > to`, `Error::OutOfBounds` if
/// `to` is past the end of the buffer, or `Error::NotCharBoundary` if
/// either offset splits a UTF-8 character.
pub fn replace_range(text: &str, from: usize, to: usize, insert: &str) -> Result<String, Error> {
    if from > to {
        return Err(Error::RangeInverted { from, to });
    }
    if to > text.len() {
        return Err(Error::OutOfBounds { len: text.len(), to });
    }
    for offset in [from, to] {
        if !text.is_char_boundary(offset) {
            return Err(Error::NotCharBoundary { offset });
        }
    }

    let removed = to.saturating_sub(from);
    let capacity = text.len().saturating_sub(removed).saturating_add(insert.len());
    let mut edited = String::with_capacity(capacity);
    edited.push_str(text.get(..from).unwrap_or_default());
    edited.push_str(insert);
    edited.push_str(text.get(to..).unwrap_or_default());
    return Ok(edited);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_the_middle_of_the_buffer() {
        let edited = replace_range("abcdef", 2, 4, "XY").unwrap();
        assert_eq!(edited, "abXYef");
    }

    #[test]
    fn empty_range_inserts() {
        let edited = replace_range("abc", 1, 1, "--").unwrap();
        assert_eq!(edited, "a--bc");
    }

    #[test]
    fn empty_insert_deletes() {
        let edited = replace_range("abc", 0, 2, "").unwrap();
        assert_eq!(edited, "c");
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = replace_range("abc", 2, 1, "x").unwrap_err();
        assert!(matches!(err, Error::RangeInverted { from: 2, to: 1 }));
    }

    #[test]
    fn out_of_bounds_range_is_rejected() {
        let err = replace_range("abc", 0, 4, "x").unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { len: 3, to: 4 }));
    }

    #[test]
    fn non_boundary_offset_is_rejected() {
        // 'é' is two bytes; offset 1 splits it.
        let err = replace_range("é", 1, 2, "x").unwrap_err();
        assert!(matches!(err, Error::NotCharBoundary { offset: 1 }));
    }
}
