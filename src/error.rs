/// Crate-level error types for the edit surface.
///
/// Scanning itself is total and never fails: text that doesn't match a
/// grammar is simply not matched. Only the replace-range edit helper can
/// reject its input.
#[allow(clippy::error_impl_error, reason = "crate-internal error type")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An edit offset does not fall on a UTF-8 character boundary.
    #[error("offset {offset} is not a character boundary")]
    NotCharBoundary {
        /// The offending byte offset.
        offset: usize,
    },

    /// An edit range extends past the end of the buffer.
    #[error("range end {to} is past the end of the buffer ({len} bytes)")]
    OutOfBounds {
        /// Length of the buffer in bytes.
        len: usize,
        /// The out-of-bounds range end.
        to: usize,
    },

    /// An edit range has its start after its end.
    #[error("range start {from} is after range end {to}")]
    RangeInverted {
        /// The range start offset.
        from: usize,
        /// The range end offset.
        to: usize,
    },
}
