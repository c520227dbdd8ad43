/// Core domain types for environment blocks, item markers, and block spans.
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Absolute offsets of one matched environment block.
///
/// All offsets are byte positions into the scanned buffer, derived purely
/// from literal delimiter lengths plus captured-group lengths. Invariant:
/// `start_offset < content_start <= content_end < end_offset`, with
/// `content_start == content_end` for an empty content span. The three
/// marker/content spans tile `[start_offset, end_offset)` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMatch {
    /// End of the content span; also where the closing marker starts.
    pub content_end: usize,
    /// Start of the content span, just past the opening marker.
    pub content_start: usize,
    /// End of the closing marker; the block's exclusive end.
    pub end_offset: usize,
    /// Start of the opening marker.
    pub start_offset: usize,
}

impl BlockMatch {
    /// Span of the content between the markers. May be empty.
    pub fn content_span(&self) -> Range<usize> {
        return self.content_start..self.content_end;
    }

    /// Span of the closing marker.
    pub fn end_span(&self) -> Range<usize> {
        return self.content_end..self.end_offset;
    }

    /// Span of the opening marker, bracket argument included.
    pub fn start_span(&self) -> Range<usize> {
        return self.start_offset..self.content_start;
    }
}

/// Boundaries of one block retained in the document scan output, so that
/// collaborators can resolve an offset to its block without re-scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSpan {
    /// Exclusive end of the block, past its closing marker.
    pub end_offset: usize,
    /// Which environment grammar matched this block.
    pub kind: EnvKind,
    /// Start of the block's opening marker.
    pub start_offset: usize,
}

impl BlockSpan {
    /// Whether `offset` falls inside this block's full extent.
    pub fn contains(&self, offset: usize) -> bool {
        return self.start_offset <= offset && offset < self.end_offset;
    }
}

/// The two environment grammars. Carried on start/end decorations so an
/// exhaustive renderer can pick the right widget for each marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvKind {
    /// An ordered-list `enumerate` block.
    Enumerate,
    /// A named `questionenv` block.
    Question,
}

/// One `\item` marker found inside an enumerate block's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMatch {
    /// One-based position of this item within its enclosing block.
    /// Counters never skip and are never shared across blocks.
    pub counter: u32,
    /// Exclusive end of the item marker literal.
    pub marker_end_offset: usize,
    /// Start of the item marker literal.
    pub marker_offset: usize,
}
