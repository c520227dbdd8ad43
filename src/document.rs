//! Whole-document composition of the two environment scanners.

use std::cmp::Reverse;

use serde::Serialize;

use crate::decorations::{Decoration, DecorationBuilder};
use crate::diagnostics::Diagnostic;
use crate::named_block;
use crate::ordered_list;
use crate::types::{BlockSpan, EnvKind};

/// Everything one scan pass produces for the rendering and editing
/// collaborators. Recomputed in full on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentScan {
    /// Boundaries of every matched block, ordered by start offset.
    pub blocks: Vec<BlockSpan>,
    /// Merged decoration sequence, ordered by start offset. Each scanner's
    /// own decorations never overlap; across environments a content mark
    /// may enclose an inner block's replace decorations.
    pub decorations: Vec<Decoration>,
    /// Non-fatal warnings from format parsing, in document order.
    pub diagnostics: Vec<Diagnostic>,
}

impl DocumentScan {
    /// The innermost block containing `offset`, if any. Lets the editing
    /// collaborator resolve a click position to its block without
    /// re-deriving boundaries from the text.
    pub fn enclosing_block(&self, offset: usize) -> Option<&BlockSpan> {
        return self
            .blocks
            .iter()
            .filter(|block| return block.contains(offset))
            .max_by_key(|block| return block.start_offset);
    }
}

/// Run both scanners over the buffer and merge their outputs. The two
/// grammars are disjoint in their literal delimiters, so the scanners
/// cannot cross-talk; each produces a start-ordered sequence and the merge
/// preserves that order without sorting.
pub fn scan_document(text: &str) -> DocumentScan {
    let named = named_block::scan(text);
    let list = ordered_list::scan(text);

    let mut named_builder = DecorationBuilder::new();
    named_block::emit_decorations(&named, &mut named_builder);
    let mut list_builder = DecorationBuilder::new();
    ordered_list::emit_decorations(&list, &mut list_builder);

    let named_spans: Vec<BlockSpan> = named
        .iter()
        .map(|block| {
            return BlockSpan {
                end_offset: block.offsets.end_offset,
                kind: EnvKind::Question,
                start_offset: block.offsets.start_offset,
            };
        })
        .collect();
    let list_spans: Vec<BlockSpan> = list
        .blocks
        .iter()
        .map(|block| {
            return BlockSpan {
                end_offset: block.offsets.end_offset,
                kind: EnvKind::Enumerate,
                start_offset: block.offsets.start_offset,
            };
        })
        .collect();

    let blocks = merge_ordered(named_spans, list_spans, |span| {
        return (span.start_offset, Reverse(span.end_offset));
    });
    let decorations = merge_ordered(named_builder.finish(), list_builder.finish(), |decoration| {
        return (decoration.from, Reverse(decoration.to));
    });

    return DocumentScan { blocks, decorations, diagnostics: list.diagnostics };
}

/// Merge two start-ordered sequences into one by ascending key. Keys put
/// the longer range first on equal starts, so an enclosing span precedes
/// the spans it contains.
fn merge_ordered<T>(
    left: Vec<T>,
    right: Vec<T>,
    key: impl Fn(&T) -> (usize, Reverse<usize>),
) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len().saturating_add(right.len()));
    let mut left_iter = left.into_iter().peekable();
    let mut right_iter = right.into_iter().peekable();

    loop {
        let take_left = match (left_iter.peek(), right_iter.peek()) {
            (None, None) => break,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(l), Some(r)) => key(l) <= key(r),
        };
        let next = if take_left { left_iter.next() } else { right_iter.next() };
        if let Some(item) = next {
            merged.push(item);
        }
    }
    return merged;
}
