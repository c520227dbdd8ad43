//! Scanner for `\begin{questionenv}[name] … \end{questionenv}` blocks.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::decorations::{DecorationBuilder, DecorationKind};
use crate::types::{BlockMatch, EnvKind};

/// Literal opening delimiter, up to but not including the name bracket.
const BEGIN: &str = "\\begin{questionenv}";

/// Literal closing delimiter.
const END: &str = "\\end{questionenv}";

/// Block grammar: opening literal, bracketed name of one or more non-`]`
/// characters, lazily matched content spanning line breaks, closing literal.
/// Lazy content means a block terminates at the nearest following end
/// literal, which is also why same-type nesting is unsupported.
static BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    return Regex::new(r"(?s)\\begin\{questionenv\}\[([^\]]+)\](.*?)\\end\{questionenv\}")
        .expect("valid regex");
});

/// One matched question block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBlock {
    /// The captured block name, without its brackets.
    pub name: String,
    /// Absolute offsets of the block's marker and content spans.
    pub offsets: BlockMatch,
}

impl NamedBlock {
    /// Byte span of the editable name text between the brackets, for the
    /// collaborator that rewrites a block's name in place.
    pub fn name_span(&self) -> Range<usize> {
        let from = self.offsets.start_offset.saturating_add(BEGIN.len()).saturating_add(1);
        return from..self.offsets.content_start.saturating_sub(1);
    }
}

/// Emit the three decorations per block, in document order: replace the
/// opening marker (name included) with a start widget, mark the content if
/// non-empty, replace the closing marker with an end widget.
pub fn emit_decorations(blocks: &[NamedBlock], builder: &mut DecorationBuilder) {
    for block in blocks {
        builder.push(
            block.offsets.start_offset,
            block.offsets.content_start,
            DecorationKind::ReplaceStart {
                argument: Some(block.name.clone()),
                env: EnvKind::Question,
            },
        );
        if block.offsets.content_start < block.offsets.content_end {
            builder.push(block.offsets.content_start, block.offsets.content_end, DecorationKind::Mark);
        }
        builder.push(
            block.offsets.content_end,
            block.offsets.end_offset,
            DecorationKind::ReplaceEnd { env: EnvKind::Question },
        );
    }
}

/// Scan the full buffer for question blocks, resuming after each match.
/// Offsets are derived purely from literal lengths plus captured-group
/// lengths, never read back from the buffer. No match yields an empty list.
pub fn scan(text: &str) -> Vec<NamedBlock> {
    let mut blocks = Vec::new();
    for cap in BLOCK_PATTERN.captures_iter(text) {
        let Some(full) = cap.get(0) else { continue };
        let (Some(name), Some(content)) = (cap.get(1), cap.get(2)) else { continue };

        let start_offset = full.start();
        let content_start = start_offset
            .saturating_add(BEGIN.len())
            .saturating_add(1)
            .saturating_add(name.as_str().len())
            .saturating_add(1);
        let content_end = content_start.saturating_add(content.as_str().len());
        let end_offset = content_end.saturating_add(END.len());

        blocks.push(NamedBlock {
            name: name.as_str().to_string(),
            offsets: BlockMatch { content_end, content_start, end_offset, start_offset },
        });
    }
    return blocks;
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::decorations::non_overlapping;

    #[test]
    fn no_occurrence_yields_empty_output() {
        assert!(scan("plain prose, no markers at all").is_empty());
        assert!(scan("\\begin{questionenv}[unterminated").is_empty());
    }

    #[test]
    fn computes_marker_and_content_spans() {
        let text = "\\begin{questionenv}[Proof of X]Text here.\\end{questionenv}";
        let blocks = scan(text);
        assert_eq!(blocks.len(), 1);

        let block = blocks.first().unwrap();
        assert_eq!(block.name, "Proof of X");
        assert_eq!(text.get(block.offsets.start_span()), Some("\\begin{questionenv}[Proof of X]"));
        assert_eq!(text.get(block.offsets.content_span()), Some("Text here."));
        assert_eq!(text.get(block.offsets.end_span()), Some("\\end{questionenv}"));
    }

    #[test]
    fn computed_offsets_match_the_regex_match_extent() {
        // The algebraic identity: end-marker start plus the end literal's
        // length must equal the match start plus the full match length.
        let text = "pre \\begin{questionenv}[A]one\\end{questionenv} mid \
                    \\begin{questionenv}[Longer name]\ntwo\nlines\n\\end{questionenv} post";
        let blocks = scan(text);
        let matches: Vec<_> = BLOCK_PATTERN.find_iter(text).collect();
        assert_eq!(blocks.len(), matches.len());
        for (block, found) in blocks.iter().zip(&matches) {
            assert_eq!(block.offsets.start_offset, found.start());
            assert_eq!(block.offsets.end_offset, found.end());
        }
    }

    #[test]
    fn decorations_tile_the_block_exactly() {
        let text = "intro \\begin{questionenv}[Q1]Some body text.\\end{questionenv} outro";
        let blocks = scan(text);
        let mut builder = DecorationBuilder::new();
        emit_decorations(&blocks, &mut builder);
        let decorations = builder.finish();

        assert_eq!(decorations.len(), 3);
        assert!(non_overlapping(&decorations));
        let block = blocks.first().unwrap();
        assert_eq!(decorations.first().map(|d| d.from), Some(block.offsets.start_offset));
        assert_eq!(decorations.last().map(|d| d.to), Some(block.offsets.end_offset));
        for window in decorations.windows(2) {
            assert_eq!(window.first().map(|d| d.to), window.get(1).map(|d| d.from));
        }
    }

    #[test]
    fn empty_content_emits_no_mark() {
        let text = "\\begin{questionenv}[Empty]\\end{questionenv}";
        let blocks = scan(text);
        let block = blocks.first().unwrap();
        assert_eq!(block.offsets.content_start, block.offsets.content_end);

        let mut builder = DecorationBuilder::new();
        emit_decorations(&blocks, &mut builder);
        let decorations = builder.finish();
        assert_eq!(decorations.len(), 2);
        assert!(!decorations.iter().any(|d| matches!(d.kind, DecorationKind::Mark)));
    }

    #[test]
    fn second_block_offsets_are_independent_of_the_first() {
        let first = "\\begin{questionenv}[One]aa\\end{questionenv}";
        let second = "\\begin{questionenv}[Two]bb\\end{questionenv}";
        let gap = " between ";
        let text = format!("{first}{gap}{second}");

        let blocks = scan(&text);
        assert_eq!(blocks.len(), 2);
        let offset = first.len() + gap.len();
        assert_eq!(blocks.first().map(|b| b.offsets.start_offset), Some(0));
        assert_eq!(blocks.get(1).map(|b| b.offsets.start_offset), Some(offset));
        assert_eq!(blocks.get(1).map(|b| b.name.as_str()), Some("Two"));
    }

    #[test]
    fn first_end_literal_terminates_block() {
        // Same-type nesting is unsupported: the outer block ends at the
        // inner end literal, and the trailing end literal is not matched.
        let text = "\\begin{questionenv}[Outer]\\begin{questionenv}[Inner]x\\end{questionenv}\\end{questionenv}";
        let blocks = scan(text);
        assert_eq!(blocks.len(), 1);
        let block = blocks.first().unwrap();
        assert_eq!(block.name, "Outer");
        assert_eq!(
            text.get(block.offsets.content_span()),
            Some("\\begin{questionenv}[Inner]x")
        );
    }

    #[test]
    fn name_span_covers_the_text_between_the_brackets() {
        let text = "\\begin{questionenv}[Proof of X]Text here.\\end{questionenv}";
        let blocks = scan(text);
        let block = blocks.first().unwrap();
        assert_eq!(text.get(block.name_span()), Some("Proof of X"));
    }
}
