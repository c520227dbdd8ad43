//! Scanner for `\begin{enumerate}[format]? … \end{enumerate}` blocks and
//! the `\item` markers inside them.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::decorations::{DecorationBuilder, DecorationKind};
use crate::diagnostics::Diagnostic;
use crate::format::{FormatDescriptor, parse_format_argument};
use crate::ordinal::ordinal_label;
use crate::types::{BlockMatch, EnvKind, ItemMatch};

/// Literal opening delimiter, up to but not including the optional bracket.
const BEGIN: &str = "\\begin{enumerate}";

/// Literal closing delimiter.
const END: &str = "\\end{enumerate}";

/// Literal item marker scanned for inside block content.
const ITEM: &str = "\\item";

/// Block grammar: opening literal, optional bracketed format argument,
/// lazily matched content spanning line breaks, closing literal. The
/// argument capture keeps its brackets; they belong to the raw text the
/// format-editing collaborator needs.
static BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    return Regex::new(r"(?s)\\begin\{enumerate\}(\[[^\]]*\])?(.*?)\\end\{enumerate\}")
        .expect("valid regex");
});

/// One matched enumerate block with its parsed format and located items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerateBlock {
    /// Raw bracket argument exactly as written, brackets included.
    /// `None` when the block has no argument.
    pub argument: Option<String>,
    /// Numbering format, parsed once per block from the argument.
    pub descriptor: FormatDescriptor,
    /// Item markers found in the content, in document order.
    pub items: Vec<ItemMatch>,
    /// Absolute offsets of the block's marker and content spans.
    pub offsets: BlockMatch,
}

impl EnumerateBlock {
    /// Byte span of the editable format text between the brackets, for the
    /// collaborator that rewrites a block's format in place. `None` when
    /// the block has no bracket argument.
    pub fn argument_span(&self) -> Option<Range<usize>> {
        let argument = self.argument.as_ref()?;
        let from = self.offsets.start_offset.saturating_add(BEGIN.len()).saturating_add(1);
        let to = from.saturating_add(argument.len()).saturating_sub(2);
        return Some(from..to);
    }
}

/// Everything one pass over the buffer produces: the matched blocks plus
/// any non-fatal format diagnostics, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListScan {
    /// Matched enumerate blocks, in document order.
    pub blocks: Vec<EnumerateBlock>,
    /// One diagnostic per block whose format argument was rejected.
    pub diagnostics: Vec<Diagnostic>,
}

/// Emit the decorations per block, in document order: replace the opening
/// marker (argument included) with a start widget, replace each item marker
/// with its generated ordinal label, replace the closing marker with an end
/// widget. A block with zero items produces only its start/end decorations.
pub fn emit_decorations(scanned: &ListScan, builder: &mut DecorationBuilder) {
    for block in &scanned.blocks {
        builder.push(
            block.offsets.start_offset,
            block.offsets.content_start,
            DecorationKind::ReplaceStart {
                argument: block.argument.clone(),
                env: EnvKind::Enumerate,
            },
        );
        for item in &block.items {
            let label = ordinal_label(item.counter, &block.descriptor);
            builder.push(item.marker_offset, item.marker_end_offset, DecorationKind::ReplaceItem { label });
        }
        builder.push(
            block.offsets.content_end,
            block.offsets.end_offset,
            DecorationKind::ReplaceEnd { env: EnvKind::Enumerate },
        );
    }
}

/// Scan the full buffer for enumerate blocks, resuming after each match.
/// Offsets are derived purely from literal lengths plus captured-group
/// lengths. An unrecognized format argument degrades that block to decimal
/// numbering and records a diagnostic; the scan never fails.
pub fn scan(text: &str) -> ListScan {
    let mut blocks = Vec::new();
    let mut diagnostics = Vec::new();

    for cap in BLOCK_PATTERN.captures_iter(text) {
        let Some(full) = cap.get(0) else { continue };
        let Some(content) = cap.get(2) else { continue };
        let argument = cap.get(1).map(|m| return m.as_str().to_string());

        let start_offset = full.start();
        let argument_len = argument.as_ref().map_or(0, String::len);
        let content_start = start_offset.saturating_add(BEGIN.len()).saturating_add(argument_len);
        let content_end = content_start.saturating_add(content.as_str().len());
        let end_offset = content_end.saturating_add(END.len());

        let (descriptor, rejected) = parse_format_argument(argument.as_deref());
        if let Some(rejected_text) = rejected {
            diagnostics.push(Diagnostic { block_offset: start_offset, text: rejected_text });
        }

        let items = scan_items(content.as_str(), content_start);
        blocks.push(EnumerateBlock {
            argument,
            descriptor,
            items,
            offsets: BlockMatch { content_end, content_start, end_offset, start_offset },
        });
    }

    return ListScan { blocks, diagnostics };
}

/// Locate item markers inside one block's content. Offsets are absolute;
/// the counter starts at 1 and increments per item, left to right.
fn scan_items(content: &str, content_start: usize) -> Vec<ItemMatch> {
    let mut items = Vec::new();
    let mut counter: u32 = 0;
    for (relative, marker) in content.match_indices(ITEM) {
        counter = counter.saturating_add(1);
        let marker_offset = content_start.saturating_add(relative);
        items.push(ItemMatch {
            counter,
            marker_end_offset: marker_offset.saturating_add(marker.len()),
            marker_offset,
        });
    }
    return items;
}
