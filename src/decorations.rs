//! Decoration ranges and the append-only builder handed to the renderer.

use serde::{Deserialize, Serialize};

use crate::types::EnvKind;

/// One half-open `[from, to)` range over the buffer paired with a rendering
/// instruction. Never mutated after the scan that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    /// Inclusive start of the decorated span.
    pub from: usize,
    /// What the renderer should do with the span.
    pub kind: DecorationKind,
    /// Exclusive end of the decorated span.
    pub to: usize,
}

/// Append-only accumulator of decorations, preserving insertion order.
///
/// Callers must push in increasing start-offset order — that is a scanning
/// discipline, not a sorting step, and violations are caller bugs caught by
/// tests against [`non_overlapping`] rather than checked at runtime.
#[derive(Debug, Default)]
pub struct DecorationBuilder {
    /// Decorations in insertion order.
    decorations: Vec<Decoration>,
}

impl DecorationBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        return Self::default();
    }

    /// Consume the builder, yielding the finished immutable sequence.
    pub fn finish(self) -> Vec<Decoration> {
        return self.decorations;
    }

    /// Append one decoration over `[from, to)`.
    pub fn push(&mut self, from: usize, to: usize, kind: DecorationKind) {
        self.decorations.push(Decoration { from, kind, to });
    }
}

/// The closed set of rendering instructions. The rendering collaborator
/// must handle every variant exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecorationKind {
    /// Style the enclosed content without replacing any text.
    Mark,
    /// Replace a closing marker with the environment's end widget.
    ReplaceEnd {
        /// Which environment the marker closes.
        env: EnvKind,
    },
    /// Replace one item marker with its generated ordinal label.
    ReplaceItem {
        /// The display label, decorations included (e.g. `(b)`).
        label: String,
    },
    /// Replace an opening marker with the environment's start widget.
    ReplaceStart {
        /// The editable payload: the block name for a question block, the
        /// raw bracket argument as written for an enumerate block.
        argument: Option<String>,
        /// Which environment the marker opens.
        env: EnvKind,
    },
}

/// Test oracle: whether a decoration sequence is strictly increasing and
/// non-overlapping, with every span non-empty.
pub fn non_overlapping(decorations: &[Decoration]) -> bool {
    if decorations.iter().any(|d| return d.from >= d.to) {
        return false;
    }
    for window in decorations.windows(2) {
        let (Some(first), Some(second)) = (window.first(), window.get(1)) else {
            return false;
        };
        if first.to > second.from {
            return false;
        }
    }
    return true;
}
