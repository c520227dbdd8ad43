//! Non-fatal scan diagnostics surfaced to the host.

use serde::{Deserialize, Serialize};

/// A warning produced during a scan. Diagnostics never abort the scan; the
/// block that produced one still renders with the fallback format. The only
/// current source is an unrecognized enumerate bracket argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Start offset of the block whose argument was rejected.
    pub block_offset: usize,
    /// The offending format text, brackets and surrounding whitespace stripped.
    pub text: String,
}

impl std::fmt::Display for Diagnostic {
    /// Render as a single warning line for the host's message surface.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unrecognized enumerate format `{}` at offset {}; falling back to decimal numbering",
            self.text, self.block_offset
        )
    }
}
