//! Locate LaTeX-style environment blocks in plain text and compute the
//! decoration spans a rendering layer needs to overlay widgets on them.
//!
//! Two grammars are recognized: `questionenv` blocks carrying a bracketed
//! name, and `enumerate` blocks whose `\item` markers receive generated
//! ordinal labels under a configurable numbering format. A scan is a pure
//! function of the buffer text — no state survives between calls, and every
//! call recomputes the full decoration set from scratch.
//!
//! ```
//! let scan = envspan::scan_document("\\begin{questionenv}[Proof]Body.\\end{questionenv}");
//! assert_eq!(scan.decorations.len(), 3);
//! assert!(scan.diagnostics.is_empty());
//! ```

pub mod decorations;
pub mod diagnostics;
pub mod document;
pub mod edit;
pub mod error;
pub mod format;
pub mod named_block;
pub mod ordered_list;
pub mod ordinal;
pub mod types;

pub use decorations::{Decoration, DecorationKind};
pub use document::{DocumentScan, scan_document};
pub use error::Error;
pub use types::EnvKind;
