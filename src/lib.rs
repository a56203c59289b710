//! Lintfixer: rule-based source rewriting for Rust files
//!
//! Walks a directory tree, parses each file with tree-sitter, applies an
//! ordered list of [`Rule`]s to the tree, and writes the file back only when
//! some rule reports a change. Edits are byte-span splices into the original
//! text, so formatting outside the touched spans survives write-back
//! verbatim.
//!
//! # Architecture
//!
//! The engine ([`Fixer`]) owns the traversal and the per-file pipeline:
//! parse → apply rules in registration order → write back iff any rule
//! returned `true`. Rules are the extension point: a [`Rule`] is a pure
//! mapping from the current tree state to a changed flag, mutating the tree
//! in place through [`SourceTree::splice`]. Progress notices go through an
//! injected [`Logger`] capability; the default discards them.
//!
//! # Example
//!
//! ```no_run
//! use lintfixer::{Fixer, LowercaseErrorLiteral};
//!
//! # fn main() -> Result<(), lintfixer::FixError> {
//! let fixer = Fixer::builder()
//!     .rule(LowercaseErrorLiteral::default())
//!     .build();
//!
//! let summary = fixer.fix("src")?;
//! println!(
//!     "rewrote {} of {} files",
//!     summary.files_changed(),
//!     summary.files_scanned()
//! );
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod logger;
pub mod rules;
pub mod tree;

// Re-exports
pub use engine::{FileOutcome, FixError, FixSummary, Fixer, FixerBuilder};
pub use logger::{Logger, NopLogger};
pub use rules::{LowercaseErrorLiteral, Rule};
pub use tree::{SourceTree, TreeError};
