//! Source parsing and span splicing on tree-sitter trees.
//!
//! A [`SourceTree`] pairs one file's text with its parse tree. Edits are
//! byte-span splices into the original text followed by a reparse, so
//! formatting outside the touched spans is preserved without a
//! pretty-printer.

pub mod errors;
mod pool;
pub mod source;

pub use errors::TreeError;
pub use source::SourceTree;
