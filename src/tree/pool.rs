//! Thread-local parser reuse.
//!
//! A tree-sitter parser is created once per thread and reused for every
//! parse and reparse, so a run over a large file tree does not pay parser
//! initialization per file.

use crate::tree::errors::TreeError;
use ast_grep_language::{LanguageExt, SupportLang};
use std::cell::RefCell;
use tree_sitter::Parser;

thread_local! {
    static RUST_PARSER: RefCell<Option<Parser>> = const { RefCell::new(None) };
}

fn new_parser() -> Result<Parser, TreeError> {
    let mut parser = Parser::new();
    // Get the tree-sitter Language from ast-grep-language
    let ts_lang = SupportLang::Rust.get_ts_language();
    parser
        .set_language(&ts_lang)
        .map_err(|_| TreeError::LanguageSet)?;
    Ok(parser)
}

/// Run `f` with the thread's parser, creating it on first use.
pub(crate) fn with_parser<F, R>(f: F) -> Result<R, TreeError>
where
    F: FnOnce(&mut Parser) -> R,
{
    RUST_PARSER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(new_parser()?);
        }
        match slot.as_mut() {
            Some(parser) => Ok(f(parser)),
            None => Err(TreeError::LanguageSet),
        }
    })
}
