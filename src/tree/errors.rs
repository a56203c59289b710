use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("failed to set language for parser")]
    LanguageSet,

    #[error("failed to parse source code")]
    ParseFailed,

    #[error("source contains {count} syntax error node(s)")]
    Syntax { count: usize },

    #[error("splice range {start}..{end} out of bounds for source of length {len}")]
    SpliceOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("splice range {start}..{end} does not fall on character boundaries")]
    SpliceNotCharBoundary { start: usize, end: usize },
}
