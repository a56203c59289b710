use crate::tree::TreeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixError {
    #[error("file or directory does not exist: {0}")]
    NotFound(PathBuf),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: TreeError,
    },

    #[error("rule failed on {path}: {source}")]
    Rule {
        path: PathBuf,
        #[source]
        source: TreeError,
    },

    #[error("rewrite of {path} no longer parses; refusing to write it back")]
    BrokenRewrite { path: PathBuf },

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
