//! The fixer engine: walks a file tree and drives the per-file
//! parse → apply-rules → write-back pipeline.

pub mod errors;

use crate::logger::{Logger, NopLogger};
use crate::rules::Rule;
use crate::tree::SourceTree;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub use errors::FixError;

/// Outcome of one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// No rule reported a change; the file was not written.
    Unchanged { path: PathBuf },
    /// At least one rule changed the tree and the file was rewritten.
    Written { path: PathBuf },
    /// Dry-run: the file would have been rewritten.
    WouldWrite {
        path: PathBuf,
        original: String,
        rewritten: String,
    },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Unchanged { path }
            | FileOutcome::Written { path }
            | FileOutcome::WouldWrite { path, .. } => path,
        }
    }

    /// Whether a rule changed (or would change) this file.
    pub fn changed(&self) -> bool {
        !matches!(self, FileOutcome::Unchanged { .. })
    }
}

/// What a run touched, in traversal order.
#[derive(Debug, Default)]
pub struct FixSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl FixSummary {
    pub fn files_scanned(&self) -> usize {
        self.outcomes.len()
    }

    pub fn files_changed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.changed()).count()
    }
}

/// The rewriting engine.
///
/// Owns an ordered rule list and a logger, both fixed at construction via
/// [`Fixer::builder`]. An engine with no rules is legal and fixes nothing.
pub struct Fixer {
    rules: Vec<Box<dyn Rule>>,
    logger: Box<dyn Logger>,
    dry_run: bool,
}

impl Fixer {
    pub fn builder() -> FixerBuilder {
        FixerBuilder::default()
    }

    /// Fix every regular file under `path`, which may itself be a file.
    ///
    /// Directories are descended into but never processed as files; every
    /// non-directory entry is a candidate regardless of extension. Traversal
    /// order is deterministic (entries sorted by file name), each entry is
    /// visited exactly once, and the run stops at the first error. Files
    /// rewritten before a failure stay rewritten.
    pub fn fix(&self, path: impl AsRef<Path>) -> Result<FixSummary, FixError> {
        let path = path.as_ref();
        let meta = fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FixError::NotFound(path.to_path_buf())
            } else {
                FixError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let mut summary = FixSummary::default();
        if !meta.is_dir() {
            summary.outcomes.push(self.fix_file(path)?);
            return Ok(summary);
        }

        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.map_err(|e| walk_error(path, e))?;
            if entry.file_type().is_dir() {
                continue;
            }
            summary.outcomes.push(self.fix_file(entry.path())?);
        }

        Ok(summary)
    }

    /// Parse one file, run every rule in registration order against the same
    /// tree, and write back iff any rule reported a change.
    fn fix_file(&self, path: &Path) -> Result<FileOutcome, FixError> {
        let original = fs::read_to_string(path).map_err(|e| FixError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut tree =
            SourceTree::parse(path, original.as_str()).map_err(|e| FixError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut any_changed = false;
        for rule in &self.rules {
            let changed = rule.apply(&mut tree).map_err(|e| FixError::Rule {
                path: path.to_path_buf(),
                source: e,
            })?;
            any_changed |= changed;
        }

        if !any_changed {
            return Ok(FileOutcome::Unchanged {
                path: path.to_path_buf(),
            });
        }

        // A rule that left the tree unparsable must not reach disk.
        if tree.has_syntax_errors() {
            return Err(FixError::BrokenRewrite {
                path: path.to_path_buf(),
            });
        }

        if self.dry_run {
            self.logger
                .info(&format!("would change file: {}", path.display()));
            return Ok(FileOutcome::WouldWrite {
                path: path.to_path_buf(),
                original,
                rewritten: tree.source().to_string(),
            });
        }

        // Whole-file truncate and rewrite; a crash mid-write can corrupt
        // the file. Known limitation.
        fs::write(path, tree.source()).map_err(|e| FixError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.logger
            .info(&format!("changed file: {}", path.display()));

        Ok(FileOutcome::Written {
            path: path.to_path_buf(),
        })
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> FixError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err.into_io_error().unwrap_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop detected")
    });
    FixError::Io { path, source }
}

/// Builds a [`Fixer`]. Rules run in the order they were added.
pub struct FixerBuilder {
    rules: Vec<Box<dyn Rule>>,
    logger: Box<dyn Logger>,
    dry_run: bool,
}

impl Default for FixerBuilder {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            logger: Box::new(NopLogger),
            dry_run: false,
        }
    }
}

impl FixerBuilder {
    /// Append a rule; repeatable, registration order is execution order.
    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Replace the default no-op logger.
    pub fn logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    /// Report what would change without writing any file.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn build(self) -> Fixer {
        Fixer {
            rules: self.rules,
            logger: self.logger,
            dry_run: self.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_not_found() {
        let fixer = Fixer::builder().build();
        let result = fixer.fix("/definitely/not/a/real/path");
        assert!(matches!(result, Err(FixError::NotFound(_))));
    }

    #[test]
    fn engine_without_rules_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.rs");
        fs::write(&file, "fn main() {}\n").unwrap();

        let fixer = Fixer::builder().build();
        let summary = fixer.fix(dir.path()).unwrap();

        assert_eq!(summary.files_scanned(), 1);
        assert_eq!(summary.files_changed(), 0);
        assert_eq!(fs::read_to_string(&file).unwrap(), "fn main() {}\n");
    }
}
