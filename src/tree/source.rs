use crate::tree::errors::TreeError;
use crate::tree::pool::with_parser;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Tree};

/// One file's source text together with its parse tree.
///
/// The source string is the serialized form: splicing replaces a byte range
/// and reparses, so every byte outside spliced ranges survives write-back
/// verbatim. Comments are ordinary nodes in the tree and round-trip like
/// everything else.
pub struct SourceTree {
    path: PathBuf,
    source: String,
    tree: Tree,
}

impl SourceTree {
    /// Parse source text into a tree. The path is a diagnostic label only.
    ///
    /// A tree containing ERROR or missing nodes is rejected: rules must
    /// never see a partial tree.
    pub fn parse(path: impl Into<PathBuf>, source: impl Into<String>) -> Result<Self, TreeError> {
        let source = source.into();
        let tree = parse_source(&source)?;
        let errors = count_error_nodes(tree.root_node());
        if errors > 0 {
            return Err(TreeError::Syntax { count: errors });
        }
        Ok(Self {
            path: path.into(),
            source,
            tree,
        })
    }

    /// The path label this tree was parsed under.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current serialized form of the tree.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Root node of the current tree.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Text covered by a node of this tree.
    pub fn text(&self, node: Node<'_>) -> &str {
        &self.source[node.byte_range()]
    }

    /// Replace `range` of the source with `replacement` and reparse.
    ///
    /// Node handles taken before the splice are invalidated; rules making
    /// several edits should collect spans first and splice from the end of
    /// the file toward the start.
    pub fn splice(&mut self, range: Range<usize>, replacement: &str) -> Result<(), TreeError> {
        let len = self.source.len();
        if range.start > range.end || range.end > len {
            return Err(TreeError::SpliceOutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        if !self.source.is_char_boundary(range.start) || !self.source.is_char_boundary(range.end) {
            return Err(TreeError::SpliceNotCharBoundary {
                start: range.start,
                end: range.end,
            });
        }

        self.source.replace_range(range, replacement);
        self.tree = parse_source(&self.source)?;
        Ok(())
    }

    /// Whether the current tree contains ERROR or missing nodes.
    ///
    /// A splice may leave the tree transiently broken between edits of one
    /// rule; the engine checks this once after all rules have run, before
    /// anything reaches disk.
    pub fn has_syntax_errors(&self) -> bool {
        count_error_nodes(self.tree.root_node()) > 0
    }
}

fn parse_source(source: &str) -> Result<Tree, TreeError> {
    with_parser(|parser| parser.parse(source, None))?.ok_or(TreeError::ParseFailed)
}

fn count_error_nodes(node: Node<'_>) -> usize {
    let mut count = usize::from(node.is_error() || node.is_missing());
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        count += count_error_nodes(child);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_rust() {
        let source = "fn main() { println!(\"hello\"); }";
        let tree = SourceTree::parse("test.rs", source).unwrap();

        assert_eq!(tree.root().kind(), "source_file");
        assert_eq!(tree.source(), source);
    }

    #[test]
    fn parse_rejects_broken_rust() {
        let result = SourceTree::parse("test.rs", "fn main( { }");
        assert!(matches!(result, Err(TreeError::Syntax { count }) if count > 0));
    }

    #[test]
    fn splice_preserves_surrounding_bytes() {
        let source = "fn a() {}\n\n   fn b()    {}\n";
        let mut tree = SourceTree::parse("test.rs", source).unwrap();

        // Rename `a` to `x`: bytes 3..4
        tree.splice(3..4, "x").unwrap();
        assert_eq!(tree.source(), "fn x() {}\n\n   fn b()    {}\n");
    }

    #[test]
    fn splice_out_of_bounds() {
        let mut tree = SourceTree::parse("test.rs", "fn a() {}").unwrap();
        let result = tree.splice(5..500, "x");
        assert!(matches!(result, Err(TreeError::SpliceOutOfBounds { .. })));
    }

    #[test]
    fn splice_rejects_split_char() {
        let mut tree = SourceTree::parse("test.rs", "// héllo\n").unwrap();
        let result = tree.splice(5..6, "x");
        assert!(matches!(result, Err(TreeError::SpliceNotCharBoundary { .. })));
    }

    #[test]
    fn comments_are_in_the_tree() {
        let tree = SourceTree::parse("test.rs", "// note\nfn main() {}\n").unwrap();
        let first = tree.root().child(0).unwrap();
        assert_eq!(first.kind(), "line_comment");
    }
}
