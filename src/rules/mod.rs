//! The rule contract and tree traversal helpers.

pub mod error_case;

use crate::tree::{SourceTree, TreeError};
use tree_sitter::Node;

pub use error_case::LowercaseErrorLiteral;

/// A fixer rule: inspects a tree and may mutate it in place.
///
/// Contract for implementors:
/// - Return `Ok(true)` iff the rule performed at least one mutation with
///   observable effect on the serialized output.
/// - Be total over tree shape: "nothing to fix" is `Ok(false)`, never an
///   error.
/// - Retain no state between files; the engine gives no guarantee about
///   call order beyond per-file isolation.
/// - Be idempotent: re-applied to its own output, report `Ok(false)`.
///
/// Rules run in registration order against one shared tree per file, so a
/// later rule sees the mutations of earlier ones.
pub trait Rule {
    fn apply(&self, tree: &mut SourceTree) -> Result<bool, TreeError>;
}

/// Plain functions and closures are rules too.
impl<F> Rule for F
where
    F: Fn(&mut SourceTree) -> Result<bool, TreeError>,
{
    fn apply(&self, tree: &mut SourceTree) -> Result<bool, TreeError> {
        self(tree)
    }
}

/// Preorder walk over every node of a tree, tokens included.
pub fn walk<'t>(node: Node<'t>, f: &mut dyn FnMut(Node<'t>)) {
    f(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_visits_every_node_once() {
        let tree = SourceTree::parse("test.rs", "fn a() {}\nfn b() {}\n").unwrap();

        let mut functions = Vec::new();
        walk(tree.root(), &mut |node| {
            if node.kind() == "function_item" {
                functions.push(tree.text(node).to_string());
            }
        });

        assert_eq!(functions, vec!["fn a() {}", "fn b() {}"]);
    }

    #[test]
    fn closures_satisfy_the_rule_contract() {
        let rule = |_tree: &mut SourceTree| -> Result<bool, TreeError> { Ok(false) };
        let mut tree = SourceTree::parse("test.rs", "fn main() {}").unwrap();
        assert!(!rule.apply(&mut tree).unwrap());
    }
}
