//! Shipped rule: lower-case the leading character of error message literals.

use crate::rules::{walk, Rule};
use crate::tree::{SourceTree, TreeError};
use std::ops::Range;
use tree_sitter::Node;

/// Rewrites string literals passed to an error-construction call so the
/// message starts lower-case.
///
/// Matches call expressions of the form `<namespace>::<function>("…")` where
/// both path segments are plain identifiers and the first argument is a
/// string literal, then lower-cases the character immediately after the
/// opening quote. `Error::msg("Something went wrong")` becomes
/// `Error::msg("something went wrong")`.
#[derive(Debug, Clone)]
pub struct LowercaseErrorLiteral {
    namespace: String,
    function: String,
}

impl LowercaseErrorLiteral {
    /// Target calls of the form `namespace::function(..)`.
    pub fn new(namespace: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            function: function.into(),
        }
    }
}

impl Default for LowercaseErrorLiteral {
    /// Targets `Error::msg(..)` calls.
    fn default() -> Self {
        Self::new("Error", "msg")
    }
}

impl Rule for LowercaseErrorLiteral {
    fn apply(&self, tree: &mut SourceTree) -> Result<bool, TreeError> {
        // Collect spans first; splicing invalidates node handles.
        let mut edits: Vec<(Range<usize>, String)> = Vec::new();
        {
            let snapshot: &SourceTree = tree;
            walk(snapshot.root(), &mut |node| {
                let Some(literal) = self.match_error_literal(snapshot, node) else {
                    return;
                };
                if let Some(fixed) = lowercase_leading(snapshot.text(literal)) {
                    edits.push((literal.byte_range(), fixed));
                }
            });
        }

        if edits.is_empty() {
            return Ok(false);
        }

        // Bottom-to-top so earlier spans stay valid.
        edits.sort_by(|a, b| b.0.start.cmp(&a.0.start));
        for (range, replacement) in edits {
            tree.splice(range, &replacement)?;
        }
        Ok(true)
    }
}

impl LowercaseErrorLiteral {
    /// The first-argument string literal of a matching call, if any.
    fn match_error_literal<'t>(&self, tree: &'t SourceTree, node: Node<'t>) -> Option<Node<'t>> {
        if node.kind() != "call_expression" {
            return None;
        }

        let function = node.child_by_field_name("function")?;
        if function.kind() != "scoped_identifier" {
            return None;
        }
        let path = function.child_by_field_name("path")?;
        let name = function.child_by_field_name("name")?;
        if path.kind() != "identifier" || name.kind() != "identifier" {
            return None;
        }
        if tree.text(path) != self.namespace || tree.text(name) != self.function {
            return None;
        }

        // We need at least one argument, and it must be a string literal
        let arguments = node.child_by_field_name("arguments")?;
        let first = arguments.named_child(0)?;
        (first.kind() == "string_literal").then_some(first)
    }
}

/// Lower-case the character at raw index 1, the one right after the opening
/// quote, of a string literal given with its quotes.
///
/// A message body of exactly two characters is left alone, as is the empty
/// literal. Returns `None` when nothing would change, which is what makes
/// the rule idempotent.
fn lowercase_leading(raw: &str) -> Option<String> {
    let chars: Vec<char> = raw.chars().collect();
    // raw includes both quotes, so a two-character body has raw length 4
    if chars.len() <= 2 || chars.len() == 4 {
        return None;
    }

    let first = chars[1];
    let lowered: String = first.to_lowercase().collect();
    if lowered == first.to_string() {
        return None;
    }

    let mut fixed = String::with_capacity(raw.len());
    fixed.push(chars[0]);
    fixed.push_str(&lowered);
    fixed.extend(&chars[2..]);
    Some(fixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn apply_once(source: &str) -> (bool, String) {
        let rule = LowercaseErrorLiteral::default();
        let mut tree = SourceTree::parse("test.rs", source).unwrap();
        let changed = rule.apply(&mut tree).unwrap();
        (changed, tree.source().to_string())
    }

    #[test]
    fn lowercases_first_message_character() {
        let (changed, fixed) =
            apply_once("fn f() -> Error { Error::msg(\"Something went wrong\") }\n");
        assert!(changed);
        assert_eq!(
            fixed,
            "fn f() -> Error { Error::msg(\"something went wrong\") }\n"
        );
    }

    #[test]
    fn leaves_two_character_message_alone() {
        let source = "fn f() -> Error { Error::msg(\"OK\") }\n";
        let (changed, fixed) = apply_once(source);
        assert!(!changed);
        assert_eq!(fixed, source);
    }

    #[test]
    fn leaves_empty_literal_alone() {
        let source = "fn f() -> Error { Error::msg(\"\") }\n";
        let (changed, _) = apply_once(source);
        assert!(!changed);
    }

    #[test]
    fn ignores_unrelated_callee() {
        let source = "fn f() { Warning::msg(\"Something went wrong\"); }\n";
        let (changed, fixed) = apply_once(source);
        assert!(!changed);
        assert_eq!(fixed, source);
    }

    #[test]
    fn ignores_calls_without_arguments() {
        let source = "fn f() { Error::msg(); }\n";
        let (changed, _) = apply_once(source);
        assert!(!changed);
    }

    #[test]
    fn ignores_non_literal_first_argument() {
        let source = "fn f(s: &str) { Error::msg(s); }\n";
        let (changed, _) = apply_once(source);
        assert!(!changed);
    }

    #[test]
    fn fixes_every_match_in_one_file() {
        let source = "fn f() {\n    Error::msg(\"First thing\");\n    Error::msg(\"Second thing\");\n}\n";
        let (changed, fixed) = apply_once(source);
        assert!(changed);
        assert_eq!(
            fixed,
            "fn f() {\n    Error::msg(\"first thing\");\n    Error::msg(\"second thing\");\n}\n"
        );
    }

    #[test]
    fn second_application_reports_no_change() {
        let (_, fixed) = apply_once("fn f() { Error::msg(\"Broken pipe somewhere\"); }\n");
        let (changed_again, stable) = apply_once(&fixed);
        assert!(!changed_again);
        assert_eq!(stable, fixed);
    }

    #[test]
    fn custom_identifier_pair() {
        let rule = LowercaseErrorLiteral::new("errors", "new");
        let mut tree =
            SourceTree::parse("test.rs", "fn f() { errors::new(\"Bad input\"); }\n").unwrap();
        assert!(rule.apply(&mut tree).unwrap());
        assert_eq!(tree.source(), "fn f() { errors::new(\"bad input\"); }\n");
    }

    proptest! {
        // Re-running the transform on its own output never changes anything.
        #[test]
        fn lowercase_leading_is_idempotent(body in "[a-zA-Z0-9 ]{0,12}") {
            let raw = format!("\"{body}\"");
            if let Some(fixed) = lowercase_leading(&raw) {
                prop_assert_eq!(lowercase_leading(&fixed), None);
            }
        }
    }
}
