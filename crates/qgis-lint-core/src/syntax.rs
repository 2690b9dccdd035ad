//! Parsed Python source backed by tree-sitter.
//!
//! [`SourceTree`] owns both the source text and the concrete syntax tree so
//! that rules can borrow nodes and their text with a single lifetime.

use thiserror::Error;
use tree_sitter::{Language, Node, Parser, Tree, TreeCursor};

/// Errors that can occur while parsing a Python source unit.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The bundled Python grammar could not be loaded into the parser.
    #[error("Failed to load Python grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser gave up without producing a tree.
    #[error("Parser produced no syntax tree")]
    Cancelled,

    /// The source contains a syntax error.
    #[error("Syntax error at line {line}, column {column}")]
    Syntax {
        /// Line number (1-indexed).
        line: usize,
        /// Column (0-indexed byte offset within the line).
        column: usize,
    },
}

/// A parsed Python module.
#[derive(Debug, Clone)]
pub struct SourceTree {
    source: String,
    tree: Tree,
}

impl SourceTree {
    /// Parses Python source into a syntax tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] with the position of the first error
    /// node if the source is not valid Python.
    pub fn parse(source: impl Into<String>) -> Result<Self, ParseError> {
        let source = source.into();
        let language: Language = tree_sitter_python::LANGUAGE.into();

        let mut parser = Parser::new();
        parser.set_language(&language)?;
        let tree = parser.parse(&source, None).ok_or(ParseError::Cancelled)?;

        let root = tree.root_node();
        if root.has_error() {
            let (line, column) = first_error(root).map_or((1, 0), position);
            return Err(ParseError::Syntax { line, column });
        }

        Ok(Self { source, tree })
    }

    /// Returns the root `module` node.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Returns the full source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the source text covered by `node`.
    #[must_use]
    pub fn text<'a>(&'a self, node: Node<'_>) -> &'a str {
        self.source
            .get(node.start_byte()..node.end_byte())
            .unwrap_or("")
    }
}

/// Returns the `(line, column)` of a node's start.
///
/// Lines are 1-indexed, columns are 0-indexed byte offsets, matching the
/// positions reported by Python's own `ast` module.
#[must_use]
pub fn position(node: Node<'_>) -> (usize, usize) {
    let start = node.start_position();
    (start.row + 1, start.column)
}

/// Collects the named children of `node`, comments included.
#[must_use]
pub fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// Iterates all named nodes below (and including) `root` in pre-order.
#[must_use]
pub fn preorder(root: Node<'_>) -> Preorder<'_> {
    Preorder {
        cursor: root.walk(),
        done: false,
    }
}

/// Depth-first pre-order iterator over named nodes.
///
/// Driven by a [`TreeCursor`], so traversal depth never grows the call stack.
pub struct Preorder<'t> {
    cursor: TreeCursor<'t>,
    done: bool,
}

impl std::fmt::Debug for Preorder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preorder")
            .field("node", &self.cursor.node().kind())
            .field("done", &self.done)
            .finish()
    }
}

impl<'t> Iterator for Preorder<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let node = self.cursor.node();

            if !self.cursor.goto_first_child() {
                while !self.cursor.goto_next_sibling() {
                    if !self.cursor.goto_parent() {
                        self.done = true;
                        break;
                    }
                }
            }

            if node.is_named() {
                return Some(node);
            }
        }
        None
    }
}

fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_source() {
        let tree = SourceTree::parse("import os\nx = 1\n").expect("valid python");
        assert_eq!(tree.root().kind(), "module");
        assert_eq!(tree.source(), "import os\nx = 1\n");
    }

    #[test]
    fn parses_empty_source() {
        let tree = SourceTree::parse("").expect("empty module");
        assert_eq!(named_children(tree.root()).len(), 0);
    }

    #[test]
    fn rejects_syntax_error() {
        let err = SourceTree::parse("def broken(:\n    pass\n").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 1, .. }));
    }

    #[test]
    fn preorder_visits_parents_before_children() {
        let tree = SourceTree::parse("a.b(c)\n").expect("valid python");
        let kinds: Vec<&str> = preorder(tree.root()).map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                "module",
                "expression_statement",
                "call",
                "attribute",
                "identifier",
                "identifier",
                "argument_list",
                "identifier",
            ]
        );
    }

    #[test]
    fn text_and_position() {
        let tree = SourceTree::parse("x = 1\ny = 'abc'\n").expect("valid python");
        let string = preorder(tree.root())
            .find(|n| n.kind() == "string")
            .expect("string node");
        assert_eq!(tree.text(string), "'abc'");
        assert_eq!(position(string), (2, 4));
    }
}
