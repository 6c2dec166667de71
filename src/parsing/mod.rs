// src/parsing/mod.rs

//! Parses JavaScript/TypeScript source (with JSX) into a [`SyntaxTree`].
//!
//! Every file is parsed with the tree-sitter TSX grammar, which accepts plain
//! JavaScript, JSX and TypeScript type annotations alike. The concrete tree is
//! lowered into the owned [`syntax`] types and dropped.

mod lower;
pub mod syntax;

pub use syntax::{ArrowBody, Expression, FunctionDeclaration, Statement, SyntaxTree, VariableDeclarator};

use crate::errors::{ParseError, Result};
use tree_sitter::{Node, Parser};

/// A reusable parser configured for TSX.
pub struct SourceParser {
    parser: Parser,
}

impl SourceParser {
    /// Creates a parser with the TSX grammar loaded.
    ///
    /// # Errors
    /// Returns `Error::Grammar` if the bundled grammar is incompatible with the
    /// linked tree-sitter runtime.
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())?;
        Ok(Self { parser })
    }

    /// Parses `source`, attributing errors to `path`.
    ///
    /// # Errors
    /// Returns a [`ParseError`] locating the first error or missing node when
    /// the source is not syntactically valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use component_checklist::parsing::{SourceParser, Statement};
    ///
    /// let mut parser = SourceParser::new().unwrap();
    /// let tree = parser.parse("function Foo() { return <div/>; }", "Foo.jsx").unwrap();
    /// assert!(matches!(tree.statements[0], Statement::Function(_)));
    ///
    /// let err = parser.parse("function Foo() { return 1;", "Bad.js").unwrap_err();
    /// assert_eq!(err.path, "Bad.js");
    /// ```
    pub fn parse(&mut self, source: &str, path: &str) -> std::result::Result<SyntaxTree, ParseError> {
        let tree = self.parser.parse(source, None).ok_or_else(|| ParseError {
            path: path.to_string(),
            line: 1,
            column: 1,
        })?;
        let root = tree.root_node();

        if root.has_error() {
            let at = first_error(root).unwrap_or(root).start_position();
            return Err(ParseError {
                path: path.to_string(),
                line: at.row + 1,
                column: at.column + 1,
            });
        }

        Ok(lower::lower_program(root, source))
    }
}

/// Depth-first search for the first `ERROR` or `MISSING` node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error)
}
