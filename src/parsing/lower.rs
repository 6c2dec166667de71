// src/parsing/lower.rs

//! Lowers a tree-sitter concrete syntax tree into owned [`syntax`](super::syntax) types.

use super::syntax::{
    ArrowBody, Expression, FunctionDeclaration, Statement, SyntaxTree, VariableDeclarator,
};
use tree_sitter::Node;

pub(super) fn lower_program(root: Node<'_>, source: &str) -> SyntaxTree {
    let lowerer = Lowerer { source };
    SyntaxTree {
        statements: lowerer.statements(root),
    }
}

struct Lowerer<'s> {
    source: &'s str,
}

impl Lowerer<'_> {
    fn text(&self, node: Node<'_>) -> String {
        node.utf8_text(self.source.as_bytes())
            .map(str::to_string)
            .unwrap_or_default()
    }

    fn field_text(&self, node: Node<'_>, field: &str) -> Option<String> {
        node.child_by_field_name(field).map(|n| self.text(n))
    }

    /// Lowers every named, non-comment child of `parent`.
    fn statements(&self, parent: Node<'_>) -> Vec<Statement> {
        named_children(parent)
            .into_iter()
            .map(|child| self.statement(child))
            .collect()
    }

    fn statement(&self, node: Node<'_>) -> Statement {
        match node.kind() {
            "function_declaration" | "generator_function_declaration" => {
                Statement::Function(self.function_declaration(node))
            }
            "export_statement" => {
                if let Some(declaration) = node.child_by_field_name("declaration") {
                    Statement::Export(Box::new(self.statement(declaration)))
                } else if let Some(value) = node.child_by_field_name("value") {
                    Statement::Export(Box::new(Statement::Expression(self.expression(value))))
                } else {
                    // `export { a, b }` and `export * from '...'`
                    Statement::Other("export_statement")
                }
            }
            "lexical_declaration" | "variable_declaration" => Statement::Variable(
                named_children(node)
                    .into_iter()
                    .filter(|child| child.kind() == "variable_declarator")
                    .map(|declarator| VariableDeclarator {
                        name: self.field_text(declarator, "name").unwrap_or_default(),
                        init: declarator
                            .child_by_field_name("value")
                            .map(|value| self.expression(value)),
                    })
                    .collect(),
            ),
            "class_declaration" | "abstract_class_declaration" => Statement::Class {
                name: self.field_text(node, "name"),
            },
            "return_statement" => Statement::Return(
                named_children(node)
                    .into_iter()
                    .next()
                    .map(|argument| self.expression(argument)),
            ),
            "statement_block" => Statement::Block(self.statements(node)),
            "if_statement" => {
                let consequent = node
                    .child_by_field_name("consequence")
                    .map(|n| self.statement(n))
                    .unwrap_or(Statement::Block(Vec::new()));
                // The `alternative` field holds an `else_clause` wrapping the statement.
                let alternate = node
                    .child_by_field_name("alternative")
                    .and_then(|clause| named_children(clause).into_iter().next())
                    .map(|n| Box::new(self.statement(n)));
                Statement::If {
                    consequent: Box::new(consequent),
                    alternate,
                }
            }
            "expression_statement" => match named_children(node).into_iter().next() {
                Some(expression) => Statement::Expression(self.expression(expression)),
                None => Statement::Other("expression_statement"),
            },
            kind => Statement::Other(kind),
        }
    }

    fn function_declaration(&self, node: Node<'_>) -> FunctionDeclaration {
        FunctionDeclaration {
            name: self.field_text(node, "name"),
            is_generator: node.kind() == "generator_function_declaration",
            body: node
                .child_by_field_name("body")
                .map(|body| self.statements(body))
                .unwrap_or_default(),
        }
    }

    fn expression(&self, node: Node<'_>) -> Expression {
        match node.kind() {
            "parenthesized_expression" => match named_children(node).into_iter().next() {
                Some(inner) => self.expression(inner),
                None => Expression::Other("parenthesized_expression"),
            },
            "jsx_element" => {
                // Fragments are `jsx_element`s whose opening tag has no name.
                let tag = node
                    .child_by_field_name("open_tag")
                    .and_then(|open| self.field_text(open, "name"));
                match tag {
                    Some(tag) => Expression::JsxElement { tag },
                    None => Expression::JsxFragment,
                }
            }
            "jsx_self_closing_element" => Expression::JsxElement {
                tag: self.field_text(node, "name").unwrap_or_default(),
            },
            "arrow_function" => {
                let body = match node.child_by_field_name("body") {
                    Some(body) if body.kind() == "statement_block" => {
                        ArrowBody::Block(self.statements(body))
                    }
                    Some(body) => ArrowBody::Expression(Box::new(self.expression(body))),
                    None => ArrowBody::Block(Vec::new()),
                };
                Expression::Arrow(body)
            }
            "function_expression" | "function" | "generator_function" => Expression::Function {
                name: self.field_text(node, "name"),
            },
            kind => Expression::Other(kind),
        }
    }
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}
