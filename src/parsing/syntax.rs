// src/parsing/syntax.rs

//! Owned, typed view of a parsed module.
//!
//! Only the shapes the classifier distinguishes get their own variant; every
//! other construct is kept as `Other` with its grammar kind so the tree stays
//! faithful to the source's statement structure.

/// A parsed module: its top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyntaxTree {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `function name() { ... }` or `function* name() { ... }`.
    Function(FunctionDeclaration),
    /// `export <declaration>` or `export default <declaration | expression>`.
    Export(Box<Statement>),
    /// `const` / `let` / `var` declarations.
    Variable(Vec<VariableDeclarator>),
    Class {
        name: Option<String>,
    },
    Return(Option<Expression>),
    Block(Vec<Statement>),
    If {
        consequent: Box<Statement>,
        alternate: Option<Box<Statement>>,
    },
    Expression(Expression),
    /// Anything else (loops, imports, type declarations, ...), by grammar kind.
    Other(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    /// `None` only for `export default function () {}`.
    pub name: Option<String>,
    pub is_generator: bool,
    /// The statements of the function's own body block.
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclarator {
    /// Source text of the binding (an identifier or a destructuring pattern).
    pub name: String,
    pub init: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// `<div/>`, `<Foo bar="1">...</Foo>`, `<Menu.Item/>`.
    JsxElement { tag: String },
    /// `<>...</>`. Not a JSX element.
    JsxFragment,
    Arrow(ArrowBody),
    Function { name: Option<String> },
    Other(&'static str),
}

impl Expression {
    pub fn is_jsx_element(&self) -> bool {
        matches!(self, Expression::JsxElement { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrowBody {
    Block(Vec<Statement>),
    Expression(Box<Expression>),
}
