// src/classify.rs

//! Decides whether a parsed module declares a UI component.
//!
//! The rule is syntactic and deliberately narrow: a module declares a component
//! when one of its named, top-level function declarations has a `return <Jsx/>`
//! directly in its body. Arrow functions, function expressions, classes and
//! returns inside nested blocks are not considered.

use crate::parsing::{FunctionDeclaration, Statement, SyntaxTree};

/// Returns `true` if `tree` declares a component. `path` is only used for logging.
///
/// # Examples
///
/// ```
/// use component_checklist::classify::declares_component;
/// use component_checklist::parsing::SourceParser;
///
/// let mut parser = SourceParser::new().unwrap();
///
/// let tree = parser.parse("function Foo() { return <div/>; }", "Foo.jsx").unwrap();
/// assert!(declares_component(&tree, "Foo.jsx"));
///
/// let tree = parser.parse("const Foo = () => <div/>;", "Foo.jsx").unwrap();
/// assert!(!declares_component(&tree, "Foo.jsx"));
/// ```
pub fn declares_component(tree: &SyntaxTree, path: &str) -> bool {
    match tree
        .statements
        .iter()
        .filter_map(top_level_function)
        .find(|decl| returns_jsx_element(decl))
    {
        Some(decl) => {
            log::debug!(
                "'{}' declares component '{}'",
                path,
                decl.name.as_deref().unwrap_or_default()
            );
            true
        }
        None => false,
    }
}

/// Unwraps `export` / `export default` and yields named function declarations.
fn top_level_function(statement: &Statement) -> Option<&FunctionDeclaration> {
    match statement {
        Statement::Function(decl) if decl.name.is_some() => Some(decl),
        Statement::Export(inner) => top_level_function(inner),
        _ => None,
    }
}

/// Only the function's own statement list is inspected.
fn returns_jsx_element(decl: &FunctionDeclaration) -> bool {
    decl.body.iter().any(|statement| {
        matches!(statement, Statement::Return(Some(argument)) if argument.is_jsx_element())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::SourceParser;

    fn classify(source: &str) -> bool {
        let tree = SourceParser::new()
            .unwrap()
            .parse(source, "Component.tsx")
            .unwrap();
        declares_component(&tree, "Component.tsx")
    }

    #[test]
    fn test_function_returning_jsx_is_component() {
        assert!(classify("function Foo() { return <div/>; }"));
    }

    #[test]
    fn test_function_returning_number_is_not_component() {
        assert!(!classify("function foo() { return 1; }"));
    }

    #[test]
    fn test_arrow_function_is_not_detected() {
        assert!(!classify("const Foo = () => <div/>;"));
        assert!(!classify("const Foo = () => { return <div/>; };"));
    }

    #[test]
    fn test_function_expression_is_not_detected() {
        assert!(!classify("const Foo = function () { return <div/>; };"));
        assert!(!classify("const Foo = function Named() { return <div/>; };"));
    }

    #[test]
    fn test_nested_return_is_not_detected() {
        assert!(!classify(
            "function Foo(props) { if (props.ok) { return <div/>; } return null; }"
        ));
        assert!(!classify("function Foo() { { return <div/>; } }"));
        assert!(!classify(
            "function Foo(items) { for (const i of items) { return <li/>; } }"
        ));
    }

    #[test]
    fn test_nested_function_declaration_is_not_top_level() {
        assert!(!classify(
            "function outer() { function Inner() { return <div/>; } return Inner; }"
        ));
    }

    #[test]
    fn test_class_component_is_not_detected() {
        assert!(!classify(
            "class Foo extends React.Component { render() { return <div/>; } }"
        ));
    }

    #[test]
    fn test_fragment_is_not_a_jsx_element() {
        assert!(!classify("function Foo() { return <><span/></>; }"));
    }

    #[test]
    fn test_exported_declarations_are_detected() {
        assert!(classify("export function Foo() { return <div/>; }"));
        assert!(classify("export default function Foo() { return <Bar/>; }"));
    }

    #[test]
    fn test_anonymous_default_export_is_not_detected() {
        assert!(!classify("export default function () { return <div/>; }"));
    }

    #[test]
    fn test_parenthesized_multiline_return_is_detected() {
        let source = r#"
            import React from "react";

            type Props = { name: string };

            export function Avatar({ name }: Props) {
              const initials = name.slice(0, 2);
              return (
                <span className="avatar" title={name}>
                  {initials}
                </span>
              );
            }
        "#;
        assert!(classify(source));
    }

    #[test]
    fn test_any_return_in_body_counts() {
        // An early non-JSX return does not hide a later direct JSX return.
        assert!(classify(
            "function Foo(p) { if (!p) return null; return <div/>; }"
        ));
    }

    #[test]
    fn test_later_declaration_matches() {
        assert!(classify(
            "function helper() { return 1; }\nfunction View() { return <p/>; }"
        ));
    }

    #[test]
    fn test_empty_module() {
        assert!(!classify(""));
    }
}
