//! Component candidate detection.
//!
//! Components are recognised by name only: a function whose name starts with
//! an uppercase letter (`Welcome`) or a hook whose name is `use` followed by an
//! uppercase letter (`useGreeting`).

use std::collections::HashSet;

use swc_ecma_ast::{ArrowExpr, BlockStmt, BlockStmtOrExpr, Expr, Function, Pat};

use crate::core::scope::{extract_binding_names, stmt_names};

/// Check whether an identifier names a React component or custom hook.
///
/// ```
/// use i18nexus::core::wrap::is_component_name;
///
/// assert!(is_component_name("Welcome"));
/// assert!(is_component_name("useGreeting"));
/// assert!(!is_component_name("user"));
/// assert!(!is_component_name("use"));
/// assert!(!is_component_name("helper"));
/// ```
pub fn is_component_name(name: &str) -> bool {
    let starts_upper = |s: &str| s.starts_with(|c: char| c.is_ascii_uppercase());
    starts_upper(name) || name.strip_prefix("use").is_some_and(starts_upper)
}

/// Body of a component: a block, or the expression of a concise arrow.
#[derive(Debug, Clone, Copy)]
pub enum ComponentBody<'a> {
    Block(&'a BlockStmt),
    Expr(&'a Expr),
}

/// A function-like binding that passed the naming heuristic.
#[derive(Debug, Clone)]
pub struct ComponentCandidate<'a> {
    pub name: String,
    pub body: ComponentBody<'a>,
    /// Names bound by the parameters and the top level of the body.
    pub own_bindings: HashSet<String>,
}

impl<'a> ComponentCandidate<'a> {
    /// Candidate from a named function. Returns `None` for bodiless overloads.
    pub fn from_function(name: &str, function: &'a Function) -> Option<Self> {
        if !is_component_name(name) {
            return None;
        }
        let body = function.body.as_ref()?;
        let mut own_bindings = stmt_names(&body.stmts);
        own_bindings.extend(
            function
                .params
                .iter()
                .flat_map(|param| extract_binding_names(&param.pat)),
        );
        Some(Self {
            name: name.to_string(),
            body: ComponentBody::Block(body),
            own_bindings,
        })
    }

    /// Candidate from an arrow function bound to `name`.
    pub fn from_arrow(name: &str, arrow: &'a ArrowExpr) -> Option<Self> {
        if !is_component_name(name) {
            return None;
        }
        let mut own_bindings: HashSet<String> =
            arrow.params.iter().flat_map(extract_binding_names).collect();
        let body = match &*arrow.body {
            BlockStmtOrExpr::BlockStmt(block) => {
                own_bindings.extend(stmt_names(&block.stmts));
                ComponentBody::Block(block)
            }
            BlockStmtOrExpr::Expr(expr) => ComponentBody::Expr(expr),
        };
        Some(Self {
            name: name.to_string(),
            body,
            own_bindings,
        })
    }
}

/// Strip parentheses around an initializer: `const A = (() => ...)`.
pub fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        _ => expr,
    }
}

/// Identifier name of a simple binding pattern.
pub fn binding_ident_name(pat: &Pat) -> Option<String> {
    match pat {
        Pat::Ident(ident) => Some(ident.id.sym.to_string()),
        _ => None,
    }
}
