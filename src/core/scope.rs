//! Lexical binding tracking.
//!
//! Tracks which names are declared in each enclosing scope while walking the
//! AST, so the injector can tell whether `t` is already bound where a
//! component lives.

use std::collections::HashSet;

use swc_ecma_ast::{
    Decl, DefaultDecl, ImportSpecifier, ModuleDecl, ModuleItem, ObjectPatProp, Pat, Stmt,
};

/// Manages declared names with scope tracking.
///
/// Maintains a stack of scopes. Entering a function, arrow function or block
/// pushes a scope; exiting pops it.
///
/// # Example
/// ```ignore
/// import { t } from "i18n";    // scope 0: t
/// function Page() {            // push scope 1
///     const title = "x";       // scope 1: title
///     is_bound("t")            // true, found in scope 0
/// }                            // pop scope 1
/// ```
#[derive(Debug)]
pub struct ScopeStack {
    /// Stack of scopes (innermost last).
    scopes: Vec<HashSet<String>>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// Create a new ScopeStack with a single module scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![HashSet::new()],
        }
    }

    /// Enter a new scope holding `names`.
    pub fn enter_scope(&mut self, names: HashSet<String>) {
        self.scopes.push(names);
    }

    /// Exit the current scope. Keeps at least the module scope.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Declare names in the current (innermost) scope.
    pub fn declare<I: IntoIterator<Item = String>>(&mut self, names: I) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.extend(names);
        }
    }

    /// Check whether `name` is bound in any enclosing scope.
    pub fn is_bound(&self, name: &str) -> bool {
        self.scopes.iter().rev().any(|scope| scope.contains(name))
    }
}

/// Collect every identifier bound by a pattern.
pub fn extract_binding_names(pat: &Pat) -> Vec<String> {
    match pat {
        Pat::Ident(ident) => vec![ident.id.sym.to_string()],
        Pat::Object(obj) => obj
            .props
            .iter()
            .flat_map(|prop| match prop {
                ObjectPatProp::KeyValue(kv) => extract_binding_names(&kv.value),
                ObjectPatProp::Assign(assign) => vec![assign.key.sym.to_string()],
                ObjectPatProp::Rest(rest) => extract_binding_names(&rest.arg),
            })
            .collect(),
        Pat::Array(arr) => arr
            .elems
            .iter()
            .flatten()
            .flat_map(extract_binding_names)
            .collect(),
        Pat::Assign(assign) => extract_binding_names(&assign.left),
        Pat::Rest(rest) => extract_binding_names(&rest.arg),
        _ => vec![],
    }
}

/// Names introduced by a declaration.
pub fn decl_names(decl: &Decl) -> Vec<String> {
    match decl {
        Decl::Var(var) => var
            .decls
            .iter()
            .flat_map(|d| extract_binding_names(&d.name))
            .collect(),
        Decl::Fn(f) => vec![f.ident.sym.to_string()],
        Decl::Class(c) => vec![c.ident.sym.to_string()],
        Decl::TsEnum(e) => vec![e.id.sym.to_string()],
        _ => vec![],
    }
}

/// Names declared directly in a statement list (one block level).
pub fn stmt_names(stmts: &[Stmt]) -> HashSet<String> {
    stmts
        .iter()
        .filter_map(|stmt| match stmt {
            Stmt::Decl(decl) => Some(decl_names(decl)),
            _ => None,
        })
        .flatten()
        .collect()
}

/// Names declared at module level, including imports.
pub fn module_names(items: &[ModuleItem]) -> HashSet<String> {
    let mut names = HashSet::new();
    for item in items {
        match item {
            ModuleItem::Stmt(Stmt::Decl(decl)) => names.extend(decl_names(decl)),
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => {
                names.extend(import.specifiers.iter().map(|spec| match spec {
                    ImportSpecifier::Named(named) => named.local.sym.to_string(),
                    ImportSpecifier::Default(default) => default.local.sym.to_string(),
                    ImportSpecifier::Namespace(ns) => ns.local.sym.to_string(),
                }));
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                names.extend(decl_names(&export.decl));
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => match &export.decl {
                DefaultDecl::Fn(f) => names.extend(f.ident.as_ref().map(|i| i.sym.to_string())),
                DefaultDecl::Class(c) => {
                    names.extend(c.ident.as_ref().map(|i| i.sym.to_string()))
                }
                _ => {}
            },
            _ => {}
        }
    }
    names
}
