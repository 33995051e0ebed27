//! Literal rewriting inside React components.
//!
//! Two visitors cooperate here:
//! - [`ComponentRewriter`] walks the whole module, tracks lexical scopes and
//!   finds component candidates.
//! - [`LiteralRewriter`] walks a single candidate body and turns every
//!   translatable string literal or JSX text into a `t("key")` call.
//!
//! Neither visitor mutates the AST. Replacements are recorded as
//! [`TextEdit`]s against the original source.

use std::collections::HashSet;

use swc_common::Span;
use swc_ecma_ast::{
    ArrowExpr, BlockStmt, Callee, DefaultDecl, ExportDefaultDecl, Expr, ExprStmt, FnDecl,
    Function, JSXAttrValue, JSXText, Lit, Module, PropName, Str, TsEnumMemberId, TsType,
    VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::edit::TextEdit;
use crate::core::keygen::TranslationKeyMap;
use crate::core::parsers::jsx::ParsedJSX;
use crate::core::scope::{ScopeStack, extract_binding_names, module_names, stmt_names};
use crate::core::wrap::component::{
    ComponentBody, ComponentCandidate, binding_ident_name, unwrap_parens,
};
use crate::core::wrap::injector::hook_edits;
use crate::core::wrap::{TRANSLATION_FN, WrapOptions};
use crate::utils::{contains_hangul, js_string_literal};

/// Where a translatable literal was found. Decides the replacement shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralSite {
    /// `"text"` in expression position → `t("key")`
    Expression,
    /// `title="text"` → `title={t("key")}`
    JsxAttribute,
    /// `{ "텍스트": 1 }` → `{ [t("key")]: 1 }`
    PropertyKey,
    /// `<p>text</p>` → `<p>{t("key")}</p>`
    JsxText,
}

impl LiteralSite {
    fn wrap(self, call: String) -> String {
        match self {
            LiteralSite::Expression => call,
            LiteralSite::JsxAttribute | LiteralSite::JsxText => format!("{{{}}}", call),
            LiteralSite::PropertyKey => format!("[{}]", call),
        }
    }
}

/// A literal that was replaced with a translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableLiteral {
    /// Original text. For JSX text this is the trimmed value.
    pub text: String,
    pub key: String,
    pub site: LiteralSite,
    pub line: usize,
    pub col: usize,
}

/// A component whose body received at least one replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifiedComponent {
    pub name: String,
    /// Whether a `useTranslation` hook call was inserted.
    pub hook_inserted: bool,
}

/// Rewrites the literals of one component body.
pub struct LiteralRewriter<'a> {
    parsed: &'a ParsedJSX,
    source: &'a str,
    options: &'a WrapOptions,
    keys: &'a mut TranslationKeyMap,
    edits: Vec<TextEdit>,
    literals: Vec<TranslatableLiteral>,
}

impl<'a> LiteralRewriter<'a> {
    pub fn new(
        parsed: &'a ParsedJSX,
        source: &'a str,
        options: &'a WrapOptions,
        keys: &'a mut TranslationKeyMap,
    ) -> Self {
        Self {
            parsed,
            source,
            options,
            keys,
            edits: Vec::new(),
            literals: Vec::new(),
        }
    }

    pub fn finish(self) -> (Vec<TextEdit>, Vec<TranslatableLiteral>) {
        (self.edits, self.literals)
    }

    fn replace(&mut self, span: Span, start: usize, end: usize, text: &str, site: LiteralSite) {
        let key = self.options.key_generator.key_for(text, self.keys);
        let call = format!("{}({})", TRANSLATION_FN, js_string_literal(&key));
        self.edits.push(TextEdit::replace(start, end, site.wrap(call)));

        let (line, col) = self.parsed.line_col(span);
        self.literals.push(TranslatableLiteral {
            text: text.to_string(),
            key,
            site,
            line,
            col,
        });
    }

    fn rewrite_str(&mut self, s: &Str, site: LiteralSite) {
        // Strings with lone surrogates have no UTF-8 form; leave them alone.
        let Some(value) = s.value.as_str() else {
            return;
        };
        if !self.options.classifier.is_translatable(value) {
            return;
        }
        let (start, end) = self.parsed.byte_range(s.span);
        self.replace(s.span, start, end, value, site);
    }

    fn is_translation_call(callee: &Callee) -> bool {
        matches!(
            callee,
            Callee::Expr(expr) if matches!(&**expr, Expr::Ident(ident) if ident.sym.as_str() == TRANSLATION_FN)
        )
    }
}

impl Visit for LiteralRewriter<'_> {
    fn visit_call_expr(&mut self, node: &swc_ecma_ast::CallExpr) {
        if !Self::is_translation_call(&node.callee) {
            node.visit_children_with(self);
            return;
        }
        // Already wrapped: `t("텍스트")`. Only direct string arguments are kept.
        for arg in &node.args {
            if !matches!(&*arg.expr, Expr::Lit(Lit::Str(_))) {
                arg.visit_with(self);
            }
        }
    }

    fn visit_expr(&mut self, node: &Expr) {
        match node {
            Expr::Lit(Lit::Str(s)) => self.rewrite_str(s, LiteralSite::Expression),
            _ => node.visit_children_with(self),
        }
    }

    fn visit_expr_stmt(&mut self, node: &ExprStmt) {
        // Directives such as "use client" are not UI text.
        if matches!(&*node.expr, Expr::Lit(Lit::Str(_))) {
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_jsx_attr_value(&mut self, node: &JSXAttrValue) {
        match node {
            JSXAttrValue::Str(s) => self.rewrite_str(s, LiteralSite::JsxAttribute),
            _ => node.visit_children_with(self),
        }
    }

    fn visit_prop_name(&mut self, node: &PropName) {
        match node {
            PropName::Str(s) if s.value.as_str().is_some_and(contains_hangul) => {
                self.rewrite_str(s, LiteralSite::PropertyKey)
            }
            PropName::Computed(computed) => computed.visit_with(self),
            _ => {}
        }
    }

    fn visit_jsx_text(&mut self, node: &JSXText) {
        let trimmed = node.value.trim();
        if trimmed.is_empty() || !self.options.classifier.is_translatable(trimmed) {
            return;
        }

        let (lo, hi) = self.parsed.byte_range(node.span);
        let raw = &self.source[lo..hi];
        let start = lo + (raw.len() - raw.trim_start().len());
        let end = hi - (raw.len() - raw.trim_end().len());
        if start >= end {
            return;
        }
        let text = trimmed.to_string();
        self.replace(node.span, start, end, &text, LiteralSite::JsxText);
    }

    fn visit_ts_type(&mut self, _node: &TsType) {}

    fn visit_ts_enum_member_id(&mut self, _node: &TsEnumMemberId) {}
}

/// Walks a module, finds component candidates and rewrites each of them.
///
/// Candidates nested inside another candidate are handled by the outer one:
/// once a candidate is found its subtree is not searched for more.
pub struct ComponentRewriter<'a> {
    parsed: &'a ParsedJSX,
    source: &'a str,
    options: &'a WrapOptions,
    scopes: ScopeStack,
    pub keys: TranslationKeyMap,
    pub edits: Vec<TextEdit>,
    pub literals: Vec<TranslatableLiteral>,
    pub components: Vec<ModifiedComponent>,
}

impl<'a> ComponentRewriter<'a> {
    pub fn new(parsed: &'a ParsedJSX, source: &'a str, options: &'a WrapOptions) -> Self {
        Self {
            parsed,
            source,
            options,
            scopes: ScopeStack::new(),
            keys: TranslationKeyMap::new(),
            edits: Vec::new(),
            literals: Vec::new(),
            components: Vec::new(),
        }
    }

    pub fn rewrite(&mut self, module: &Module) {
        module.visit_with(self);
    }

    pub fn hooks_inserted(&self) -> usize {
        self.components.iter().filter(|c| c.hook_inserted).count()
    }

    fn rewrite_candidate(&mut self, candidate: ComponentCandidate<'_>) {
        let mut rewriter =
            LiteralRewriter::new(self.parsed, self.source, self.options, &mut self.keys);
        match candidate.body {
            ComponentBody::Block(block) => block.visit_with(&mut rewriter),
            ComponentBody::Expr(expr) => expr.visit_with(&mut rewriter),
        }
        let (edits, literals) = rewriter.finish();
        if literals.is_empty() {
            return;
        }

        let t_bound = candidate.own_bindings.contains(TRANSLATION_FN)
            || self.scopes.is_bound(TRANSLATION_FN);
        let hook = if t_bound {
            None
        } else {
            hook_edits(candidate.body, self.parsed, self.source, self.options)
        };

        self.edits.extend(edits);
        self.literals.extend(literals);
        let hook_inserted = hook.is_some();
        self.edits.extend(hook.into_iter().flatten());
        self.components.push(ModifiedComponent {
            name: candidate.name,
            hook_inserted,
        });
    }

    fn visit_function_scoped(&mut self, function: &Function) {
        let names: HashSet<String> = function
            .params
            .iter()
            .flat_map(|param| extract_binding_names(&param.pat))
            .collect();
        self.scopes.enter_scope(names);
        function.visit_children_with(self);
        self.scopes.exit_scope();
    }
}

impl Visit for ComponentRewriter<'_> {
    fn visit_module(&mut self, node: &Module) {
        self.scopes.declare(module_names(&node.body));
        node.visit_children_with(self);
    }

    fn visit_fn_decl(&mut self, node: &FnDecl) {
        let name = node.ident.sym.as_str();
        match ComponentCandidate::from_function(name, &node.function) {
            Some(candidate) => self.rewrite_candidate(candidate),
            None => self.visit_function_scoped(&node.function),
        }
    }

    fn visit_export_default_decl(&mut self, node: &ExportDefaultDecl) {
        if let DefaultDecl::Fn(fn_expr) = &node.decl
            && let Some(ident) = &fn_expr.ident
            && let Some(candidate) =
                ComponentCandidate::from_function(ident.sym.as_str(), &fn_expr.function)
        {
            self.rewrite_candidate(candidate);
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if let Some(name) = binding_ident_name(&node.name)
            && let Some(init) = &node.init
            && let Expr::Arrow(arrow) = unwrap_parens(init)
            && let Some(candidate) = ComponentCandidate::from_arrow(&name, arrow)
        {
            self.rewrite_candidate(candidate);
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_function(&mut self, node: &Function) {
        self.visit_function_scoped(node);
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        let names: HashSet<String> = node.params.iter().flat_map(extract_binding_names).collect();
        self.scopes.enter_scope(names);
        node.visit_children_with(self);
        self.scopes.exit_scope();
    }

    fn visit_block_stmt(&mut self, node: &BlockStmt) {
        self.scopes.enter_scope(stmt_names(&node.stmts));
        node.visit_children_with(self);
        self.scopes.exit_scope();
    }

    fn visit_ts_type(&mut self, _node: &TsType) {}
}
