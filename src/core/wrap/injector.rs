//! Hook and import injection for rewritten components.
//!
//! After a component received `t(...)` calls, it needs
//! `const { t } = useTranslation();` at the top of its body, and the file
//! needs `useTranslation` imported from the configured module.

use swc_common::Spanned;
use swc_ecma_ast::{
    CallExpr, Callee, Expr, ExprStmt, ImportDecl, ImportSpecifier, Lit, Module, ModuleDecl,
    ModuleExportName, ModuleItem, Stmt,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::edit::{TextEdit, line_ending, line_indent, same_line};
use crate::core::parsers::jsx::ParsedJSX;
use crate::core::wrap::component::ComponentBody;
use crate::core::wrap::{HOOK_NAME, TRANSLATION_FN, WrapOptions};
use crate::utils::js_string_literal;

/// How the hook import was made available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportChange {
    /// The import already provided the hook.
    Present,
    /// `useTranslation` was appended to an existing import.
    Extended,
    /// A new import declaration was added.
    Added,
}

/// `const { t } = useTranslation();`, with the namespace argument when set.
pub fn hook_statement(namespace: Option<&str>) -> String {
    let args = namespace.map(js_string_literal).unwrap_or_default();
    format!("const {{ {} }} = {}({});", TRANSLATION_FN, HOOK_NAME, args)
}

/// Finds any call to the hook identifier.
struct HookCallFinder {
    found: bool,
}

impl Visit for HookCallFinder {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(callee) = &node.callee
            && let Expr::Ident(ident) = &**callee
            && ident.sym.as_str() == HOOK_NAME
        {
            self.found = true;
            return;
        }
        node.visit_children_with(self);
    }
}

/// Whether the body already calls `useTranslation`.
pub fn calls_hook(body: ComponentBody<'_>) -> bool {
    let mut finder = HookCallFinder { found: false };
    match body {
        ComponentBody::Block(block) => block.visit_with(&mut finder),
        ComponentBody::Expr(expr) => expr.visit_with(&mut finder),
    }
    finder.found
}

/// Edits that declare `t` at the top of a component body.
///
/// Returns `None` when the body already calls the hook.
pub fn hook_edits(
    body: ComponentBody<'_>,
    parsed: &ParsedJSX,
    source: &str,
    options: &WrapOptions,
) -> Option<Vec<TextEdit>> {
    if calls_hook(body) {
        return None;
    }
    let statement = hook_statement(options.namespace.as_deref());

    let edits = match body {
        ComponentBody::Block(block) => {
            let (open, _) = parsed.byte_range(block.span);
            let after_brace = open + 1;
            let text = match block.stmts.first() {
                Some(first) => {
                    let (first_lo, _) = parsed.byte_range(first.span());
                    if same_line(source, open, first_lo) {
                        format!(" {}", statement)
                    } else {
                        format!(
                            "{}{}{}",
                            line_ending(source),
                            line_indent(source, first_lo),
                            statement
                        )
                    }
                }
                None => format!(" {} ", statement),
            };
            vec![TextEdit::insert(after_brace, text)]
        }
        ComponentBody::Expr(expr) => {
            let (lo, hi) = parsed.byte_range(expr.span());
            vec![
                TextEdit::insert(lo, format!("{{ {} return ", statement)),
                TextEdit::insert(hi, "; }"),
            ]
        }
    };
    Some(edits)
}

fn imported_name(spec: &ImportSpecifier) -> Option<&str> {
    let ImportSpecifier::Named(named) = spec else {
        return None;
    };
    match &named.imported {
        Some(ModuleExportName::Ident(ident)) => Some(ident.sym.as_str()),
        Some(ModuleExportName::Str(s)) => s.value.as_str(),
        None => Some(named.local.sym.as_str()),
    }
}

fn is_value_import_from(import: &ImportDecl, module: &str) -> bool {
    !import.type_only && import.src.value.as_str() == Some(module)
}

fn provides_hook(import: &ImportDecl) -> bool {
    import.specifiers.iter().any(|spec| {
        let type_only = matches!(spec, ImportSpecifier::Named(named) if named.is_type_only);
        !type_only && imported_name(spec) == Some(HOOK_NAME)
    })
}

/// Edit that appends the hook to an existing import, if its shape allows it.
fn extend_import(import: &ImportDecl, parsed: &ParsedJSX) -> Option<TextEdit> {
    let last_named = import
        .specifiers
        .iter()
        .rev()
        .find(|spec| matches!(spec, ImportSpecifier::Named(_)));
    if let Some(named) = last_named {
        let (_, hi) = parsed.byte_range(named.span());
        return Some(TextEdit::insert(hi, format!(", {}", HOOK_NAME)));
    }

    match import.specifiers.as_slice() {
        [ImportSpecifier::Default(default)] => {
            let (_, hi) = parsed.byte_range(default.span);
            Some(TextEdit::insert(hi, format!(", {{ {} }}", HOOK_NAME)))
        }
        // Namespace and side-effect imports cannot take named specifiers.
        _ => None,
    }
}

fn is_directive(item: &ModuleItem) -> bool {
    matches!(
        item,
        ModuleItem::Stmt(Stmt::Expr(ExprStmt { expr, .. })) if matches!(&**expr, Expr::Lit(Lit::Str(_)))
    )
}

/// Edits that make `useTranslation` importable from `import_source`.
pub fn import_edits(
    module: &Module,
    parsed: &ParsedJSX,
    source: &str,
    import_source: &str,
) -> (ImportChange, Vec<TextEdit>) {
    let imports: Vec<&ImportDecl> = module
        .body
        .iter()
        .filter_map(|item| match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(import))
                if is_value_import_from(import, import_source) =>
            {
                Some(import)
            }
            _ => None,
        })
        .collect();

    if imports.iter().any(|import| provides_hook(import)) {
        return (ImportChange::Present, Vec::new());
    }
    if let Some(edit) = imports.iter().find_map(|import| extend_import(import, parsed)) {
        return (ImportChange::Extended, vec![edit]);
    }

    let declaration = format!(
        "import {{ {} }} from {};",
        HOOK_NAME,
        js_string_literal(import_source)
    );
    let newline = line_ending(source);
    let last_directive = module.body.iter().take_while(|item| is_directive(item)).last();
    let edit = match last_directive {
        Some(directive) => {
            let (_, hi) = parsed.byte_range(directive.span());
            TextEdit::insert(hi, format!("{}{}", newline, declaration))
        }
        None => {
            // Keep a byte order mark first and a shebang on the first line.
            let start = parsed.bom_len;
            let at = if source[start..].starts_with("#!") {
                source[start..]
                    .find('\n')
                    .map_or(source.len(), |i| start + i + 1)
            } else {
                start
            };
            TextEdit::insert(at, format!("{}{}", declaration, newline))
        }
    };
    (ImportChange::Added, vec![edit])
}
