//! Translation key collection.
//!
//! Finds `t("key")` and `obj.t("key")` calls with a string literal key, and
//! picks up `defaultValue` from an options object passed as the second
//! argument:
//!
//! ```typescript
//! t("home.title", { defaultValue: "Welcome" })
//! i18n.t("common.save")
//! ```

use std::sync::Arc;

use anyhow::Result;
use swc_common::SourceMap;
use swc_ecma_ast::{
    CallExpr, Callee, Expr, ExprOrSpread, Lit, MemberProp, Prop, PropName, PropOrSpread,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::parsers::jsx::{ParsedJSX, parse_jsx_source};
use crate::core::wrap::TRANSLATION_FN;

const DEFAULT_VALUE_OPTION: &str = "defaultValue";

/// One literal key found in source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedKey {
    pub key: String,
    pub default_value: Option<String>,
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

/// Visitor collecting translation keys of one file, in document order.
pub struct KeyCollector<'a> {
    parsed: &'a ParsedJSX,
    file_path: &'a str,
    pub keys: Vec<ExtractedKey>,
}

impl<'a> KeyCollector<'a> {
    pub fn new(parsed: &'a ParsedJSX, file_path: &'a str) -> Self {
        Self {
            parsed,
            file_path,
            keys: Vec::new(),
        }
    }

    fn is_translation_callee(callee: &Callee) -> bool {
        let Callee::Expr(expr) = callee else {
            return false;
        };
        match &**expr {
            Expr::Ident(ident) => ident.sym.as_str() == TRANSLATION_FN,
            Expr::Member(member) => {
                matches!(&member.prop, MemberProp::Ident(prop) if prop.sym.as_str() == TRANSLATION_FN)
            }
            _ => false,
        }
    }

    fn string_arg(arg: &ExprOrSpread) -> Option<&str> {
        if arg.spread.is_some() {
            return None;
        }
        match &*arg.expr {
            Expr::Lit(Lit::Str(s)) => s.value.as_str(),
            _ => None,
        }
    }

    /// `defaultValue` of an options object literal, when it is a plain string.
    fn default_value(arg: &ExprOrSpread) -> Option<String> {
        let Expr::Object(object) = &*arg.expr else {
            return None;
        };
        object.props.iter().find_map(|prop| {
            let PropOrSpread::Prop(prop) = prop else {
                return None;
            };
            let Prop::KeyValue(kv) = &**prop else {
                return None;
            };
            let name = match &kv.key {
                PropName::Ident(ident) => Some(ident.sym.as_str()),
                PropName::Str(s) => s.value.as_str(),
                _ => None,
            };
            if name != Some(DEFAULT_VALUE_OPTION) {
                return None;
            }
            match &*kv.value {
                Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_string),
                _ => None,
            }
        })
    }
}

impl Visit for KeyCollector<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if Self::is_translation_callee(&node.callee)
            && let Some(key) = node.args.first().and_then(Self::string_arg)
            && !key.is_empty()
        {
            let (line, col) = self.parsed.line_col(node.span);
            self.keys.push(ExtractedKey {
                key: key.to_string(),
                default_value: node.args.get(1).and_then(Self::default_value),
                file_path: self.file_path.to_string(),
                line,
                col,
            });
        }
        node.visit_children_with(self);
    }
}

/// Parse `code` and collect its translation keys.
pub fn collect_keys(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<Vec<ExtractedKey>> {
    let parsed = parse_jsx_source(code, file_path, source_map)?;
    let mut collector = KeyCollector::new(&parsed, file_path);
    parsed.module.visit_with(&mut collector);
    Ok(collector.keys)
}
