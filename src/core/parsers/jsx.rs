use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use swc_common::{BytePos, FileName, Globals, SourceMap, Span, comments::SingleThreadedComments};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

const BOM: char = '\u{FEFF}';

pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    /// Position of the first byte of the file inside `source_map`.
    /// Span positions are offset by this value.
    pub start_pos: BytePos,
    /// Length of a byte order mark stripped before parsing. Spans do not
    /// include it, the original text does.
    pub bom_len: usize,
}

impl ParsedJSX {
    /// Convert a span into a byte range of the original source text.
    pub fn byte_range(&self, span: Span) -> (usize, usize) {
        (
            (span.lo.0 - self.start_pos.0) as usize + self.bom_len,
            (span.hi.0 - self.start_pos.0) as usize + self.bom_len,
        )
    }

    /// 1-based line and column of a span start.
    pub fn line_col(&self, span: Span) -> (usize, usize) {
        let loc = self.source_map.lookup_char_pos(span.lo);
        (loc.line, loc.col_display + 1)
    }
}

/// Pick the parser syntax from the file extension.
///
/// `.ts` files are parsed without JSX so that generic arrow functions
/// (`<T>(x: T) => x`) keep working; everything else accepts JSX.
fn syntax_for(file_path: &str) -> Syntax {
    let is_plain_ts = Path::new(file_path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| matches!(ext, "ts" | "mts" | "cts"));

    Syntax::Typescript(TsSyntax {
        tsx: !is_plain_ts,
        decorators: true,
        ..Default::default()
    })
}

/// Parse JSX/TSX source code string into an AST.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_jsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedJSX> {
    use swc_common::GLOBALS;

    let bom_len = if code.starts_with(BOM) { BOM.len_utf8() } else { 0 };
    let code = if bom_len > 0 { code[bom_len..].to_string() } else { code };

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(
            syntax_for(file_path),
            StringInput::from(&*source_file),
            Some(&comments),
        );

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e.kind()))?;

        Ok(ParsedJSX {
            module,
            source_map,
            start_pos: source_file.start_pos,
            bom_len,
        })
    })
}

/// Parse a source string with a fresh SourceMap.
pub fn parse_source(code: &str, file_path: &str) -> Result<ParsedJSX> {
    parse_jsx_source(code.to_string(), file_path, Arc::new(SourceMap::default()))
}
