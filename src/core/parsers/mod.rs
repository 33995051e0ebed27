//! File parsers for source code and dictionary files.
//!
//! This module provides parsers for different file types:
//! - `json`: flat translation dictionaries (read, render, write)
//! - `jsx`: JS/JSX/TS/TSX source files (uses swc for AST generation)

pub mod json;
pub mod jsx;
