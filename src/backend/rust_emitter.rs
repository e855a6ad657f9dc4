//! Rust code emitter - builds Rust source code strings
//!
//! This module provides utilities for building well-formatted Rust code.

use std::fmt::Write;

/// Reserved and strict keywords in Rust 2024, plus `self`/`Self` which cannot be raw identifiers.
pub const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try", "gen", "self", "Self",
];

/// Check whether an identifier is a Rust keyword.
pub fn is_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Render `s` as a Rust string literal (quoted and escaped).
pub fn string_literal(s: &str) -> String {
    format!("{:?}", s)
}

/// A buffer for building Rust source code with proper indentation
#[derive(Debug, Default)]
pub struct RustEmitter {
    buffer: String,
    indent_level: usize,
}

impl RustEmitter {
    const INDENT: &'static str = "    ";

    pub fn new() -> Self {
        Self::default()
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Get current buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write a formatted line with current indentation
    pub fn linef(&mut self, args: std::fmt::Arguments<'_>) {
        self.write_indent();
        let _ = self.buffer.write_fmt(args);
        self.buffer.push('\n');
    }

    /// Write a blank line
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Write indentation only
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(Self::INDENT);
        }
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a block with braces
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{} {{", header));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    /// Write a block whose closing brace is followed by `suffix` (e.g. `};` or `}),`)
    pub fn block_with_suffix<F>(&mut self, header: &str, suffix: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{} {{", header));
        self.indent();
        f(self);
        self.dedent();
        self.line(&format!("}}{}", suffix));
    }

    /// Write a function
    pub fn function<F>(&mut self, visibility: &str, name: &str, params: &str, return_type: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        let vis_str = if visibility.is_empty() {
            String::new()
        } else {
            format!("{} ", visibility)
        };
        let ret_str = if return_type.is_empty() {
            String::new()
        } else {
            format!(" -> {}", return_type)
        };
        let header = format!("{}fn {}({}){}", vis_str, name, params, ret_str);
        self.block(&header, f);
    }

    /// Write an attribute line (`#[...]`)
    pub fn attribute(&mut self, attr: &str) {
        self.line(&format!("#[{}]", attr));
    }

    /// Write a `//` comment line
    pub fn comment(&mut self, text: &str) {
        if text.is_empty() {
            self.line("//");
        } else {
            self.line(&format!("// {}", text));
        }
    }

    /// Write a `//!` inner doc comment line
    pub fn inner_doc(&mut self, text: &str) {
        if text.is_empty() {
            self.line("//!");
        } else {
            self.line(&format!("//! {}", text));
        }
    }
}
