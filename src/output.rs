//! Output formatting for human and JSON modes
//!
//! Token streams are collected into [`TokenReport`]s which render either as
//! one line per token or as machine-parseable JSON.

use serde::Serialize;

use crate::lexer::{Token, TokenKind};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One token, owned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Token kind
    pub kind: TokenKind,
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
    /// The covered text
    pub text: String,
}

impl From<Token<'_>> for TokenRecord {
    fn from(token: Token<'_>) -> Self {
        Self {
            kind: token.kind,
            start: token.span.start,
            end: token.span.end,
            text: token.text.to_string(),
        }
    }
}

/// Tokens of one input
#[derive(Debug, Clone, Serialize)]
pub struct TokenReport {
    /// Source file, `None` for stdin
    pub file: Option<String>,
    /// Name of the lexer used
    pub lexer: String,
    /// Tokens in input order
    pub tokens: Vec<TokenRecord>,
    /// Number of error tokens
    pub errors: usize,
}

impl TokenReport {
    /// Collect a token stream into a report
    #[must_use]
    pub fn collect<'a>(
        file: Option<String>,
        lexer: &str,
        tokens: impl IntoIterator<Item = Token<'a>>,
    ) -> Self {
        let tokens: Vec<TokenRecord> = tokens.into_iter().map(TokenRecord::from).collect();
        let errors = tokens.iter().filter(|t| t.kind == TokenKind::Error).count();
        Self {
            file,
            lexer: lexer.to_string(),
            tokens,
            errors,
        }
    }

    /// Render the report as human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push_str(&format!("{}\t{:?}\n", token.kind, token.text));
        }
        out
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Render several reports; human mode prints a header per file
pub fn render_reports(reports: &[TokenReport], mode: OutputMode) {
    match mode {
        OutputMode::Human => {
            let headers = reports.len() > 1;
            for report in reports {
                if headers {
                    println!("==> {} <==", report.file.as_deref().unwrap_or("<stdin>"));
                }
                report.render(mode);
            }
        },
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(reports).unwrap_or_default());
        },
    }
}

/// A registered lexer, for listings
#[derive(Debug, Clone, Serialize)]
pub struct LexerInfo {
    /// Lexer name
    pub name: String,
    /// Aliases
    pub aliases: Vec<String>,
    /// Filename globs
    pub filenames: Vec<String>,
    /// Mime types
    pub mimetypes: Vec<String>,
}

/// Result of listing lexers
#[derive(Debug, Serialize)]
pub struct LexerListResult {
    /// Registered lexers
    pub lexers: Vec<LexerInfo>,
}

impl LexerListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.lexers.is_empty() {
            println!("No lexers registered.");
            return;
        }

        println!("Lexers:\n");
        for l in &self.lexers {
            println!("* {}", l.aliases.join(", "));
            println!("    {} (filenames {})", l.name, l.filenames.join(", "));
            println!("    mime types: {}\n", l.mimetypes.join(", "));
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
