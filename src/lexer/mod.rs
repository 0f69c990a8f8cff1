//! Rule-table lexing engine and lexer registry
//!
//! A lexer is an immutable [`RuleTable`] plus some metadata (aliases,
//! filename globs, mime types) that front ends use to pick it:
//! - [`RuleTable`] holds named states of ordered rules
//! - [`Tokens`] drives the state machine lazily over one input
//! - [`LexerRegistry`] resolves lexers by alias, filename or mime type

mod filter;
mod options;
mod rule;
mod table;
mod token;
mod tokens;

use std::borrow::Cow;
use std::path::Path;

use log::warn;

pub use filter::{Merged, merge_tokens};
pub use options::LexerOptions;
pub use rule::{Action, Rule, RuleSpec, Transition};
pub use table::{ROOT, RuleTable, RuleTableBuilder, State};
pub use token::{Span, Token, TokenKind};
pub use tokens::Tokens;

use crate::error::LexError;
use crate::morloc::MorlocLexer;

/// A lexer a highlighting front end can select and run
pub trait Lexer: Send + Sync {
    /// Human-readable name (e.g., "Morloc")
    fn name(&self) -> &str;

    /// Short names used to select the lexer
    fn aliases(&self) -> &[&str];

    /// Filename globs this lexer handles
    fn filenames(&self) -> &[&str];

    /// Mime types this lexer handles
    fn mimetypes(&self) -> &[&str];

    /// The rule table driving this lexer
    fn rules(&self) -> &RuleTable;

    /// Input preprocessing options
    fn options(&self) -> LexerOptions;

    /// Apply [`Lexer::options`] to source text
    fn preprocess<'s>(&self, source: &'s str) -> Cow<'s, str> {
        self.options().preprocess(source)
    }

    /// Tokenize already preprocessed text
    fn tokenize<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        self.rules().tokenize(text)
    }
}

/// Registry of lexers
pub struct LexerRegistry {
    lexers: Vec<Box<dyn Lexer>>,
}

impl std::fmt::Debug for LexerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexerRegistry")
            .field("lexers", &format!("{} lexer(s)", self.lexers.len()))
            .finish()
    }
}

impl Default for LexerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LexerRegistry {
    /// Create a registry with the built-in lexers and default options
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(LexerOptions::default())
    }

    /// Create a registry with the built-in lexers using `options`
    #[must_use]
    pub fn with_options(options: LexerOptions) -> Self {
        Self {
            lexers: vec![
                Box::new(MorlocLexer::with_options(options)),
                // Add more built-in lexers here
            ],
        }
    }

    /// Register a custom lexer; later registrations do not shadow earlier ones
    pub fn register(&mut self, lexer: Box<dyn Lexer>) {
        self.lexers.push(lexer);
    }

    /// Registered lexers in registration order
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Lexer + 'static)> {
        self.lexers.iter().map(AsRef::as_ref)
    }

    /// Find a lexer by alias (case-insensitive)
    pub fn by_alias(&self, alias: &str) -> Result<&dyn Lexer, LexError> {
        self.iter()
            .find(|l| l.aliases().iter().any(|a| a.eq_ignore_ascii_case(alias)))
            .ok_or_else(|| LexError::LexerNotFound(format!("alias `{alias}`")))
    }

    /// Find a lexer whose filename globs match the file name of `path`
    pub fn for_filename(&self, path: &Path) -> Result<&dyn Lexer, LexError> {
        let not_found = || LexError::LexerNotFound(format!("file {}", path.display()));
        let name = path.file_name().and_then(|n| n.to_str()).ok_or_else(not_found)?;

        self.iter()
            .find(|l| l.filenames().iter().any(|glob| filename_matches(glob, name)))
            .ok_or_else(not_found)
    }

    /// Find a lexer by mime type
    pub fn for_mimetype(&self, mime: &str) -> Result<&dyn Lexer, LexError> {
        self.iter()
            .find(|l| l.mimetypes().contains(&mime))
            .ok_or_else(|| LexError::LexerNotFound(format!("mime type `{mime}`")))
    }
}

fn filename_matches(glob: &str, name: &str) -> bool {
    match glob::Pattern::new(glob) {
        Ok(pattern) => pattern.matches(name),
        Err(err) => {
            warn!("ignoring invalid filename glob {glob:?}: {err}");
            false
        },
    }
}
