//! morloc-lexer - a lexer for the Morloc language, for syntax highlighters
//!
//! Source text goes in, a lazy stream of classified spans comes out. The
//! spans cover the input exactly; text the grammar does not recognise is
//! emitted as [`TokenKind::Error`] rather than failing.
//!
//! ```
//! use morloc_lexer::{Lexer, MorlocLexer, TokenKind};
//!
//! let lexer = MorlocLexer::new();
//! let kinds: Vec<_> = lexer.tokenize("module foo").map(|t| t.kind).collect();
//! assert_eq!(kinds, [TokenKind::KeywordReserved, TokenKind::Whitespace, TokenKind::Name]);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod highlight;
pub mod lexer;
pub mod morloc;
pub mod output;
pub mod sources;

pub use error::{ConfigError, LexError};
pub use lexer::{Lexer, LexerOptions, LexerRegistry, Span, Token, TokenKind, Tokens};
pub use morloc::MorlocLexer;

/// Tokenize Morloc source as-is, without preprocessing
#[must_use]
pub fn tokenize(source: &str) -> Tokens<'_> {
    morloc::table().tokenize(source)
}
