//! Error types for rule-table construction, lexer lookup and configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a rule table or looking up a lexer
///
/// Tokenization itself never fails: unmatched input becomes an
/// [`Error`](crate::TokenKind::Error) token.
#[derive(Debug, Error)]
pub enum LexError {
    /// A rule pattern failed to compile
    #[error("invalid pattern {pattern:?} in state `{state}`: {source}")]
    InvalidPattern {
        /// State declaring the rule
        state: String,
        /// The offending pattern
        pattern: String,
        /// Underlying regex build error
        source: regex_automata::meta::BuildError,
    },

    /// A grouped rule's token kinds do not line up with its capture groups
    #[error(
        "pattern {pattern:?} in state `{state}` has {groups} capture group(s) but {kinds} token kind(s)"
    )]
    GroupMismatch {
        /// State declaring the rule
        state: String,
        /// The offending pattern
        pattern: String,
        /// Explicit capture groups in the pattern
        groups: usize,
        /// Token kinds supplied for the groups
        kinds: usize,
    },

    /// A grouped rule has nested or repeated capture groups, whose spans
    /// could overlap
    #[error("pattern {pattern:?} in state `{state}` has nested or repeated capture groups")]
    OverlappingGroups {
        /// State declaring the rule
        state: String,
        /// The offending pattern
        pattern: String,
    },

    /// A transition names a state the table does not declare
    #[error("state `{state}` transitions to undeclared state `{target}`")]
    UnknownState {
        /// State declaring the rule
        state: String,
        /// The missing target state
        target: String,
    },

    /// The table has no `root` state
    #[error("rule table has no `root` state")]
    MissingRoot,

    /// A state name was declared twice
    #[error("state `{0}` declared more than once")]
    DuplicateState(String),

    /// No registered lexer matches the query
    #[error("no lexer found for {0}")]
    LexerNotFound(String),
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        /// Path of the config file
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`](crate::config::Config)
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Path of the config file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// The config could not be serialized
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
