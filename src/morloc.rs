//! The Morloc lexer
//!
//! Rules are tried top to bottom within a state and the first match wins, so
//! order matters: `where` is claimed as a keyword before the identifier
//! rules see it, grouped `source`/`import`/`type` forms come before bare
//! identifiers, and the float forms come before the integer forms.
//!
//! States:
//! - `root`: top-level code
//! - `comment`: nested `{- ... -}` block comments
//! - `module`: the name after `module`
//! - `string`: inside `"..."`
//! - `escape`: exactly one escape sequence after `\`
//! - `sourcelist`: the parenthesised list after `source NAME [from "path"]`
//! - `importlist`: the parenthesised list after `import`

use std::sync::LazyLock;

use crate::error::LexError;
use crate::lexer::TokenKind::{
    self, CommentMultiline, CommentSingle, Keyword, KeywordReserved, KeywordType, Name,
    NameBuiltin, NumberBin, NumberFloat, NumberHex, NumberInteger, NumberOct, OperatorWord,
    Punctuation, StringEscape, Text, Whitespace,
};
use crate::lexer::{Lexer, LexerOptions, ROOT, RuleSpec, RuleTable, Transition};

/// Reserved words of the language
pub const RESERVED: [&str; 10] = [
    "module", "source", "export", "import", "object", "table", "record", "type", "where", "from",
];

static RULES: LazyLock<RuleTable> =
    LazyLock::new(|| rules().expect("built-in Morloc rule table must compile"));

/// The shared, immutable Morloc rule table
#[must_use]
pub fn table() -> &'static RuleTable {
    &RULES
}

/// Build the Morloc rule table
///
/// [`table`] holds the one instance the crate uses; this is exposed so the
/// table can be inspected or extended.
#[allow(clippy::too_many_lines)]
pub fn rules() -> Result<RuleTable, LexError> {
    let t = RuleSpec::token;
    let g = RuleSpec::groups;
    let into_sourcelist = || Transition::sequence([ROOT, "sourcelist"]);

    RuleTable::builder()
        .state(
            ROOT,
            vec![
                t("where", KeywordReserved),
                t(r"\s+", Whitespace),
                t(r"--.*$", CommentSingle),
                t(r"\{-", CommentMultiline).push("comment"),
                t(r"\bmodule\b", KeywordReserved).push("module"),
                g(
                    r"(source)(\s+)([A-Za-z]+)(\s*)(\()",
                    &[KeywordReserved, Whitespace, Name, Whitespace, Text],
                )
                .then(into_sourcelist()),
                g(
                    r#"(source)(\s+)([A-Za-z]+)(\s+)(from)(\s+)("[^"]+")(\s*)(\()"#,
                    &[
                        KeywordReserved,
                        Whitespace,
                        Name,
                        Whitespace,
                        KeywordReserved,
                        Whitespace,
                        TokenKind::String,
                        Whitespace,
                        Text,
                    ],
                )
                .then(into_sourcelist()),
                g(r"(type)(\s+)([A-Z][A-Za-z]*)", &[KeywordReserved, Whitespace, Name]),
                // captures one character of the exported name; the rest lexes as a second Name
                g(r"^(export)(\s+)([\w+])", &[KeywordReserved, Whitespace, Name]),
                g(r"(\bimport\b)(\s+)([a-zA-Z.][\w]+)", &[KeywordReserved, Whitespace, Name]),
                g(r"(\bimport\b)(\s*)(\()", &[KeywordReserved, Whitespace, Punctuation])
                    .push("importlist"),
                g(
                    r"(object|table|record)(\s+)([A-Z]\w+)(\s*)(=)",
                    &[KeywordReserved, Whitespace, Name, Whitespace, OperatorWord],
                ),
                // identifiers
                t(r"\p{Ll}[\w']*", Name),
                t(r"\p{Lu}[\w']*", Name),
                // promoted lists, tuples and type operators
                t(r"(')\[[^\]]*\]", KeywordType),
                t(r"(')\([^)]*\)", KeywordType),
                t(r"(')[:!#$%&*+.\\/<=>?@^|~\-]+", KeywordType),
                t(r"(<-|::|->|=>|=|\.|\\|@)", OperatorWord),
                // numbers
                t(r"0[xX]_*[\da-fA-F](_*[\da-fA-F])*_*[pP][+-]?\d(_*\d)*", NumberFloat),
                t(
                    r"0[xX]_*[\da-fA-F](_*[\da-fA-F])*\.[\da-fA-F](_*[\da-fA-F])*(_*[pP][+-]?\d(_*\d)*)?",
                    NumberFloat,
                ),
                t(r"\d(_*\d)*_*[eE][+-]?\d(_*\d)*", NumberFloat),
                t(r"\d(_*\d)*\.\d(_*\d)*(_*[eE][+-]?\d(_*\d)*)?", NumberFloat),
                t(r"0[bB]_*[01](_*[01])*", NumberBin),
                t(r"0[oO]_*[0-7](_*[0-7])*", NumberOct),
                t(r"0[xX]_*[\da-fA-F](_*[\da-fA-F])*", NumberHex),
                t(r"\d(_*\d)*", NumberInteger),
                t(r#"""#, TokenKind::String).push("string"),
                t(r"\[\]", KeywordType),
                t(r"\(\)", NameBuiltin),
                t(r"[\]\[(),;`{}]", Punctuation),
            ],
        )
        .state(
            "comment",
            vec![
                t(r"[^\-{}]+", CommentMultiline),
                t(r"\{-", CommentMultiline).push("comment"),
                t(r"-\}", CommentMultiline).pop(),
                t(r"[\-{}]", CommentMultiline),
            ],
        )
        .state(
            "module",
            vec![t(r"\s+", Whitespace), t(r"[\p{Ll}\p{Lu}][\w.]*", Name).pop()],
        )
        .state(
            "string",
            vec![
                t(r#"[^\\"]+"#, TokenKind::String),
                t(r"\\", StringEscape).push("escape"),
                t(r#"""#, TokenKind::String).pop(),
            ],
        )
        .state(
            "escape",
            vec![
                t(r#"[abfnrtv"'&\\]"#, StringEscape).pop(),
                t(r"\^[\]\[\p{Lu}@^_]", StringEscape).pop(),
                t(r"o[0-7]+", StringEscape).pop(),
                t(r"x[\da-fA-F]+", StringEscape).pop(),
                t(r"\d+", StringEscape).pop(),
                g(r"(\s+)(\\)", &[Whitespace, StringEscape]).pop(),
            ],
        )
        .state(
            "sourcelist",
            vec![
                t(r"\s+", Whitespace),
                t(r"\(", Text).push("sourcelist"),
                t(r"\)", Text).pop(),
                // aliases first, or the bare string rule would claim the name
                g(
                    r#"("[^"]+")(\s+)(as)(\s+)(\w+)"#,
                    &[TokenKind::String, Whitespace, Keyword, Whitespace, Name],
                ),
                t(r#""[^"]+""#, TokenKind::String),
                t(",", Punctuation),
            ],
        )
        .state(
            "importlist",
            vec![
                t(r"\s+", Whitespace),
                t(r"\(", Punctuation).push("importlist"),
                t(r"\)", Punctuation).pop(),
                t(r"[A-Za-z]\w*", Name),
                t(",", Punctuation),
            ],
        )
        .build()
}

/// Lexer for Morloc source (`*.loc`)
#[derive(Debug, Clone, Copy, Default)]
pub struct MorlocLexer {
    options: LexerOptions,
}

impl MorlocLexer {
    /// Create the lexer with default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the lexer with `options`
    #[must_use]
    pub const fn with_options(options: LexerOptions) -> Self {
        Self { options }
    }
}

impl Lexer for MorlocLexer {
    fn name(&self) -> &'static str {
        "Morloc"
    }

    fn aliases(&self) -> &[&str] {
        &["morloc"]
    }

    fn filenames(&self) -> &[&str] {
        &["*.loc"]
    }

    fn mimetypes(&self) -> &[&str] {
        &["text/x-morloc"]
    }

    fn rules(&self) -> &RuleTable {
        table()
    }

    fn options(&self) -> LexerOptions {
        self.options
    }
}
