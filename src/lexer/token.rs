//! Token types produced by the lexer

use serde::{Deserialize, Serialize};

/// A span in source text (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span contains another
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The byte range covered by this span
    #[must_use]
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Kind of token
///
/// The taxonomy is hierarchical: every subkind has a parent, e.g.
/// [`TokenKind::NumberFloat`] is a [`TokenKind::Number`]. Renderers that only
/// know the top-level categories walk [`TokenKind::parent`] until they find a
/// kind they can style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Plain text
    Text,
    /// Whitespace (a kind of text)
    Whitespace,
    /// Input no rule could classify
    Error,
    /// Keyword
    Keyword,
    /// Reserved word (`module`, `source`, `import`, ...)
    KeywordReserved,
    /// Type-level syntax (`[]`, promoted types)
    KeywordType,
    /// Identifier
    Name,
    /// Builtin name (`()`)
    NameBuiltin,
    /// String literal
    String,
    /// Escape sequence inside a string literal
    StringEscape,
    /// Number literal
    Number,
    /// Floating point literal
    NumberFloat,
    /// Binary integer literal
    NumberBin,
    /// Octal integer literal
    NumberOct,
    /// Hexadecimal integer literal
    NumberHex,
    /// Decimal integer literal
    NumberInteger,
    /// Operator
    Operator,
    /// Word-like or reserved operator (`::`, `->`, `=`)
    OperatorWord,
    /// Punctuation
    Punctuation,
    /// Comment
    Comment,
    /// Line comment (`-- ...`)
    CommentSingle,
    /// Block comment (`{- ... -}`)
    CommentMultiline,
}

impl TokenKind {
    /// Every kind, parents before children
    pub const ALL: [Self; 22] = [
        Self::Text,
        Self::Whitespace,
        Self::Error,
        Self::Keyword,
        Self::KeywordReserved,
        Self::KeywordType,
        Self::Name,
        Self::NameBuiltin,
        Self::String,
        Self::StringEscape,
        Self::Number,
        Self::NumberFloat,
        Self::NumberBin,
        Self::NumberOct,
        Self::NumberHex,
        Self::NumberInteger,
        Self::Operator,
        Self::OperatorWord,
        Self::Punctuation,
        Self::Comment,
        Self::CommentSingle,
        Self::CommentMultiline,
    ];

    /// The immediate parent kind, `None` for top-level categories
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Whitespace => Some(Self::Text),
            Self::KeywordReserved | Self::KeywordType => Some(Self::Keyword),
            Self::NameBuiltin => Some(Self::Name),
            Self::StringEscape => Some(Self::String),
            Self::NumberFloat
            | Self::NumberBin
            | Self::NumberOct
            | Self::NumberHex
            | Self::NumberInteger => Some(Self::Number),
            Self::OperatorWord => Some(Self::Operator),
            Self::CommentSingle | Self::CommentMultiline => Some(Self::Comment),
            Self::Text
            | Self::Error
            | Self::Keyword
            | Self::Name
            | Self::String
            | Self::Number
            | Self::Operator
            | Self::Punctuation
            | Self::Comment => None,
        }
    }

    /// The top-level category this kind belongs to
    #[must_use]
    pub const fn category(self) -> Self {
        let mut kind = self;
        while let Some(parent) = kind.parent() {
            kind = parent;
        }
        kind
    }

    /// Whether this kind is `other` or one of its descendants
    #[must_use]
    pub fn is_a(self, other: Self) -> bool {
        let mut kind = Some(self);
        while let Some(k) = kind {
            if k == other {
                return true;
            }
            kind = k.parent();
        }
        false
    }

    /// Dotted path of the kind, e.g. `Number.Float`
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Whitespace => "Text.Whitespace",
            Self::Error => "Error",
            Self::Keyword => "Keyword",
            Self::KeywordReserved => "Keyword.Reserved",
            Self::KeywordType => "Keyword.Type",
            Self::Name => "Name",
            Self::NameBuiltin => "Name.Builtin",
            Self::String => "String",
            Self::StringEscape => "String.Escape",
            Self::Number => "Number",
            Self::NumberFloat => "Number.Float",
            Self::NumberBin => "Number.Bin",
            Self::NumberOct => "Number.Oct",
            Self::NumberHex => "Number.Hex",
            Self::NumberInteger => "Number.Integer",
            Self::Operator => "Operator",
            Self::OperatorWord => "Operator.Word",
            Self::Punctuation => "Punctuation",
            Self::Comment => "Comment",
            Self::CommentSingle => "Comment.Single",
            Self::CommentMultiline => "Comment.Multiline",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.path().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid token kind: {s}"))
    }
}

/// A classified slice of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Kind of token
    pub kind: TokenKind,
    /// Span in the tokenized text
    pub span: Span,
    /// The covered text
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Create a token over `source[span]`
    ///
    /// # Panics
    ///
    /// Panics if the span is out of bounds or not on a char boundary.
    #[must_use]
    pub fn new(kind: TokenKind, span: Span, source: &'a str) -> Self {
        Self {
            kind,
            span,
            text: &source[span.range()],
        }
    }
}
