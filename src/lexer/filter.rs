//! Token stream filters

use std::iter::Peekable;

use super::{Span, Token};

/// Merges runs of adjacent tokens that share a kind
///
/// Block comments, for instance, are lexed piecewise (delimiters and body
/// separately) but read as one region once merged.
#[derive(Debug, Clone)]
pub struct Merged<'a, I>
where
    I: Iterator<Item = Token<'a>>,
{
    source: &'a str,
    inner: Peekable<I>,
}

impl<'a, I> Merged<'a, I>
where
    I: Iterator<Item = Token<'a>>,
{
    /// Wrap a token stream over `source`
    #[must_use]
    pub fn new(source: &'a str, tokens: I) -> Self {
        Self {
            source,
            inner: tokens.peekable(),
        }
    }
}

impl<'a, I> Iterator for Merged<'a, I>
where
    I: Iterator<Item = Token<'a>>,
{
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.inner.next()?;
        let mut end = first.span.end;
        while let Some(next) = self.inner.next_if(|t| t.kind == first.kind && t.span.start == end) {
            end = next.span.end;
        }
        Some(Token::new(first.kind, Span::new(first.span.start, end), self.source))
    }
}

/// Merge adjacent same-kind tokens of any token stream over `source`
#[must_use]
pub fn merge_tokens<'a, I>(source: &'a str, tokens: I) -> Merged<'a, I::IntoIter>
where
    I: IntoIterator<Item = Token<'a>>,
{
    Merged::new(source, tokens.into_iter())
}
