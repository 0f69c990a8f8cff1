//! ANSI terminal highlighting

use colored::{Color, ColoredString, Colorize};

use crate::lexer::{Token, TokenKind};

/// Terminal style for a token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Foreground colour
    pub color: Option<Color>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    const fn fg(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
            italic: false,
        }
    }

    const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Apply the style to `text`
    #[must_use]
    pub fn paint(self, text: &str) -> ColoredString {
        let mut painted = self.color.map_or_else(|| text.normal(), |c| text.color(c));
        if self.bold {
            painted = painted.bold();
        }
        if self.italic {
            painted = painted.italic();
        }
        painted
    }
}

/// Style for a kind, inherited from the nearest styled ancestor
#[must_use]
pub fn style_for(kind: TokenKind) -> Option<Style> {
    let mut kind = Some(kind);
    while let Some(k) = kind {
        if let Some(style) = own_style(k) {
            return Some(style);
        }
        kind = k.parent();
    }
    None
}

const fn own_style(kind: TokenKind) -> Option<Style> {
    Some(match kind {
        TokenKind::Keyword => Style::fg(Color::Blue).bold(),
        TokenKind::KeywordType => Style::fg(Color::Magenta),
        TokenKind::NameBuiltin => Style::fg(Color::Cyan),
        TokenKind::String => Style::fg(Color::Green),
        TokenKind::StringEscape => Style::fg(Color::Yellow).bold(),
        TokenKind::Number => Style::fg(Color::Cyan),
        TokenKind::Operator => Style::fg(Color::Magenta),
        TokenKind::Comment => Style::fg(Color::BrightBlack).italic(),
        TokenKind::Error => Style::fg(Color::Red).bold(),
        _ => return None,
    })
}

/// Render tokens as ANSI-coloured source text
#[must_use]
pub fn highlight<'a>(tokens: impl IntoIterator<Item = Token<'a>>) -> String {
    let mut out = String::new();
    for token in tokens {
        match style_for(token.kind) {
            Some(style) => out.push_str(&style.paint(token.text).to_string()),
            None => out.push_str(token.text),
        }
    }
    out
}
