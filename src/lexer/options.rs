//! Input preprocessing applied before tokenizing

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Preprocessing flags for lexer input
///
/// Defaults: line endings normalised, leading and trailing blank lines
/// stripped, a final newline ensured, tabs left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerOptions {
    /// Strip leading and trailing newlines
    pub stripnl: bool,
    /// Strip all leading and trailing whitespace (overrides `stripnl`)
    pub stripall: bool,
    /// Append a newline if the input does not end with one
    pub ensurenl: bool,
    /// Expand tabs to this many columns; 0 keeps tabs
    pub tabsize: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            stripnl: true,
            stripall: false,
            ensurenl: true,
            tabsize: 0,
        }
    }
}

impl LexerOptions {
    /// Options that only normalise the encoding of the input
    ///
    /// A leading byte order mark is still dropped and `\r\n`/`\r` still
    /// become `\n`; nothing is stripped, expanded or appended.
    #[must_use]
    pub const fn raw() -> Self {
        Self {
            stripnl: false,
            stripall: false,
            ensurenl: false,
            tabsize: 0,
        }
    }

    /// Apply the options to `source`
    ///
    /// Borrows when nothing changes.
    #[must_use]
    pub fn preprocess<'s>(&self, source: &'s str) -> Cow<'s, str> {
        let mut text = Cow::Borrowed(source.strip_prefix('\u{feff}').unwrap_or(source));

        if text.contains('\r') {
            text = Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"));
        }

        let trimmed = if self.stripall {
            text.trim()
        } else if self.stripnl {
            text.trim_matches('\n')
        } else {
            &*text
        };
        if trimmed.len() != text.len() {
            text = Cow::Owned(trimmed.to_string());
        }

        if self.tabsize > 0 && text.contains('\t') {
            text = Cow::Owned(expand_tabs(&text, self.tabsize));
        }

        if self.ensurenl && !text.ends_with('\n') {
            text.to_mut().push('\n');
        }

        text
    }
}

/// Replace tabs with spaces up to the next multiple of `tabsize` columns
fn expand_tabs(text: &str, tabsize: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = tabsize - column % tabsize;
                out.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            },
            '\n' => {
                out.push(ch);
                column = 0;
            },
            _ => {
                out.push(ch);
                column += 1;
            },
        }
    }
    out
}
