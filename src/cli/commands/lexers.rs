//! Lexers command - list registered lexers

use morloc_lexer::output::{LexerInfo, LexerListResult};

use super::Context;

/// List the registered lexers
pub fn lexers(ctx: &Context) {
    let to_strings = |items: &[&str]| -> Vec<String> { items.iter().map(|s| (*s).to_string()).collect() };

    let result = LexerListResult {
        lexers: ctx
            .registry
            .iter()
            .map(|l| LexerInfo {
                name: l.name().to_string(),
                aliases: to_strings(l.aliases()),
                filenames: to_strings(l.filenames()),
                mimetypes: to_strings(l.mimetypes()),
            })
            .collect(),
    };

    result.render(ctx.mode);
}
