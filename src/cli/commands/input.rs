//! Reading sources and choosing lexers for them

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context as _;
use morloc_lexer::{Lexer, LexerRegistry};

/// Lexer alias used for stdin when none is given
pub const DEFAULT_ALIAS: &str = "morloc";

/// Read a file, or stdin when `path` is `None`
pub fn read_source(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
        },
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("cannot read stdin")?;
            Ok(text)
        },
    }
}

/// The lexer named by `alias`, else the one matching `path`, else the default
pub fn pick_lexer<'r>(
    registry: &'r LexerRegistry,
    alias: Option<&str>,
    path: Option<&Path>,
) -> anyhow::Result<&'r dyn Lexer> {
    let lexer = match (alias, path) {
        (Some(alias), _) => registry.by_alias(alias)?,
        (None, Some(path)) => registry.for_filename(path)?,
        (None, None) => registry.by_alias(DEFAULT_ALIAS)?,
    };
    Ok(lexer)
}
