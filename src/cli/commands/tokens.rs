//! Tokens command - print the token stream of each input

use std::path::PathBuf;

use log::{info, warn};
use morloc_lexer::lexer::merge_tokens;
use morloc_lexer::output::{TokenReport, render_reports};
use morloc_lexer::sources;

use super::Context;
use super::input::{pick_lexer, read_source};

/// Tokenize files, directories or stdin and print the tokens
pub fn tokens(
    ctx: &Context,
    paths: &[PathBuf],
    merge: bool,
    alias: Option<&str>,
) -> anyhow::Result<()> {
    let files: Vec<Option<PathBuf>> = if paths.is_empty() {
        vec![None]
    } else {
        sources::expand_paths(paths, &ctx.registry)?.into_iter().map(Some).collect()
    };

    if files.is_empty() {
        info!("no Morloc sources found");
    }

    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
        let lexer = pick_lexer(&ctx.registry, alias, file.as_deref())?;
        let source = read_source(file.as_deref())?;
        let text = lexer.preprocess(&source);

        let stream = lexer.tokenize(&text);
        let name = file.as_ref().map(|p| p.display().to_string());
        let report = if merge {
            TokenReport::collect(name, lexer.name(), merge_tokens(&text, stream))
        } else {
            TokenReport::collect(name, lexer.name(), stream)
        };

        if report.errors > 0 {
            warn!(
                "{}: {} unrecognised character(s)",
                report.file.as_deref().unwrap_or("<stdin>"),
                report.errors
            );
        }
        reports.push(report);
    }

    render_reports(&reports, ctx.mode);
    Ok(())
}
