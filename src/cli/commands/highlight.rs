//! Highlight command - print source with ANSI colours

use std::path::Path;

use morloc_lexer::highlight::highlight as paint;
use morloc_lexer::output::{OutputMode, TokenReport};

use super::Context;
use super::input::{pick_lexer, read_source};

/// Print a file (or stdin) with ANSI colours
///
/// In JSON mode the merged tokens are printed instead, since colour codes
/// are meaningless there.
pub fn highlight(ctx: &Context, path: Option<&Path>, alias: Option<&str>) -> anyhow::Result<()> {
    let lexer = pick_lexer(&ctx.registry, alias, path)?;
    let source = read_source(path)?;
    let text = lexer.preprocess(&source);
    let tokens = lexer.tokenize(&text).merged();

    if ctx.mode == OutputMode::Json {
        let name = path.map(|p| p.display().to_string());
        TokenReport::collect(name, lexer.name(), tokens).render(ctx.mode);
        return Ok(());
    }

    if !ctx.config.output.color {
        colored::control::set_override(false);
    }
    print!("{}", paint(tokens));
    Ok(())
}
