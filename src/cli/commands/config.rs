//! Config command - show the effective configuration

use morloc_lexer::config::Config;
use morloc_lexer::output::OutputMode;

use super::Context;

/// Print the configuration in effect, as TOML or JSON
pub fn config(ctx: &Context) -> anyhow::Result<()> {
    if ctx.mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    } else {
        if let Some(path) = Config::default_path() {
            println!("# default location: {}", path.display());
        }
        print!("{}", ctx.config.to_toml()?);
    }
    Ok(())
}
