//! Command implementations

mod config;
mod highlight;
mod input;
mod lexers;
mod tokens;

pub use config::config;
pub use highlight::highlight;
pub use lexers::lexers;
pub use tokens::tokens;

use morloc_lexer::LexerRegistry;
use morloc_lexer::config::Config;
use morloc_lexer::output::OutputMode;

/// State shared by every command
#[derive(Debug)]
pub struct Context {
    /// Human or JSON output
    pub mode: OutputMode,
    /// Loaded configuration
    pub config: Config,
    /// Lexers configured with the loaded options
    pub registry: LexerRegistry,
}
