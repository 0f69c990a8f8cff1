//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use morloc_lexer::LexerRegistry;
use morloc_lexer::config::Config;
use morloc_lexer::output::OutputMode;

/// morloc-lexer - Tokenize and highlight Morloc source
#[derive(Parser, Debug)]
#[command(
    name = "morloc-lexer",
    version,
    about = "Tokenize and highlight Morloc source",
    long_about = "Split Morloc source into classified tokens for syntax highlighting.\n\n\
                  Every byte of input ends up in exactly one token; text the\n\
                  grammar does not recognise is reported as an Error token."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.config/morloc-lexer/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the tokens of files, directories or stdin
    Tokens {
        /// Files or directories; reads stdin when empty
        paths: Vec<PathBuf>,

        /// Merge adjacent tokens of the same kind
        #[arg(short, long)]
        merge: bool,

        /// Lexer alias to use instead of guessing from the file name
        #[arg(short, long)]
        lexer: Option<String>,
    },

    /// Print source with ANSI colours
    Highlight {
        /// File to highlight; reads stdin when absent
        path: Option<PathBuf>,

        /// Lexer alias to use instead of guessing from the file name
        #[arg(short, long)]
        lexer: Option<String>,
    },

    /// List available lexers
    Lexers,

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let ctx = Context {
        mode: output_mode,
        registry: LexerRegistry::with_options(config.lexer),
        config,
    };

    match cli.command {
        Some(Command::Tokens {
            paths,
            merge,
            lexer,
        }) => commands::tokens(&ctx, &paths, merge, lexer.as_deref()),
        Some(Command::Highlight { path, lexer }) => {
            commands::highlight(&ctx, path.as_deref(), lexer.as_deref())
        },
        Some(Command::Lexers) => {
            commands::lexers(&ctx);
            Ok(())
        },
        Some(Command::Config) => commands::config(&ctx),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("morloc-lexer v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("morloc-lexer v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'morloc-lexer --help' for usage");
                println!("Run 'morloc-lexer tokens FILE.loc' to get started");
            }
            Ok(())
        },
    }
}
