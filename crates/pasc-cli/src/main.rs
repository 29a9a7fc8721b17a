//! pasc CLI - inspect serialized syntax trees

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

#[derive(Parser)]
#[command(name = "pasc")]
#[command(about = "Inspect Pascal syntax trees", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tree dump of a program
    Render {
        /// Program serialized as JSON
        file: PathBuf,
    },
    /// Count nodes by kind
    Stats {
        /// Program serialized as JSON
        file: PathBuf,
    },
    /// List identifiers in pre-order
    Idents {
        /// Program serialized as JSON
        file: PathBuf,
    },
    /// Classify literal text
    Literal {
        /// Literal source text, e.g. 42, 3.14, true, 'text'
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();
    install_tracing(cli.verbose);

    match run(cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(command: Commands) -> CliResult<String> {
    match command {
        Commands::Render { file } => Ok(commands::render(&commands::load(&file)?)),
        Commands::Stats { file } => Ok(commands::stats(&commands::load(&file)?)),
        Commands::Idents { file } => Ok(commands::idents(&commands::load(&file)?)),
        Commands::Literal { text } => commands::literal(&text),
    }
}

fn install_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
