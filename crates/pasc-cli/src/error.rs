//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid syntax tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Ast(#[from] pasc_ast::AstError),
}

pub type CliResult<T> = Result<T, CliError>;
