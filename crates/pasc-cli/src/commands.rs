//! Subcommand implementations. Each returns the text to print.

use std::fs;
use std::path::Path;

use pasc_ast::{AstNode, Literal, NodeKind, NodeRef, Program, TreeDump};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Load a program serialized as JSON
pub fn load(path: &Path) -> CliResult<Program> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "read syntax tree");
    parse(&source)
}

pub fn parse(source: &str) -> CliResult<Program> {
    let program: Program = serde_json::from_str(source)?;
    info!(
        program = program.name().name(),
        nodes = program.node_count(),
        "loaded syntax tree"
    );
    Ok(program)
}

pub fn render(program: &Program) -> String {
    TreeDump(program.as_node()).to_string()
}

/// Total node count followed by one line per kind that occurs
pub fn stats(program: &Program) -> String {
    let mut counts = vec![0usize; NodeKind::ALL.len()];
    program.visit(|node| counts[node.kind() as usize] += 1);

    let mut lines = vec![format!("nodes: {}", program.node_count())];
    for (kind, count) in NodeKind::ALL.iter().zip(counts) {
        if count > 0 {
            lines.push(format!("  {}: {}", kind, count));
        }
    }
    lines.join("\n")
}

/// Identifier names in pre-order, one per line
pub fn idents(program: &Program) -> String {
    let mut names = Vec::new();
    program.visit(|node| {
        if let NodeRef::Ident(ident) = node {
            names.push(ident.name());
        }
    });
    names.join("\n")
}

pub fn literal(text: &str) -> CliResult<String> {
    let lit = Literal::new(text)?;
    Ok(lit.label())
}
