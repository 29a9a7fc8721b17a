//! pasc - syntax tree layer of a Pascal-like language front-end
//!
//! This is the root workspace crate that hosts integration tests.
//! The implementation lives in the workspace member crates.

// Re-export the AST crate for convenience
pub use pasc_ast as ast;
