//! pasc AST - node types for a Pascal-like language front-end
//!
//! This crate defines every node kind, the literal resolver, source
//! positions, and the protocol all nodes share: ordered children,
//! pre-order traversal and a box-drawing tree dump.
//!
//! Nodes are immutable once built and own their children, so a tree can
//! be read from any number of threads at once. Results of later passes
//! belong in a [`SideTable`], not in the nodes.

mod span;
mod metadata;
mod error;
mod literal;
mod expr;
mod stmt;
mod decl;
mod node;
mod printer;

pub use span::*;
pub use metadata::*;
pub use error::*;
pub use literal::*;
pub use expr::*;
pub use stmt::*;
pub use decl::*;
pub use node::*;
pub use printer::*;

use serde::{Deserialize, Serialize};

/// A complete program: `program Name; var ...; begin ... end.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub(crate) name: Ident,
    pub(crate) vars: VarsDecl,
    pub(crate) body: StmtList,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl Program {
    pub fn new(name: Ident, vars: VarsDecl, body: StmtList) -> Self {
        Self {
            name,
            vars,
            body,
            meta: Meta::default(),
        }
    }

    pub fn name(&self) -> &Ident {
        &self.name
    }

    pub fn vars(&self) -> &VarsDecl {
        &self.vars
    }

    pub fn body(&self) -> &StmtList {
        &self.body
    }
}
