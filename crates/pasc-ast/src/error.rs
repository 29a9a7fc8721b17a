//! Construction error types

use thiserror::Error;

use crate::NodeKind;

/// Errors raised while building a node.
///
/// Once a node exists, nothing else in this crate can fail on it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AstError {
    /// Text that is not an integer, real, boolean or quoted string literal
    #[error("malformed literal: {text:?}")]
    MalformedLiteral { text: String },

    /// A variable-arity constructor got an argument count it has no shape for
    #[error("{kind} takes {expected} arguments, found {found}")]
    Arity {
        kind: NodeKind,
        expected: &'static str,
        found: usize,
    },

    /// Right number of arguments, wrong kind of node in one slot
    #[error("{kind} argument #{position}: expected {expected}, found {found}")]
    UnexpectedArgument {
        kind: NodeKind,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },
}

impl AstError {
    pub fn malformed_literal(text: impl Into<String>) -> Self {
        AstError::MalformedLiteral { text: text.into() }
    }
}

pub type AstResult<T> = Result<T, AstError>;
