//! Expression AST nodes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Literal, Meta};

/// An expression slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Literal value: `42`, `3.14`, `true`, `'text'`
    Literal(Literal),

    /// Identifier: `x`
    Ident(Ident),

    /// Array element: `a[i + 1]`
    Element(ArrayElementRef),

    /// Binary operation: `a + b`, `x <> y`
    Binary(BinaryOp),

    /// Function call: `f(a, b)`
    Call(Call),
}

/// Left-hand side of an assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AssignTarget {
    Ident(Ident),
    Element(ArrayElementRef),
}

/// An identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ident {
    pub(crate) name: String,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: Meta::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Reference to one element of an array: `base[index]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayElementRef {
    pub(crate) base: Ident,
    pub(crate) index: Box<Expr>,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl ArrayElementRef {
    pub fn new(base: Ident, index: impl Into<Expr>) -> Self {
        Self {
            base,
            index: Box::new(index.into()),
            meta: Meta::default(),
        }
    }

    pub fn base(&self) -> &Ident {
        &self.base
    }

    pub fn index(&self) -> &Expr {
        &self.index
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    /// Real division: `/`
    Division,
    /// Integer division: `div`
    Div,
    Mod,

    // Relational
    Ge,
    Le,
    Ne,
    Eq,
    Gt,
    Lt,

    // Logical
    And,
    Or,
}

/// Operator families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpClass {
    Arithmetic,
    Relational,
    Logical,
}

impl BinOp {
    pub const ALL: [BinOp; 14] = [
        BinOp::Add,
        BinOp::Sub,
        BinOp::Mul,
        BinOp::Division,
        BinOp::Div,
        BinOp::Mod,
        BinOp::Ge,
        BinOp::Le,
        BinOp::Ne,
        BinOp::Eq,
        BinOp::Gt,
        BinOp::Lt,
        BinOp::And,
        BinOp::Or,
    ];

    /// Source syntax of the operator
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Division => "/",
            BinOp::Div => "div",
            BinOp::Mod => "mod",
            BinOp::Ge => ">=",
            BinOp::Le => "<=",
            BinOp::Ne => "<>",
            BinOp::Eq => "=",
            BinOp::Gt => ">",
            BinOp::Lt => "<",
            BinOp::And => "and",
            BinOp::Or => "or",
        }
    }

    pub fn class(self) -> OpClass {
        match self {
            BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Division | BinOp::Div | BinOp::Mod => {
                OpClass::Arithmetic
            }
            BinOp::Ge | BinOp::Le | BinOp::Ne | BinOp::Eq | BinOp::Gt | BinOp::Lt => {
                OpClass::Relational
            }
            BinOp::And | BinOp::Or => OpClass::Logical,
        }
    }

    /// Look an operator up by its source syntax. Word operators ignore case.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol().eq_ignore_ascii_case(symbol))
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Binary operation node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOp {
    pub(crate) op: BinOp,
    pub(crate) left: Box<Expr>,
    pub(crate) right: Box<Expr>,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl BinaryOp {
    pub fn new(op: BinOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
            meta: Meta::default(),
        }
    }

    pub fn op(&self) -> BinOp {
        self.op
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }
}

/// Call of a procedure or function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub(crate) callee: Ident,
    pub(crate) args: Vec<Expr>,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl Call {
    pub fn new(callee: Ident, args: Vec<Expr>) -> Self {
        Self {
            callee,
            args,
            meta: Meta::default(),
        }
    }

    pub fn callee(&self) -> &Ident {
        &self.callee
    }

    pub fn args(&self) -> &[Expr] {
        &self.args
    }
}

impl From<Literal> for Expr {
    fn from(lit: Literal) -> Self {
        Expr::Literal(lit)
    }
}

impl From<Ident> for Expr {
    fn from(ident: Ident) -> Self {
        Expr::Ident(ident)
    }
}

impl From<ArrayElementRef> for Expr {
    fn from(elem: ArrayElementRef) -> Self {
        Expr::Element(elem)
    }
}

impl From<BinaryOp> for Expr {
    fn from(bin: BinaryOp) -> Self {
        Expr::Binary(bin)
    }
}

impl From<Call> for Expr {
    fn from(call: Call) -> Self {
        Expr::Call(call)
    }
}

impl From<Ident> for AssignTarget {
    fn from(ident: Ident) -> Self {
        AssignTarget::Ident(ident)
    }
}

impl From<ArrayElementRef> for AssignTarget {
    fn from(elem: ArrayElementRef) -> Self {
        AssignTarget::Element(elem)
    }
}
