//! Uniform node protocol: kind tags, borrowed node views, child
//! enumeration and pre-order traversal.

use std::convert::Infallible;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    printer, ArrayDecl, ArrayElementRef, Assign, AssignTarget, BinaryOp, Body, Call, Expr, For,
    FunctionDecl, Ident, IdentList, If, Literal, Meta, NodeId, Params, Position, ProcedureDecl,
    Program, Stmt, StmtList, TypeSpec, VarDecl, VarEntry, VarsDecl, While,
};

/// Tag naming the concrete kind of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    Literal,
    Ident,
    ArrayElementRef,
    BinaryOp,
    IdentList,
    TypeSpec,
    VarDecl,
    ArrayDecl,
    VarsDecl,
    Call,
    Assign,
    If,
    While,
    For,
    StmtList,
    Body,
    Params,
    Program,
    ProcedureDecl,
    FunctionDecl,
}

impl NodeKind {
    pub const ALL: [NodeKind; 20] = [
        NodeKind::Literal,
        NodeKind::Ident,
        NodeKind::ArrayElementRef,
        NodeKind::BinaryOp,
        NodeKind::IdentList,
        NodeKind::TypeSpec,
        NodeKind::VarDecl,
        NodeKind::ArrayDecl,
        NodeKind::VarsDecl,
        NodeKind::Call,
        NodeKind::Assign,
        NodeKind::If,
        NodeKind::While,
        NodeKind::For,
        NodeKind::StmtList,
        NodeKind::Body,
        NodeKind::Params,
        NodeKind::Program,
        NodeKind::ProcedureDecl,
        NodeKind::FunctionDecl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Literal => "literal",
            NodeKind::Ident => "identifier",
            NodeKind::ArrayElementRef => "array element",
            NodeKind::BinaryOp => "binary operation",
            NodeKind::IdentList => "identifier list",
            NodeKind::TypeSpec => "type",
            NodeKind::VarDecl => "variable declaration",
            NodeKind::ArrayDecl => "array declaration",
            NodeKind::VarsDecl => "var section",
            NodeKind::Call => "call",
            NodeKind::Assign => "assignment",
            NodeKind::If => "if",
            NodeKind::While => "while",
            NodeKind::For => "for",
            NodeKind::StmtList => "statement list",
            NodeKind::Body => "body",
            NodeKind::Params => "params",
            NodeKind::Program => "program",
            NodeKind::ProcedureDecl => "procedure",
            NodeKind::FunctionDecl => "function",
        }
    }

    /// Expression-like kinds produce a value; everything else is statement-like.
    pub fn is_expression(self) -> bool {
        matches!(
            self,
            NodeKind::Literal
                | NodeKind::Ident
                | NodeKind::ArrayElementRef
                | NodeKind::BinaryOp
                | NodeKind::Call
        )
    }

    pub fn is_statement(self) -> bool {
        !self.is_expression()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Borrowed view of any node, one variant per kind.
///
/// Match on it to reach a kind's typed fields; use the methods for
/// everything that works the same on every kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Literal(&'a Literal),
    Ident(&'a Ident),
    ArrayElementRef(&'a ArrayElementRef),
    BinaryOp(&'a BinaryOp),
    IdentList(&'a IdentList),
    TypeSpec(&'a TypeSpec),
    VarDecl(&'a VarDecl),
    ArrayDecl(&'a ArrayDecl),
    VarsDecl(&'a VarsDecl),
    Call(&'a Call),
    Assign(&'a Assign),
    If(&'a If),
    While(&'a While),
    For(&'a For),
    StmtList(&'a StmtList),
    Body(&'a Body),
    Params(&'a Params),
    Program(&'a Program),
    ProcedureDecl(&'a ProcedureDecl),
    FunctionDecl(&'a FunctionDecl),
}

impl<'a> NodeRef<'a> {
    pub fn kind(self) -> NodeKind {
        match self {
            NodeRef::Literal(_) => NodeKind::Literal,
            NodeRef::Ident(_) => NodeKind::Ident,
            NodeRef::ArrayElementRef(_) => NodeKind::ArrayElementRef,
            NodeRef::BinaryOp(_) => NodeKind::BinaryOp,
            NodeRef::IdentList(_) => NodeKind::IdentList,
            NodeRef::TypeSpec(_) => NodeKind::TypeSpec,
            NodeRef::VarDecl(_) => NodeKind::VarDecl,
            NodeRef::ArrayDecl(_) => NodeKind::ArrayDecl,
            NodeRef::VarsDecl(_) => NodeKind::VarsDecl,
            NodeRef::Call(_) => NodeKind::Call,
            NodeRef::Assign(_) => NodeKind::Assign,
            NodeRef::If(_) => NodeKind::If,
            NodeRef::While(_) => NodeKind::While,
            NodeRef::For(_) => NodeKind::For,
            NodeRef::StmtList(_) => NodeKind::StmtList,
            NodeRef::Body(_) => NodeKind::Body,
            NodeRef::Params(_) => NodeKind::Params,
            NodeRef::Program(_) => NodeKind::Program,
            NodeRef::ProcedureDecl(_) => NodeKind::ProcedureDecl,
            NodeRef::FunctionDecl(_) => NodeKind::FunctionDecl,
        }
    }

    pub fn meta(self) -> &'a Meta {
        match self {
            NodeRef::Literal(n) => &n.meta,
            NodeRef::Ident(n) => &n.meta,
            NodeRef::ArrayElementRef(n) => &n.meta,
            NodeRef::BinaryOp(n) => &n.meta,
            NodeRef::IdentList(n) => &n.meta,
            NodeRef::TypeSpec(n) => &n.meta,
            NodeRef::VarDecl(n) => &n.meta,
            NodeRef::ArrayDecl(n) => &n.meta,
            NodeRef::VarsDecl(n) => &n.meta,
            NodeRef::Call(n) => &n.meta,
            NodeRef::Assign(n) => &n.meta,
            NodeRef::If(n) => &n.meta,
            NodeRef::While(n) => &n.meta,
            NodeRef::For(n) => &n.meta,
            NodeRef::StmtList(n) => &n.meta,
            NodeRef::Body(n) => &n.meta,
            NodeRef::Params(n) => &n.meta,
            NodeRef::Program(n) => &n.meta,
            NodeRef::ProcedureDecl(n) => &n.meta,
            NodeRef::FunctionDecl(n) => &n.meta,
        }
    }

    /// Short label used by the tree dump
    pub fn label(self) -> String {
        match self {
            NodeRef::Literal(n) => format!("{} ({})", n.text, n.ty()),
            NodeRef::Ident(n) => n.name.clone(),
            NodeRef::ArrayElementRef(_) => "[]".to_string(),
            NodeRef::BinaryOp(n) => n.op.symbol().to_string(),
            NodeRef::IdentList(_) => "idents".to_string(),
            NodeRef::TypeSpec(n) => n.name.clone(),
            NodeRef::VarDecl(_) => "var_dec".to_string(),
            NodeRef::ArrayDecl(_) => "arr_decl".to_string(),
            NodeRef::VarsDecl(_) => "var".to_string(),
            NodeRef::Call(_) => "call".to_string(),
            NodeRef::Assign(_) => ":=".to_string(),
            NodeRef::If(_) => "if".to_string(),
            NodeRef::While(_) => "while".to_string(),
            NodeRef::For(_) => "for".to_string(),
            NodeRef::StmtList(_) => "...".to_string(),
            NodeRef::Body(_) => "Body".to_string(),
            NodeRef::Params(_) => "params".to_string(),
            NodeRef::Program(_) => "Program".to_string(),
            NodeRef::ProcedureDecl(_) => "procedure".to_string(),
            NodeRef::FunctionDecl(_) => "function".to_string(),
        }
    }

    /// Direct children in source order. Absent optional slots are left out.
    pub fn children(self) -> Vec<NodeRef<'a>> {
        match self {
            NodeRef::Literal(_) | NodeRef::Ident(_) | NodeRef::TypeSpec(_) => Vec::new(),
            NodeRef::ArrayElementRef(n) => vec![NodeRef::Ident(&n.base), n.index.as_node()],
            NodeRef::BinaryOp(n) => vec![n.left.as_node(), n.right.as_node()],
            NodeRef::IdentList(n) => n.idents.iter().map(NodeRef::Ident).collect(),
            NodeRef::VarDecl(n) => vec![NodeRef::IdentList(&n.idents), NodeRef::TypeSpec(&n.ty)],
            NodeRef::ArrayDecl(n) => vec![
                NodeRef::TypeSpec(&n.elem_ty),
                NodeRef::Ident(&n.name),
                NodeRef::Literal(&n.lower),
                NodeRef::Literal(&n.upper),
            ],
            NodeRef::VarsDecl(n) => n.entries.iter().map(|e| e.as_node()).collect(),
            NodeRef::Call(n) => std::iter::once(NodeRef::Ident(&n.callee))
                .chain(n.args.iter().map(|a| a.as_node()))
                .collect(),
            NodeRef::Assign(n) => vec![n.target.as_node(), n.value.as_node()],
            NodeRef::If(n) => {
                let mut children = vec![n.cond.as_node(), n.then_branch.as_node()];
                if let Some(else_branch) = &n.else_branch {
                    children.push(else_branch.as_node());
                }
                children
            }
            NodeRef::While(n) => vec![n.cond.as_node(), n.body.as_node()],
            NodeRef::For(n) => vec![n.init.as_node(), n.bound.as_node(), n.body.as_node()],
            NodeRef::StmtList(n) => n.stmts.iter().map(|s| s.as_node()).collect(),
            NodeRef::Body(n) => vec![NodeRef::StmtList(&n.list)],
            NodeRef::Params(n) => n.decls.iter().map(NodeRef::VarDecl).collect(),
            NodeRef::Program(n) => vec![
                NodeRef::Ident(&n.name),
                NodeRef::VarsDecl(&n.vars),
                NodeRef::StmtList(&n.body),
            ],
            NodeRef::ProcedureDecl(n) => vec![
                NodeRef::Ident(&n.name),
                NodeRef::Params(&n.params),
                NodeRef::VarsDecl(&n.vars),
                NodeRef::StmtList(&n.body),
            ],
            NodeRef::FunctionDecl(n) => vec![
                NodeRef::Ident(&n.name),
                NodeRef::Params(&n.params),
                NodeRef::TypeSpec(&n.return_ty),
                NodeRef::VarsDecl(&n.vars),
                NodeRef::StmtList(&n.body),
            ],
        }
    }

    /// The `index`-th child, or `None` past the end
    pub fn child(self, index: usize) -> Option<NodeRef<'a>> {
        self.children().get(index).copied()
    }

    /// Every node of the subtree in pre-order, starting with `self`
    pub fn pre_order(self) -> PreOrder<'a> {
        PreOrder { stack: vec![self] }
    }

    /// Apply `action` to every node of the subtree in pre-order.
    pub fn visit<F>(self, mut action: F)
    where
        F: FnMut(NodeRef<'a>),
    {
        let result = self.try_visit(|node| {
            action(node);
            Ok::<(), Infallible>(())
        });
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Like `visit`, but stops at the first error and returns it.
    ///
    /// Nodes after the failing one in pre-order are not visited, so any
    /// work the action did up to that point is a partial result.
    pub fn try_visit<E, F>(self, mut action: F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'a>) -> Result<(), E>,
    {
        for node in self.pre_order() {
            action(node)?;
        }
        Ok(())
    }

    /// Like `visit`, also passing each node's pre-order id relative to `self`.
    pub fn visit_indexed<F>(self, mut action: F)
    where
        F: FnMut(NodeId, NodeRef<'a>),
    {
        for (index, node) in self.pre_order().enumerate() {
            action(NodeId(index), node);
        }
    }

    /// The node numbered `id` by `visit_indexed` on `self`
    pub fn node_at(self, id: NodeId) -> Option<NodeRef<'a>> {
        self.pre_order().nth(id.0)
    }

    /// Number of nodes in the subtree, `self` included
    pub fn node_count(self) -> usize {
        self.pre_order().count()
    }

    pub fn render(self) -> Vec<String> {
        printer::render(self)
    }
}

/// Pre-order walk over a subtree, driven by an explicit stack
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<NodeRef<'a>> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}

/// Capabilities shared by every node and node slot.
///
/// Implementors only provide `as_node`; the rest is derived from it.
pub trait AstNode {
    fn as_node(&self) -> NodeRef<'_>;

    fn kind(&self) -> NodeKind {
        self.as_node().kind()
    }

    fn meta(&self) -> &Meta {
        self.as_node().meta()
    }

    fn label(&self) -> String {
        self.as_node().label()
    }

    fn children(&self) -> Vec<NodeRef<'_>> {
        self.as_node().children()
    }

    fn child(&self, index: usize) -> Option<NodeRef<'_>> {
        self.as_node().child(index)
    }

    fn visit<'a, F>(&'a self, action: F)
    where
        F: FnMut(NodeRef<'a>),
        Self: Sized,
    {
        self.as_node().visit(action)
    }

    fn try_visit<'a, E, F>(&'a self, action: F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'a>) -> Result<(), E>,
        Self: Sized,
    {
        self.as_node().try_visit(action)
    }

    fn node_count(&self) -> usize {
        self.as_node().node_count()
    }

    fn render(&self) -> Vec<String> {
        self.as_node().render()
    }
}

macro_rules! node_impls {
    ($($kind:ident),* $(,)?) => {$(
        impl AstNode for $kind {
            fn as_node(&self) -> NodeRef<'_> {
                NodeRef::$kind(self)
            }
        }

        impl $kind {
            /// Replace position and properties
            pub fn with_meta(mut self, meta: Meta) -> Self {
                self.meta = meta;
                self
            }

            /// Set the source position
            pub fn at(mut self, line: u32, row: u32) -> Self {
                self.meta.pos = Position::new(line, row);
                self
            }
        }
    )*};
}

node_impls!(
    Literal,
    Ident,
    ArrayElementRef,
    BinaryOp,
    IdentList,
    TypeSpec,
    VarDecl,
    ArrayDecl,
    VarsDecl,
    Call,
    Assign,
    If,
    While,
    For,
    StmtList,
    Body,
    Params,
    Program,
    ProcedureDecl,
    FunctionDecl,
);

impl AstNode for Expr {
    fn as_node(&self) -> NodeRef<'_> {
        match self {
            Expr::Literal(n) => NodeRef::Literal(n),
            Expr::Ident(n) => NodeRef::Ident(n),
            Expr::Element(n) => NodeRef::ArrayElementRef(n),
            Expr::Binary(n) => NodeRef::BinaryOp(n),
            Expr::Call(n) => NodeRef::Call(n),
        }
    }
}

impl AstNode for Stmt {
    fn as_node(&self) -> NodeRef<'_> {
        match self {
            Stmt::Assign(n) => NodeRef::Assign(n),
            Stmt::Call(n) => NodeRef::Call(n),
            Stmt::If(n) => NodeRef::If(n),
            Stmt::While(n) => NodeRef::While(n),
            Stmt::For(n) => NodeRef::For(n),
            Stmt::List(n) => NodeRef::StmtList(n),
            Stmt::Body(n) => NodeRef::Body(n),
            Stmt::Procedure(n) => NodeRef::ProcedureDecl(n),
            Stmt::Function(n) => NodeRef::FunctionDecl(n),
        }
    }
}

impl AstNode for AssignTarget {
    fn as_node(&self) -> NodeRef<'_> {
        match self {
            AssignTarget::Ident(n) => NodeRef::Ident(n),
            AssignTarget::Element(n) => NodeRef::ArrayElementRef(n),
        }
    }
}

impl AstNode for VarEntry {
    fn as_node(&self) -> NodeRef<'_> {
        match self {
            VarEntry::Var(n) => NodeRef::VarDecl(n),
            VarEntry::Array(n) => NodeRef::ArrayDecl(n),
        }
    }
}
