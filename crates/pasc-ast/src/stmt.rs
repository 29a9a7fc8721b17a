//! Statement AST nodes

use serde::{Deserialize, Serialize};

use crate::{AssignTarget, Call, Expr, FunctionDecl, Meta, ProcedureDecl};

/// A statement slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// Assignment: `x := 5`, `a[i] := 0`
    Assign(Assign),

    /// Procedure call: `writeln(x)`
    Call(Call),

    /// Conditional: `if c then s [else s]`
    If(If),

    /// Loop: `while c do s`
    While(While),

    /// Counting loop: `for i := 1 to n do s`
    For(For),

    /// Statement sequence
    List(StmtList),

    /// `begin ... end` block
    Body(Body),

    /// Nested procedure declaration
    Procedure(ProcedureDecl),

    /// Nested function declaration
    Function(FunctionDecl),
}

/// Assignment: `target := value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub(crate) target: AssignTarget,
    pub(crate) value: Expr,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl Assign {
    pub fn new(target: impl Into<AssignTarget>, value: impl Into<Expr>) -> Self {
        Self {
            target: target.into(),
            value: value.into(),
            meta: Meta::default(),
        }
    }

    pub fn target(&self) -> &AssignTarget {
        &self.target
    }

    pub fn value(&self) -> &Expr {
        &self.value
    }
}

/// Conditional statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub(crate) cond: Expr,
    pub(crate) then_branch: Box<Stmt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) else_branch: Option<Box<Stmt>>,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl If {
    pub fn new(cond: impl Into<Expr>, then_branch: impl Into<Stmt>) -> Self {
        Self {
            cond: cond.into(),
            then_branch: Box::new(then_branch.into()),
            else_branch: None,
            meta: Meta::default(),
        }
    }

    pub fn with_else(
        cond: impl Into<Expr>,
        then_branch: impl Into<Stmt>,
        else_branch: impl Into<Stmt>,
    ) -> Self {
        Self {
            else_branch: Some(Box::new(else_branch.into())),
            ..Self::new(cond, then_branch)
        }
    }

    pub fn cond(&self) -> &Expr {
        &self.cond
    }

    pub fn then_branch(&self) -> &Stmt {
        &self.then_branch
    }

    pub fn else_branch(&self) -> Option<&Stmt> {
        self.else_branch.as_deref()
    }
}

/// `while cond do body`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct While {
    pub(crate) cond: Expr,
    pub(crate) body: Box<Stmt>,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl While {
    pub fn new(cond: impl Into<Expr>, body: impl Into<Stmt>) -> Self {
        Self {
            cond: cond.into(),
            body: Box::new(body.into()),
            meta: Meta::default(),
        }
    }

    pub fn cond(&self) -> &Expr {
        &self.cond
    }

    pub fn body(&self) -> &Stmt {
        &self.body
    }
}

/// `for init to bound do body`
///
/// A missing initializer or body is stored as the empty-statement
/// sentinel, so the node always has exactly three children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct For {
    pub(crate) init: Box<Stmt>,
    pub(crate) bound: Expr,
    pub(crate) body: Box<Stmt>,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl For {
    pub fn new(init: Option<Stmt>, bound: impl Into<Expr>, body: Option<Stmt>) -> Self {
        Self {
            init: Box::new(init.unwrap_or_else(Stmt::empty)),
            bound: bound.into(),
            body: Box::new(body.unwrap_or_else(Stmt::empty)),
            meta: Meta::default(),
        }
    }

    pub fn init(&self) -> &Stmt {
        &self.init
    }

    pub fn bound(&self) -> &Expr {
        &self.bound
    }

    pub fn body(&self) -> &Stmt {
        &self.body
    }
}

/// Ordered statement sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StmtList {
    pub(crate) stmts: Vec<Stmt>,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl StmtList {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self {
            stmts,
            meta: Meta::default(),
        }
    }

    /// The empty-statement sentinel
    pub fn empty() -> Self {
        Self {
            stmts: Vec::new(),
            meta: Meta::synthesized(),
        }
    }

    pub fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// `begin ... end` block wrapping one statement list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub(crate) list: StmtList,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl Body {
    pub fn new(list: StmtList) -> Self {
        Self {
            list,
            meta: Meta::default(),
        }
    }

    pub fn list(&self) -> &StmtList {
        &self.list
    }
}

impl Stmt {
    /// The empty-statement sentinel as a statement
    pub fn empty() -> Self {
        Stmt::List(StmtList::empty())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stmt::List(list) if list.is_empty())
    }
}

impl From<Assign> for Stmt {
    fn from(assign: Assign) -> Self {
        Stmt::Assign(assign)
    }
}

impl From<Call> for Stmt {
    fn from(call: Call) -> Self {
        Stmt::Call(call)
    }
}

impl From<If> for Stmt {
    fn from(stmt: If) -> Self {
        Stmt::If(stmt)
    }
}

impl From<While> for Stmt {
    fn from(stmt: While) -> Self {
        Stmt::While(stmt)
    }
}

impl From<For> for Stmt {
    fn from(stmt: For) -> Self {
        Stmt::For(stmt)
    }
}

impl From<StmtList> for Stmt {
    fn from(list: StmtList) -> Self {
        Stmt::List(list)
    }
}

impl From<Body> for Stmt {
    fn from(body: Body) -> Self {
        Stmt::Body(body)
    }
}

impl From<ProcedureDecl> for Stmt {
    fn from(decl: ProcedureDecl) -> Self {
        Stmt::Procedure(decl)
    }
}

impl From<FunctionDecl> for Stmt {
    fn from(decl: FunctionDecl) -> Self {
        Stmt::Function(decl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BinOp, BinaryOp, Ident, Literal};

    fn int(text: &str) -> Literal {
        Literal::new(text).unwrap()
    }

    #[test]
    fn test_for_fills_missing_slots() {
        let stmt = For::new(None, int("10"), None);
        assert!(stmt.init().is_empty());
        assert!(stmt.body().is_empty());
        assert!(matches!(stmt.init(), Stmt::List(list) if list.meta.props.synthesized));
    }

    #[test]
    fn test_for_keeps_given_slots() {
        let init = Assign::new(Ident::new("i"), int("1"));
        let body = Call::new(Ident::new("tick"), vec![]);
        let stmt = For::new(Some(init.clone().into()), int("10"), Some(body.into()));
        assert_eq!(stmt.init(), &Stmt::Assign(init));
        assert!(matches!(stmt.body(), Stmt::Call(_)));
    }

    #[test]
    fn test_if_else_branch() {
        let cond = BinaryOp::new(BinOp::Gt, Ident::new("x"), int("0"));
        let then = Assign::new(Ident::new("y"), int("1"));
        let no_else = If::new(cond.clone(), then.clone());
        assert!(no_else.else_branch().is_none());

        let with_else = If::with_else(cond, then, Assign::new(Ident::new("y"), int("2")));
        assert!(matches!(with_else.else_branch(), Some(Stmt::Assign(_))));
    }

    #[test]
    fn test_empty_sentinel() {
        assert!(Stmt::empty().is_empty());
        assert!(StmtList::empty().is_empty());
        assert_eq!(StmtList::empty(), StmtList::empty());
        assert!(!Stmt::from(StmtList::new(vec![Stmt::empty()])).is_empty());
    }
}
