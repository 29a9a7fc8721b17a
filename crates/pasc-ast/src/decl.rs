//! Declaration AST nodes

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{AstError, AstResult, Ident, Literal, Meta, NodeKind, StmtList};

/// Identifiers declared together: `a, b, c`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentList {
    pub(crate) idents: Vec<Ident>,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl IdentList {
    pub fn new(idents: Vec<Ident>) -> Self {
        Self {
            idents,
            meta: Meta::default(),
        }
    }

    pub fn idents(&self) -> &[Ident] {
        &self.idents
    }
}

/// Type name: `integer`, `real`, `boolean`, `string`, or any user name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub(crate) name: String,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl TypeSpec {
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

/// `a, b: integer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub(crate) idents: IdentList,
    pub(crate) ty: TypeSpec,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl VarDecl {
    pub fn new(idents: IdentList, ty: TypeSpec) -> Self {
        Self {
            idents,
            ty,
            meta: Meta::default(),
        }
    }

    pub fn idents(&self) -> &IdentList {
        &self.idents
    }

    pub fn ty(&self) -> &TypeSpec {
        &self.ty
    }
}

/// `name: array [lower .. upper] of elem_ty`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayDecl {
    pub(crate) name: Ident,
    pub(crate) lower: Literal,
    pub(crate) upper: Literal,
    pub(crate) elem_ty: TypeSpec,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl ArrayDecl {
    pub fn new(name: Ident, lower: Literal, upper: Literal, elem_ty: TypeSpec) -> Self {
        Self {
            name,
            lower,
            upper,
            elem_ty,
            meta: Meta::default(),
        }
    }

    pub fn name(&self) -> &Ident {
        &self.name
    }

    pub fn lower(&self) -> &Literal {
        &self.lower
    }

    pub fn upper(&self) -> &Literal {
        &self.upper
    }

    pub fn elem_ty(&self) -> &TypeSpec {
        &self.elem_ty
    }
}

/// One entry of a `var` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VarEntry {
    Var(VarDecl),
    Array(ArrayDecl),
}

impl From<VarDecl> for VarEntry {
    fn from(decl: VarDecl) -> Self {
        VarEntry::Var(decl)
    }
}

impl From<ArrayDecl> for VarEntry {
    fn from(decl: ArrayDecl) -> Self {
        VarEntry::Array(decl)
    }
}

/// A `var` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarsDecl {
    pub(crate) entries: Vec<VarEntry>,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl VarsDecl {
    pub fn new(entries: Vec<VarEntry>) -> Self {
        Self {
            entries,
            meta: Meta::default(),
        }
    }

    pub fn entries(&self) -> &[VarEntry] {
        &self.entries
    }
}

/// Formal parameters of a procedure or function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub(crate) decls: Vec<VarDecl>,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl Params {
    pub fn new(decls: Vec<VarDecl>) -> Self {
        Self {
            decls,
            meta: Meta::default(),
        }
    }

    /// Parameter list of a routine declared without parentheses
    pub fn empty() -> Self {
        Self {
            decls: Vec::new(),
            meta: Meta::synthesized(),
        }
    }

    pub fn decls(&self) -> &[VarDecl] {
        &self.decls
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

/// `procedure name(params); var ...; begin ... end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureDecl {
    pub(crate) name: Ident,
    pub(crate) params: Params,
    pub(crate) vars: VarsDecl,
    pub(crate) body: StmtList,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl ProcedureDecl {
    pub fn new(name: Ident, params: Params, vars: VarsDecl, body: StmtList) -> Self {
        Self {
            name,
            params,
            vars,
            body,
            meta: Meta::default(),
        }
    }

    pub fn without_params(name: Ident, vars: VarsDecl, body: StmtList) -> Self {
        Self::new(name, Params::empty(), vars, body)
    }

    /// Build from positional parts: `name, [params,] vars, body`.
    pub fn from_args(args: Vec<DeclArg>) -> AstResult<Self> {
        let mut args = ArgCursor::new(NodeKind::ProcedureDecl, "3 or 4", args);
        match args.len() {
            3 => Ok(Self::without_params(args.name()?, args.vars()?, args.body()?)),
            4 => Ok(Self::new(
                args.name()?,
                args.params()?,
                args.vars()?,
                args.body()?,
            )),
            _ => Err(args.arity()),
        }
    }

    pub fn name(&self) -> &Ident {
        &self.name
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn vars(&self) -> &VarsDecl {
        &self.vars
    }

    pub fn body(&self) -> &StmtList {
        &self.body
    }
}

/// `function name(params): ty; var ...; begin ... end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub(crate) name: Ident,
    pub(crate) params: Params,
    pub(crate) return_ty: TypeSpec,
    pub(crate) vars: VarsDecl,
    pub(crate) body: StmtList,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    pub(crate) meta: Meta,
}

impl FunctionDecl {
    pub fn new(
        name: Ident,
        params: Params,
        return_ty: TypeSpec,
        vars: VarsDecl,
        body: StmtList,
    ) -> Self {
        Self {
            name,
            params,
            return_ty,
            vars,
            body,
            meta: Meta::default(),
        }
    }

    pub fn without_params(name: Ident, return_ty: TypeSpec, vars: VarsDecl, body: StmtList) -> Self {
        Self::new(name, Params::empty(), return_ty, vars, body)
    }

    /// Build from positional parts: `name, [params,] return type, vars, body`.
    pub fn from_args(args: Vec<DeclArg>) -> AstResult<Self> {
        let mut args = ArgCursor::new(NodeKind::FunctionDecl, "4 or 5", args);
        match args.len() {
            4 => Ok(Self::without_params(
                args.name()?,
                args.ty()?,
                args.vars()?,
                args.body()?,
            )),
            5 => Ok(Self::new(
                args.name()?,
                args.params()?,
                args.ty()?,
                args.vars()?,
                args.body()?,
            )),
            _ => Err(args.arity()),
        }
    }

    pub fn name(&self) -> &Ident {
        &self.name
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn return_ty(&self) -> &TypeSpec {
        &self.return_ty
    }

    pub fn vars(&self) -> &VarsDecl {
        &self.vars
    }

    pub fn body(&self) -> &StmtList {
        &self.body
    }
}

/// One positional part of a routine declaration, as handed over by a parser
#[derive(Debug, Clone, PartialEq)]
pub enum DeclArg {
    Name(Ident),
    Params(Params),
    Type(TypeSpec),
    Vars(VarsDecl),
    Body(StmtList),
}

impl DeclArg {
    fn describe(&self) -> &'static str {
        match self {
            DeclArg::Name(_) => "name",
            DeclArg::Params(_) => "params",
            DeclArg::Type(_) => "return type",
            DeclArg::Vars(_) => "var section",
            DeclArg::Body(_) => "statement list",
        }
    }
}

impl From<Ident> for DeclArg {
    fn from(ident: Ident) -> Self {
        DeclArg::Name(ident)
    }
}

impl From<Params> for DeclArg {
    fn from(params: Params) -> Self {
        DeclArg::Params(params)
    }
}

impl From<TypeSpec> for DeclArg {
    fn from(ty: TypeSpec) -> Self {
        DeclArg::Type(ty)
    }
}

impl From<VarsDecl> for DeclArg {
    fn from(vars: VarsDecl) -> Self {
        DeclArg::Vars(vars)
    }
}

impl From<StmtList> for DeclArg {
    fn from(body: StmtList) -> Self {
        DeclArg::Body(body)
    }
}

/// Takes positional arguments off the front, checking each slot's kind
struct ArgCursor {
    kind: NodeKind,
    expected: &'static str,
    count: usize,
    position: usize,
    args: std::vec::IntoIter<DeclArg>,
}

impl ArgCursor {
    fn new(kind: NodeKind, expected: &'static str, args: Vec<DeclArg>) -> Self {
        Self {
            kind,
            expected,
            count: args.len(),
            position: 0,
            args: args.into_iter(),
        }
    }

    fn len(&self) -> usize {
        self.count
    }

    fn arity(&self) -> AstError {
        let err = AstError::Arity {
            kind: self.kind,
            expected: self.expected,
            found: self.count,
        };
        debug!(%err, "routine declaration rejected");
        err
    }

    fn next(&mut self) -> AstResult<DeclArg> {
        self.position += 1;
        self.args.next().ok_or_else(|| self.arity())
    }

    fn mismatch(&self, expected: &'static str, found: &DeclArg) -> AstError {
        let err = AstError::UnexpectedArgument {
            kind: self.kind,
            position: self.position,
            expected,
            found: found.describe(),
        };
        debug!(%err, "routine declaration rejected");
        err
    }

    fn name(&mut self) -> AstResult<Ident> {
        match self.next()? {
            DeclArg::Name(name) => Ok(name),
            other => Err(self.mismatch("name", &other)),
        }
    }

    fn params(&mut self) -> AstResult<Params> {
        match self.next()? {
            DeclArg::Params(params) => Ok(params),
            other => Err(self.mismatch("params", &other)),
        }
    }

    fn ty(&mut self) -> AstResult<TypeSpec> {
        match self.next()? {
            DeclArg::Type(ty) => Ok(ty),
            other => Err(self.mismatch("return type", &other)),
        }
    }

    fn vars(&mut self) -> AstResult<VarsDecl> {
        match self.next()? {
            DeclArg::Vars(vars) => Ok(vars),
            other => Err(self.mismatch("var section", &other)),
        }
    }

    fn body(&mut self) -> AstResult<StmtList> {
        match self.next()? {
            DeclArg::Body(body) => Ok(body),
            other => Err(self.mismatch("statement list", &other)),
        }
    }
}
