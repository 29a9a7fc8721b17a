//! Literal nodes and the literal value resolver
//!
//! Literal text is classified by a small `logos` lexer: the whole text
//! must be exactly one integer, real, boolean or quoted-string token.
//! Anything else is a `MalformedLiteral`; text is never evaluated.

use std::fmt;

use logos::Logos;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{AstError, AstResult, Meta};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum LiteralToken {
    #[regex(r"[+-]?[0-9]+")]
    Integer,

    #[regex(r"[+-]?[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+")]
    Real,

    #[token("true", ignore(ascii_case))]
    #[token("false", ignore(ascii_case))]
    Boolean,

    // The delimiter is escaped by doubling it: 'it''s'
    #[regex(r"'([^'\n]|'')*'")]
    #[regex(r#""([^"\n]|"")*""#)]
    String,
}

/// Type tag of a resolved literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralType {
    Integer,
    Real,
    Boolean,
    String,
}

impl LiteralType {
    /// Short name shown in tree dumps
    pub fn name(self) -> &'static str {
        match self {
            LiteralType::Integer => "int",
            LiteralType::Real => "real",
            LiteralType::Boolean => "bool",
            LiteralType::String => "str",
        }
    }
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed literal value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    Integer(i64),
    Real(f64),
    Boolean(bool),
    String(String),
}

impl LiteralValue {
    pub fn ty(&self) -> LiteralType {
        match self {
            LiteralValue::Integer(_) => LiteralType::Integer,
            LiteralValue::Real(_) => LiteralType::Real,
            LiteralValue::Boolean(_) => LiteralType::Boolean,
            LiteralValue::String(_) => LiteralType::String,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LiteralValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            LiteralValue::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LiteralValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(v) => Some(v),
            _ => None,
        }
    }
}

/// Resolve literal source text into a typed value.
pub fn resolve(text: &str) -> AstResult<LiteralValue> {
    let result = classify(text).and_then(|token| convert(token, text));
    match &result {
        Ok(value) => trace!(text, ty = value.ty().name(), "resolved literal"),
        Err(err) => debug!(text, %err, "literal rejected"),
    }
    result
}

fn classify(text: &str) -> AstResult<LiteralToken> {
    let mut lexer = LiteralToken::lexer(text);
    match lexer.next() {
        Some(Ok(token)) if lexer.span() == (0..text.len()) => Ok(token),
        _ => Err(AstError::malformed_literal(text)),
    }
}

fn convert(token: LiteralToken, text: &str) -> AstResult<LiteralValue> {
    let malformed = || AstError::malformed_literal(text);
    match token {
        // Out-of-range integers are rejected rather than widened
        LiteralToken::Integer => text
            .parse::<i64>()
            .map(LiteralValue::Integer)
            .map_err(|_| malformed()),
        LiteralToken::Real => match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(LiteralValue::Real(v)),
            _ => Err(malformed()),
        },
        LiteralToken::Boolean => Ok(LiteralValue::Boolean(text.eq_ignore_ascii_case("true"))),
        LiteralToken::String => Ok(LiteralValue::String(unquote(text))),
    }
}

fn unquote(text: &str) -> String {
    let quote = &text[..1];
    let inner = &text[1..text.len() - 1];
    inner.replace(&quote.repeat(2), quote)
}

/// A literal: its source text plus the value resolved from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLiteral", into = "RawLiteral")]
pub struct Literal {
    pub(crate) text: String,
    pub(crate) value: LiteralValue,
    pub(crate) meta: Meta,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> AstResult<Self> {
        let text = text.into();
        let value = resolve(&text)?;
        Ok(Self {
            text,
            value,
            meta: Meta::default(),
        })
    }

    /// The source text, verbatim
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &LiteralValue {
        &self.value
    }

    pub fn ty(&self) -> LiteralType {
        self.value.ty()
    }
}

/// Serialized form of a literal: the value is always re-resolved on load
#[derive(Serialize, Deserialize)]
struct RawLiteral {
    text: String,
    #[serde(default, skip_serializing_if = "Meta::is_default")]
    meta: Meta,
}

impl TryFrom<RawLiteral> for Literal {
    type Error = AstError;

    fn try_from(raw: RawLiteral) -> AstResult<Self> {
        let mut literal = Literal::new(raw.text)?;
        literal.meta = raw.meta;
        Ok(literal)
    }
}

impl From<Literal> for RawLiteral {
    fn from(literal: Literal) -> Self {
        RawLiteral {
            text: literal.text,
            meta: literal.meta,
        }
    }
}
