//! Expressions: one per token.

use std::fmt;

/// How an expression's `value` is interpreted at resolution time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExprKind {
    /// `$name` - `value` is the variable name to look up.
    VariableReference,
    /// Literal text - `value` is the payload, already unescaped.
    Constant,
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::VariableReference => write!(f, "VariableReference"),
            ExprKind::Constant => write!(f, "Constant"),
        }
    }
}

/// A single parsed token.
///
/// `source` is the token text as written (after comment truncation);
/// `value` is the sigil-stripped or unescaped payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    kind: ExprKind,
    source: String,
    value: String,
}

impl Expression {
    /// A reference to the variable `name`.
    pub fn variable(source: impl Into<String>, name: impl Into<String>) -> Self {
        Expression {
            kind: ExprKind::VariableReference,
            source: source.into(),
            value: name.into(),
        }
    }

    /// A literal string constant.
    pub fn constant(source: impl Into<String>, value: impl Into<String>) -> Self {
        Expression {
            kind: ExprKind::Constant,
            source: source.into(),
            value: value.into(),
        }
    }

    /// Whether this is a variable reference or a constant.
    #[inline]
    pub fn kind(&self) -> ExprKind {
        self.kind
    }

    /// The token as written, quotes and sigils included.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The variable name or the literal text.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` for `$name` expressions.
    #[inline]
    pub fn is_variable(&self) -> bool {
        matches!(self.kind, ExprKind::VariableReference)
    }
}
