//! Statements: one per source line.

use std::fmt;

use crate::Expression;

/// Statement kind, selected by the first token of the line.
///
/// Marked `#[non_exhaustive]` so executors outside this crate keep a
/// fallback arm for kinds they do not know how to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StmtKind {
    /// `var <target> <value>`
    Assignment,
    /// `operator ...` - reserved, not executable.
    Operator,
    /// `<callee> <args...>` - anything else.
    FunctionCall,
}

impl StmtKind {
    /// Classify a line by its leading token.
    pub fn from_keyword(token: &str) -> Self {
        match token {
            "var" => StmtKind::Assignment,
            "operator" => StmtKind::Operator,
            _ => StmtKind::FunctionCall,
        }
    }

    /// Whether the leading token is itself an expression.
    ///
    /// Only function calls keep their first token: it names the callee.
    #[inline]
    pub fn keeps_leading_token(self) -> bool {
        matches!(self, StmtKind::FunctionCall)
    }
}

impl fmt::Display for StmtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StmtKind::Assignment => write!(f, "Assignment"),
            StmtKind::Operator => write!(f, "Operator"),
            StmtKind::FunctionCall => write!(f, "FunctionCall"),
        }
    }
}

/// A parsed line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    kind: StmtKind,
    source: String,
    expressions: Vec<Expression>,
}

impl Statement {
    /// Create a statement from its kind, source line and operands.
    pub fn new(kind: StmtKind, source: impl Into<String>, expressions: Vec<Expression>) -> Self {
        Statement {
            kind,
            source: source.into(),
            expressions,
        }
    }

    /// What the statement does, decided by its leading token.
    #[inline]
    pub fn kind(&self) -> StmtKind {
        self.kind
    }

    /// The trimmed source line this statement was parsed from.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Operands in source order. For calls, the callee comes first.
    #[inline]
    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keywords_select_kind() {
        assert_eq!(StmtKind::from_keyword("var"), StmtKind::Assignment);
        assert_eq!(StmtKind::from_keyword("operator"), StmtKind::Operator);
        assert_eq!(StmtKind::from_keyword("println"), StmtKind::FunctionCall);
        // Keywords are case-sensitive.
        assert_eq!(StmtKind::from_keyword("VAR"), StmtKind::FunctionCall);
    }

    #[test]
    fn only_calls_keep_leading_token() {
        assert!(StmtKind::FunctionCall.keeps_leading_token());
        assert!(!StmtKind::Assignment.keeps_leading_token());
        assert!(!StmtKind::Operator.keeps_leading_token());
    }
}
