//! Evaluation errors.
//!
//! Every error is fatal to the running statement sequence: there is no
//! recover construct in the language. Construct errors through the factory
//! functions below rather than building kinds by hand.

use std::fmt;

/// Result of executing or resolving something.
pub type EvalResult<T> = Result<T, EvalError>;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("too few expressions in variable assignment (expected 2, got {got})")]
    TooFewExpressions { got: usize },
    #[error("too many expressions in variable assignment (expected 2, got {got})")]
    TooManyExpressions { got: usize },
    #[error("'{name}' is not a variable")]
    UndefinedVariable { name: String },
    #[error("'{name}' is not a function (variable not found)")]
    FunctionNotFound { name: String },
    #[error("'{name}' is not a function")]
    NotAFunction { name: String },
    #[error("expected a name, found a {found}")]
    ExpectedName { found: &'static str },
    #[error("{feature} not yet implemented")]
    Unimplemented { feature: &'static str },
    #[error("unknown statement type: {kind}")]
    UnknownStatementKind { kind: String },
    #[error("`{name}` takes exactly {expected} argument(s), got {got}")]
    NativeArity {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("maximum call depth exceeded (limit: {depth})")]
    RecursionLimit { depth: usize },
    #[error("cannot write output: {message}")]
    Output { message: String },
    /// Raised by host-defined native functions.
    #[error("{message}")]
    Custom { message: String },
}

/// An evaluation error, with the source line that raised it once known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Source text of the innermost statement that failed.
    pub statement: Option<String>,
}

impl EvalError {
    /// An error with no statement attached yet.
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            statement: None,
        }
    }

    /// An error with a free-form message, for native functions.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::new(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    /// Record the failing statement. Keeps the first (innermost) one.
    #[must_use]
    pub fn with_statement(mut self, source: &str) -> Self {
        if self.statement.is_none() {
            self.statement = Some(source.to_string());
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(statement) = &self.statement {
            write!(f, " (in '{statement}')")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Assignment

/// `var` with fewer than two operands.
#[cold]
pub fn too_few_expressions(got: usize) -> EvalError {
    EvalErrorKind::TooFewExpressions { got }.into()
}

/// `var` with more than two operands.
#[cold]
pub fn too_many_expressions(got: usize) -> EvalError {
    EvalErrorKind::TooManyExpressions { got }.into()
}

// Resolution

/// Undefined variable.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
    .into()
}

/// A name position resolved to a non-string value.
#[cold]
pub fn expected_name(found: &'static str) -> EvalError {
    EvalErrorKind::ExpectedName { found }.into()
}

// Calls

/// Call to a name with no binding.
#[cold]
pub fn function_not_found(name: &str) -> EvalError {
    EvalErrorKind::FunctionNotFound {
        name: name.to_string(),
    }
    .into()
}

/// Call to a binding that holds data, not a function.
#[cold]
pub fn not_a_function(name: &str) -> EvalError {
    EvalErrorKind::NotAFunction {
        name: name.to_string(),
    }
    .into()
}

/// Wrong argument count for a built-in.
#[cold]
pub fn native_arity(name: &str, expected: usize, got: usize) -> EvalError {
    EvalErrorKind::NativeArity {
        name: name.to_string(),
        expected,
        got,
    }
    .into()
}

/// Maximum call depth exceeded.
#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalErrorKind::RecursionLimit { depth }.into()
}

// Output

/// The print handler failed to write.
#[cold]
pub fn output_failed(err: &std::io::Error) -> EvalError {
    EvalErrorKind::Output {
        message: err.to_string(),
    }
    .into()
}

// Statements

/// Recognized but unsupported construct.
#[cold]
pub fn unimplemented_feature(feature: &'static str) -> EvalError {
    EvalErrorKind::Unimplemented { feature }.into()
}

/// Statement kind the interpreter has no rule for.
#[cold]
pub fn unknown_statement_kind(kind: impl fmt::Display) -> EvalError {
    EvalErrorKind::UnknownStatementKind {
        kind: kind.to_string(),
    }
    .into()
}
