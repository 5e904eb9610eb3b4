//! HighBasic Lexer - turns source text into statements.
//!
//! # Pipeline
//!
//! 1. [`SourceLines`] splits the source on `\n` and `;`, trims each piece
//!    and drops blank ones.
//! 2. Lines starting with `:` are full-line comments and are skipped.
//! 3. [`tokenize`] splits a line into quoted and bare tokens.
//! 4. The first token picks the [`StmtKind`]; the remaining tokens (all of
//!    them, for function calls) become [`Expression`]s.
//!
//! Argument counts are not checked here. `var $x` parses fine and fails
//! later, when the interpreter runs it.

mod classify;
mod error;
mod escape;
mod lines;
mod scanner;

use hb_ir::{Expression, Statement, StmtKind};

pub use error::ParseError;
pub use lines::SourceLines;
pub use scanner::{tokenize, Token, TokenKind};

/// Marker for a full-line comment.
const LINE_COMMENT: char = ':';

/// Parse a whole program.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_program(source: &str) -> Result<Vec<Statement>, ParseError> {
    let mut statements = Vec::new();
    for line in SourceLines::new(source) {
        if let Some(stmt) = parse_line(line)? {
            tracing::trace!(kind = %stmt.kind(), source = stmt.source(), "parsed statement");
            statements.push(stmt);
        }
    }
    tracing::debug!(count = statements.len(), "parsed program");
    Ok(statements)
}

/// Parse one statement line.
///
/// Returns `Ok(None)` for blank lines and full-line comments.
pub fn parse_line(line: &str) -> Result<Option<Statement>, ParseError> {
    let line = line.trim();
    if line.starts_with(LINE_COMMENT) {
        return Ok(None);
    }

    let tokens = tokenize(line);
    let Some(first) = tokens.first() else {
        return Ok(None);
    };

    let kind = StmtKind::from_keyword(first.text);
    let operands = if kind.keeps_leading_token() {
        &tokens[..]
    } else {
        &tokens[1..]
    };
    let expressions: Vec<Expression> = classify::parse_expressions(operands, line)?;

    Ok(Some(Statement::new(kind, line, expressions)))
}

#[cfg(test)]
mod tests;
