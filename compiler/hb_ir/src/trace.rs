//! Human-readable dump of a parsed program.
//!
//! Used by the `--debug` flag to show what the lexer produced before
//! anything runs. Format, per statement:
//!
//! ```text
//! var $x "hi": Assignment
//! |  $x: VariableReference (x)
//! |  "hi": Constant (hi)
//! ```
//!
//! followed by one blank line after the last statement.

use std::fmt;

use crate::Statement;

/// Displays statements in trace format.
pub struct Trace<'a>(pub &'a [Statement]);

impl fmt::Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in self.0 {
            writeln!(f, "{}: {}", stmt.source(), stmt.kind())?;
            for expr in stmt.expressions() {
                writeln!(
                    f,
                    "|  {}: {} ({})",
                    expr.source(),
                    expr.kind(),
                    expr.value()
                )?;
            }
        }
        writeln!(f)
    }
}

/// Render `statements` in trace format.
pub fn render(statements: &[Statement]) -> String {
    Trace(statements).to_string()
}
