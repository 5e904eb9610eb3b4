//! The `parse` command: show what the lexer produced without running it.

use hb_eval::SharedPrintHandler;
use hb_ir::trace;
use hb_lexer::parse_program;

use super::{read_file, CommandError};

/// Parse a file and print its statement trace.
pub fn parse_file(path: &str, output: &SharedPrintHandler) -> Result<(), CommandError> {
    let source = read_file(path)?;
    let statements = parse_program(&source)?;
    output.print(&trace::render(&statements))?;
    Ok(())
}
