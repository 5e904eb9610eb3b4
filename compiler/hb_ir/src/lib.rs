//! HighBasic IR - the parsed program model.
//!
//! A program is an ordered list of [`Statement`]s, one per source line.
//! Each statement holds the ordered [`Expression`]s produced from that
//! line's tokens. Both are plain data: they are built once by the lexer
//! and never mutated afterwards.

mod expr;
mod stmt;
pub mod trace;

pub use expr::{ExprKind, Expression};
pub use stmt::{Statement, StmtKind};
