//! HighBasic Eval - the tree-walking interpreter.
//!
//! # Architecture
//!
//! - [`Value`]: closed set of runtime shapes (`String`, `Mapping`,
//!   `UserFunction`, `NativeFunction`)
//! - [`Environment`]: one flat, global variable table per run
//! - [`Interpreter`]: executes statements against an environment passed
//!   in by the caller
//! - [`resolve`]: turns an expression into a value
//! - [`Runtime`]: host façade bundling the above with a print handler
//!   and the standard library
//!
//! Native functions receive their arguments unresolved and call
//! [`resolve`] or [`resolve_name`] themselves.

mod environment;
pub mod errors;
mod interpreter;
mod mapping;
mod print_handler;
mod runtime;
mod stack;
pub mod stdlib;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{resolve, resolve_name, Interpreter};
pub use mapping::Mapping;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, writer_handler, PrintHandler,
    SharedPrintHandler,
};
pub use runtime::{RunError, Runtime};
pub use stack::ensure_sufficient_stack;
pub use value::{NativeFn, NativeFunction, UserFunction, Value};
