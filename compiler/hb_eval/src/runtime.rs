//! Host-facing entry point.
//!
//! [`Runtime`] bundles an [`Interpreter`], its [`Environment`] and an
//! output handler. Hosts register natives and user functions, then feed
//! it source text with [`Runtime::do_string`].

use hb_ir::{trace, Expression, Statement};
use hb_lexer::{parse_program, ParseError};

use crate::errors::output_failed;
use crate::stdlib::register_standard_library;
use crate::{
    stdout_handler, Environment, EvalError, EvalResult, Interpreter, SharedPrintHandler,
    UserFunction,
};

/// Failure of a whole `do_string` run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// An interpreter with its environment and output, ready to run source.
pub struct Runtime {
    interpreter: Interpreter,
    env: Environment,
    output: SharedPrintHandler,
    /// Dump parsed statements before executing them.
    debug: bool,
}

impl Runtime {
    /// A runtime printing to stdout, with an empty environment.
    pub fn new() -> Self {
        Self::with_output(stdout_handler())
    }

    /// A runtime printing through `output`, with an empty environment.
    pub fn with_output(output: SharedPrintHandler) -> Self {
        Runtime {
            interpreter: Interpreter::new(),
            env: Environment::new(),
            output,
            debug: false,
        }
    }

    /// Replace the interpreter, e.g. one with a call depth limit.
    #[must_use]
    pub fn with_interpreter(mut self, interpreter: Interpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Add `noop`, `print`, `println` and `vars`.
    #[must_use]
    pub fn with_standard_library(mut self) -> Self {
        register_standard_library(&mut self.env, &self.output);
        self
    }

    /// Enable or disable the pre-execution statement dump.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Toggle the statement dump on an existing runtime.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Whether the statement dump is enabled.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// The variable table.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// The variable table, for host-side setup.
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// The handler `print` and `println` write through.
    pub fn output(&self) -> &SharedPrintHandler {
        &self.output
    }

    /// Register a native function.
    pub fn register_native(
        &mut self,
        name: &str,
        func: impl Fn(&[Expression], &mut Environment) -> EvalResult<()> + 'static,
    ) {
        self.env.define_native(name, func);
    }

    /// Parse `body` and store it as a user function called `name`.
    pub fn define_function(&mut self, name: &str, body: &str) -> Result<(), ParseError> {
        let statements = parse_program(body)?;
        self.env.define_function(UserFunction::new(name, statements));
        Ok(())
    }

    /// Parse and execute `code`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn do_string(&mut self, code: &str) -> Result<(), RunError> {
        let statements = parse_program(code)?;
        if self.debug {
            self.output
                .print(&trace::render(&statements))
                .map_err(|err| output_failed(&err))?;
        }
        self.execute(&statements)?;
        Ok(())
    }

    /// Execute already-parsed statements.
    pub fn execute(&mut self, statements: &[Statement]) -> EvalResult<()> {
        self.interpreter.execute(statements, &mut self.env)
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
