//! Statement execution.
//!
//! Statements run strictly in order and the first error stops the
//! sequence. Nothing returns a value: effects happen through assignment
//! into the [`Environment`] or through native functions.

mod call_stack;
mod resolve;

use std::rc::Rc;

use hb_ir::{Expression, Statement, StmtKind};

use crate::errors::{
    function_not_found, not_a_function, too_few_expressions, too_many_expressions,
    unimplemented_feature, unknown_statement_kind,
};
use crate::stack::ensure_sufficient_stack;
use crate::{Environment, EvalResult, NativeFunction, UserFunction, Value};

use call_stack::CallStack;
pub use resolve::{resolve, resolve_name};

/// Executes statement sequences against a caller-supplied environment.
///
/// The interpreter owns only call bookkeeping. The environment is passed
/// into every operation so that independent runs can keep separate tables.
#[derive(Debug, Default)]
pub struct Interpreter {
    call_stack: CallStack,
}

/// A dispatch target, detached from the environment borrow.
enum Callee {
    Native(NativeFunction),
    User(UserFunction),
}

impl Interpreter {
    /// An interpreter with unbounded user-function recursion.
    pub fn new() -> Self {
        Self::default()
    }

    /// An interpreter that fails with `RecursionLimit` once `max_depth`
    /// user-function calls are active.
    pub fn with_max_call_depth(max_depth: usize) -> Self {
        Interpreter {
            call_stack: CallStack::new(Some(max_depth)),
        }
    }

    /// Number of user-function calls currently executing.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// The configured call depth limit, if any.
    pub fn max_call_depth(&self) -> Option<usize> {
        self.call_stack.max_depth()
    }

    /// Execute `statements` in order, stopping at the first error.
    #[tracing::instrument(level = "debug", skip_all, fields(count = statements.len(), depth = self.call_stack.depth()))]
    pub fn execute(&mut self, statements: &[Statement], env: &mut Environment) -> EvalResult<()> {
        for stmt in statements {
            self.execute_statement(stmt, env)
                .map_err(|err| err.with_statement(stmt.source()))?;
        }
        Ok(())
    }

    /// Execute a single statement.
    pub fn execute_statement(&mut self, stmt: &Statement, env: &mut Environment) -> EvalResult<()> {
        tracing::debug!(kind = %stmt.kind(), source = stmt.source(), "execute");
        match stmt.kind() {
            StmtKind::Assignment => assign(stmt.expressions(), env),
            StmtKind::Operator => Err(unimplemented_feature("operators")),
            StmtKind::FunctionCall => self.call(stmt.expressions(), env),
            other => Err(unknown_statement_kind(other)),
        }
    }

    fn call(&mut self, expressions: &[Expression], env: &mut Environment) -> EvalResult<()> {
        let Some((callee, args)) = expressions.split_first() else {
            return Err(function_not_found(""));
        };
        let name = resolve_name(callee, env)?;

        let target = match env.get(&name) {
            Some(Value::NativeFunction(func)) => Callee::Native(func.clone()),
            Some(Value::UserFunction(func)) => Callee::User(func.clone()),
            Some(Value::String(_) | Value::Mapping(_)) => return Err(not_a_function(&name)),
            None => return Err(function_not_found(&name)),
        };

        match target {
            Callee::Native(func) => {
                tracing::debug!(name = %name, args = args.len(), "call native");
                func.call(args, env)
            }
            Callee::User(func) => {
                tracing::debug!(name = %name, "call user function");
                self.call_user(&func, env)
            }
        }
    }

    /// Run a user function's body.
    ///
    /// No variable frame is pushed and arguments are not bound: the body
    /// reads and writes the caller's environment directly, and anything it
    /// assigns stays visible after it returns.
    fn call_user(&mut self, func: &UserFunction, env: &mut Environment) -> EvalResult<()> {
        self.call_stack.push(Rc::from(func.name()))?;
        let result = ensure_sufficient_stack(|| self.execute(func.body(), env));
        self.call_stack.pop();
        result
    }
}

/// `var <target> <value>`
fn assign(expressions: &[Expression], env: &mut Environment) -> EvalResult<()> {
    let [target, value] = expressions else {
        return Err(if expressions.len() < 2 {
            too_few_expressions(expressions.len())
        } else {
            too_many_expressions(expressions.len())
        });
    };
    let name = resolve::resolve_target(target, env)?;
    let value = resolve(value, env)?;
    env.assign(name, value);
    Ok(())
}
