//! The variable table.
//!
//! One flat, global table per program run. There is no scope stack:
//! user functions run against the same table as their caller, so every
//! assignment is visible to every later statement.

use hb_ir::Expression;

use crate::{EvalResult, Mapping, NativeFunction, UserFunction, Value};

/// Name to value table, in definition order.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    variables: Mapping,
}

impl Environment {
    /// An empty environment, with no built-ins registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Whether `name` has been assigned.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Set `name`, overwriting any previous value.
    pub fn assign(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name, value);
    }

    /// All defined names, in the order they were first assigned.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys()
    }

    /// Number of defined variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been assigned yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Register a native function under `name`.
    pub fn define_native(
        &mut self,
        name: &str,
        func: impl Fn(&[Expression], &mut Environment) -> EvalResult<()> + 'static,
    ) {
        self.assign(name, Value::NativeFunction(NativeFunction::new(name, func)));
    }

    /// Register a user function under its own name.
    pub fn define_function(&mut self, function: UserFunction) {
        self.assign(function.name().to_string(), Value::UserFunction(function));
    }
}
