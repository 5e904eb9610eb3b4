//! Runtime values.
//!
//! Every variable holds exactly one of four shapes. Consumers match on
//! [`Value`] exhaustively; there is no catch-all "other" state.

use std::fmt;
use std::rc::Rc;

use hb_ir::{Expression, Statement};

use crate::{Environment, EvalResult, Mapping};

/// Host callback behind a native function.
///
/// Receives the call's arguments *unresolved*, so it can treat an
/// argument as a name (e.g. "store the result here") instead of a value.
/// Use [`resolve`](crate::resolve) to get values.
pub type NativeFn = Rc<dyn Fn(&[Expression], &mut Environment) -> EvalResult<()>>;

/// A host-registered function.
#[derive(Clone)]
pub struct NativeFunction {
    name: Rc<str>,
    func: NativeFn,
}

impl NativeFunction {
    /// Wrap a closure as a native function called `name`.
    pub fn new(
        name: &str,
        func: impl Fn(&[Expression], &mut Environment) -> EvalResult<()> + 'static,
    ) -> Self {
        NativeFunction {
            name: Rc::from(name),
            func: Rc::new(func),
        }
    }

    /// The name it was registered under.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the callback.
    #[inline]
    pub fn call(&self, args: &[Expression], env: &mut Environment) -> EvalResult<()> {
        (self.func)(args, env)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && std::ptr::addr_eq(Rc::as_ptr(&self.func), Rc::as_ptr(&other.func))
    }
}

/// A function whose body is a statement sequence.
///
/// The body is fixed when the function is created.
#[derive(Clone, Debug, PartialEq)]
pub struct UserFunction {
    name: Rc<str>,
    body: Rc<[Statement]>,
}

impl UserFunction {
    /// A user function running `body` when called.
    pub fn new(name: &str, body: Vec<Statement>) -> Self {
        UserFunction {
            name: Rc::from(name),
            body: Rc::from(body),
        }
    }

    /// The name it was defined under.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Statements executed on each call.
    #[inline]
    pub fn body(&self) -> &[Statement] {
        &self.body
    }
}

/// A runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Mapping(Mapping),
    UserFunction(UserFunction),
    NativeFunction(NativeFunction),
}

impl Value {
    /// Shorthand for `Value::String`.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Short name of the value's shape, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Mapping(_) => "mapping",
            Value::UserFunction(_) => "function",
            Value::NativeFunction(_) => "native function",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Mapping(m) => write!(f, "{m}"),
            Value::UserFunction(func) => write!(f, "<function {}>", func.name()),
            Value::NativeFunction(func) => write!(f, "<native function {}>", func.name()),
        }
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Mapping(m)
    }
}
