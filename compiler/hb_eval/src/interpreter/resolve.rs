//! Expression resolution.

use hb_ir::{ExprKind, Expression};

use crate::errors::{expected_name, undefined_variable};
use crate::{Environment, EvalResult, Value};

/// Resolve an expression to a value.
///
/// Constants resolve to their literal text, verbatim. Variable references
/// are looked up in `env`.
pub fn resolve(expr: &Expression, env: &Environment) -> EvalResult<Value> {
    match expr.kind() {
        ExprKind::Constant => Ok(Value::string(expr.value())),
        ExprKind::VariableReference => env
            .get(expr.value())
            .cloned()
            .ok_or_else(|| undefined_variable(expr.value())),
    }
}

/// Resolve an expression that must produce a name.
pub fn resolve_name(expr: &Expression, env: &Environment) -> EvalResult<String> {
    match resolve(expr, env)? {
        Value::String(name) => Ok(name),
        other @ (Value::Mapping(_) | Value::UserFunction(_) | Value::NativeFunction(_)) => {
            Err(expected_name(other.type_name()))
        }
    }
}

/// Resolve the target of a `var` statement.
///
/// The target is resolved like any other expression, so `var $slot v`
/// assigns to whatever name `slot` holds. A reference to a variable that
/// does not exist yet names itself: `var $x v` on a fresh table defines `x`.
pub(crate) fn resolve_target(expr: &Expression, env: &Environment) -> EvalResult<String> {
    if expr.is_variable() && !env.contains(expr.value()) {
        return Ok(expr.value().to_string());
    }
    resolve_name(expr, env)
}
