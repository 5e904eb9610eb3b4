//! Built-in native functions.
//!
//! | Name      | Behavior                                                      |
//! |-----------|---------------------------------------------------------------|
//! | `noop`    | Does nothing.                                                 |
//! | `print`   | Resolves every argument, joins with spaces, no newline.       |
//! | `println` | Same as `print`, plus a newline.                              |
//! | `vars`    | Stores a list of all variable names into the named variable.  |

use hb_ir::Expression;

use crate::errors::{native_arity, output_failed};
use crate::{resolve, resolve_name, Environment, EvalResult, Mapping, SharedPrintHandler, Value};

/// Register the standard library into `env`, printing through `output`.
pub fn register_standard_library(env: &mut Environment, output: &SharedPrintHandler) {
    env.define_native("noop", |_, _| Ok(()));

    let out = SharedPrintHandler::clone(output);
    env.define_native("println", move |args, env| {
        out.println(&join_resolved(args, env)?)
            .map_err(|err| output_failed(&err))
    });

    let out = SharedPrintHandler::clone(output);
    env.define_native("print", move |args, env| {
        out.print(&join_resolved(args, env)?)
            .map_err(|err| output_failed(&err))
    });

    env.define_native("vars", vars);
}

/// Resolve each argument and join their display forms with single spaces.
fn join_resolved(args: &[Expression], env: &Environment) -> EvalResult<String> {
    let parts = args
        .iter()
        .map(|arg| resolve(arg, env).map(|value| value.to_string()))
        .collect::<EvalResult<Vec<_>>>()?;
    Ok(parts.join(" "))
}

/// `vars <target>`
///
/// The target names the variable to store into. The name list is taken
/// before the store, so a newly created target is not in its own list.
fn vars(args: &[Expression], env: &mut Environment) -> EvalResult<()> {
    let [target] = args else {
        return Err(native_arity("vars", 1, args.len()));
    };
    let target = resolve_name(target, env)?;
    let names = Mapping::from_list(env.names().map(Value::string));
    env.assign(target, Value::Mapping(names));
    Ok(())
}
