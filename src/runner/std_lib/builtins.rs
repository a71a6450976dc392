//! `print` and `str`.

use std::rc::Rc;

use tracing::debug;

use crate::runner::ds::error::ModuleError;
use crate::runner::ds::function_object::{FunctionKind, FunctionObject};
use crate::runner::ds::value::Value;
use crate::runner::plugin::types::{EvalContext, NativeFn};

const BUILTINS: &[(&str, NativeFn)] = &[("print", builtin_print), ("str", builtin_str)];

/// Resolve a builtin by name. A fresh function object is built per lookup.
pub fn lookup_builtin(name: &str) -> Option<Value> {
    BUILTINS.iter().find(|(n, _)| *n == name).map(|(n, f)| {
        Value::Function(Rc::new(FunctionObject::new(*n, "", FunctionKind::Native(*f))))
    })
}

/// Format a value the way `print` and `str` show it: strings unquoted.
fn format_value(value: &Value) -> String {
    match value {
        Value::Str(s) => s.clone(),
        other => other.to_string(),
    }
}

/// print - Append a line to the context output.
fn builtin_print(ctx: &mut EvalContext, args: Vec<Value>) -> Result<Value, ModuleError> {
    let line = args.iter().map(format_value).collect::<Vec<_>>().join(" ");
    debug!(target: "lazyimport::print", "{}", line);
    ctx.output.push(line);
    Ok(Value::None)
}

/// str - Convert a single value to its display string.
fn builtin_str(_ctx: &mut EvalContext, args: Vec<Value>) -> Result<Value, ModuleError> {
    match args.as_slice() {
        [] => Ok(Value::str("")),
        [v] => Ok(Value::Str(format_value(v))),
        _ => Err(ModuleError::Type(format!(
            "str() takes at most 1 argument ({} given)",
            args.len()
        ))),
    }
}
