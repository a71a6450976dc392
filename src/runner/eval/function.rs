//! Function call execution.

use std::collections::HashMap;
use std::rc::Rc;

use crate::runner::ds::error::ModuleError;
use crate::runner::ds::function_object::{FunctionKind, FunctionObject};
use crate::runner::ds::value::Value;
use crate::runner::plugin::types::EvalContext;

use super::expression::evaluate_expression;
use super::types::{Scope, ValueResult};

/// Call a function with the given arguments.
pub fn call_function(func: &Rc<FunctionObject>, ctx: &mut EvalContext, args: Vec<Value>) -> ValueResult {
    match &func.kind {
        FunctionKind::Native(f) => f(ctx, args),
        FunctionKind::Plugin(f) => f(ctx, args),
        FunctionKind::Script(script) => {
            if args.len() != script.params.len() {
                return Err(ModuleError::Type(format!(
                    "{}() takes {} positional argument{} but {} {} given",
                    func.name(),
                    script.params.len(),
                    if script.params.len() == 1 { "" } else { "s" },
                    args.len(),
                    if args.len() == 1 { "was" } else { "were" },
                )));
            }
            let globals = script.globals.upgrade().ok_or_else(|| {
                ModuleError::Type(format!(
                    "module defining {}() is no longer alive",
                    func.qualified_name()
                ))
            })?;
            let locals: HashMap<String, Value> =
                script.params.iter().cloned().zip(args.into_iter()).collect();
            let scope = Scope::with_locals(globals, locals);

            ctx.enter_call(&func.qualified_name())?;
            let result = evaluate_expression(&script.body, &scope, ctx);
            ctx.exit_call();
            result
        }
    }
}
