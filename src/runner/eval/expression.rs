//! Expression evaluation.

use crate::parser::ast::{Expression, LiteralData, LiteralType};
use crate::runner::ds::error::ModuleError;
use crate::runner::ds::value::Value;
use crate::runner::lazy::attribute::AttributeSource;
use crate::runner::plugin::types::EvalContext;
use crate::runner::std_lib::lookup_builtin;

use super::types::{Scope, ValueResult};

/// Evaluate an expression and return its value.
pub fn evaluate_expression(expr: &Expression, scope: &Scope, ctx: &mut EvalContext) -> ValueResult {
    match expr {
        Expression::Literal(lit) => Ok(evaluate_literal(lit)),

        Expression::Identifier(id) => resolve_name(&id.name, scope),

        Expression::Call {
            callee, arguments, ..
        } => {
            let callee = evaluate_expression(callee, scope, ctx)?;
            let mut args = Vec::with_capacity(arguments.len());
            for arg in arguments {
                args.push(evaluate_expression(arg, scope, ctx)?);
            }
            callee.call(ctx, args)
        }

        Expression::Member {
            object, property, ..
        } => {
            let object = evaluate_expression(object, scope, ctx)?;
            object.get_attr(&property.name)
        }
    }
}

/// Evaluate a literal.
fn evaluate_literal(lit: &LiteralData) -> Value {
    match &lit.value {
        LiteralType::NoneLiteral => Value::None,
        LiteralType::BooleanLiteral(b) => Value::Bool(*b),
        LiteralType::IntegerLiteral(i) => Value::Int(*i),
        LiteralType::FloatLiteral(f) => Value::Float(*f),
        LiteralType::StringLiteral(s) => Value::Str(s.clone()),
    }
}

/// Locals, then module globals, then builtins.
fn resolve_name(name: &str, scope: &Scope) -> ValueResult {
    if let Some(v) = scope.locals.get(name) {
        return Ok(v.clone());
    }
    if scope.globals.has_attr(name) {
        return scope.globals.get_attr(name);
    }
    lookup_builtin(name).ok_or_else(|| ModuleError::Name(name.to_string()))
}
