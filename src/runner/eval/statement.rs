//! Module body execution.

use std::rc::Rc;

use tracing::trace;

use crate::parser::ast::{ClassData, ClassMember, FunctionData, ModuleData, Statement};
use crate::runner::ds::class_object::ClassObject;
use crate::runner::ds::error::ModuleError;
use crate::runner::ds::function_object::{FunctionKind, FunctionObject, ScriptFunction};
use crate::runner::ds::module_object::ModuleObject;
use crate::runner::ds::value::Value;
use crate::runner::plugin::types::EvalContext;

use super::expression::evaluate_expression;
use super::types::Scope;

/// Run a parsed module body, populating `module`'s attributes.
///
/// Stops at the first failing statement; attributes set before it stay set.
pub fn execute_module(
    module: &Rc<ModuleObject>,
    ast: &ModuleData,
    ctx: &mut EvalContext,
) -> Result<(), ModuleError> {
    let scope = Scope::module_level(module.clone());
    for stmt in &ast.body {
        execute_statement(stmt, module, &scope, ctx)?;
    }
    Ok(())
}

/// Execute a single module-level statement.
pub fn execute_statement(
    stmt: &Statement,
    module: &Rc<ModuleObject>,
    scope: &Scope,
    ctx: &mut EvalContext,
) -> Result<(), ModuleError> {
    match stmt {
        Statement::Assignment(assignment) => {
            let value = evaluate_expression(&assignment.value, scope, ctx)?;
            trace!(module = module.name(), name = %assignment.target.name, "assign");
            module.set_attr(assignment.target.name.as_str(), value);
        }
        Statement::FunctionDef(def) => {
            let function = make_function(def, module.name(), module);
            module.set_attr(def.id.name.as_str(), Value::Function(Rc::new(function)));
        }
        Statement::ClassDef(def) => {
            let class = make_class(def, module, scope, ctx)?;
            module.set_attr(def.id.name.as_str(), Value::Class(Rc::new(class)));
        }
        Statement::Expression(expr) => {
            evaluate_expression(expr, scope, ctx)?;
        }
    }
    Ok(())
}

fn make_function(def: &FunctionData, owner: &str, module: &Rc<ModuleObject>) -> FunctionObject {
    FunctionObject::new(
        def.id.name.as_str(),
        owner,
        FunctionKind::Script(ScriptFunction {
            params: def.params.iter().map(|p| p.name.clone()).collect(),
            body: def.body.clone(),
            globals: Rc::downgrade(module),
        }),
    )
}

fn make_class(
    def: &ClassData,
    module: &Rc<ModuleObject>,
    scope: &Scope,
    ctx: &mut EvalContext,
) -> Result<ClassObject, ModuleError> {
    let owner = format!("{}.{}", module.name(), def.id.name);
    let mut class = ClassObject::new(def.id.name.as_str(), module.name());
    for member in &def.members {
        class = match member {
            ClassMember::Method(method) => {
                let function = make_function(method, &owner, module);
                class.with_attr(method.id.name.as_str(), Value::Function(Rc::new(function)))
            }
            ClassMember::Attribute(attr) => {
                let value = evaluate_expression(&attr.value, scope, ctx)?;
                class.with_attr(attr.target.name.as_str(), value)
            }
        };
    }
    Ok(class)
}
