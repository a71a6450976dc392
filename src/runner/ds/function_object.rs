use std::rc::{Rc, Weak};

use crate::parser::ast::Expression;
use crate::runner::ds::module_object::ModuleObject;
use crate::runner::plugin::types::{NativeFn, PluginFn};

/// A callable exported by a module, or a method defined in a class body.
pub struct FunctionObject {
    name: String,
    /// Dotted prefix used for display, e.g. `tests.fixture.Flork`.
    owner: String,
    pub kind: FunctionKind,
}

pub enum FunctionKind {
    /// Direct function pointer, for functions compiled into the crate.
    Native(NativeFn),

    /// Closure supplied by an embedder.
    Plugin(PluginFn),

    /// Function defined in module source.
    Script(ScriptFunction),
}

pub struct ScriptFunction {
    pub params: Vec<String>,
    pub body: Rc<Expression>,
    /// Globals of the defining module. Weak, as the module owns the function.
    pub globals: Weak<ModuleObject>,
}

impl FunctionObject {
    pub fn new(name: impl Into<String>, owner: impl Into<String>, kind: FunctionKind) -> Self {
        FunctionObject {
            name: name.into(),
            owner: owner.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualified_name(&self) -> String {
        if self.owner.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.owner, self.name)
        }
    }
}
