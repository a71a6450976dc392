//! Core types for the evaluator.

use std::collections::HashMap;
use std::rc::Rc;

use crate::runner::ds::error::ModuleError;
use crate::runner::ds::module_object::ModuleObject;
use crate::runner::ds::value::Value;

pub type ValueResult = Result<Value, ModuleError>;

/// Name resolution scope: function locals over module globals.
pub struct Scope {
    pub locals: HashMap<String, Value>,
    pub globals: Rc<ModuleObject>,
}

impl Scope {
    /// Scope for code running at module level.
    pub fn module_level(globals: Rc<ModuleObject>) -> Self {
        Scope {
            locals: HashMap::new(),
            globals,
        }
    }

    pub fn with_locals(globals: Rc<ModuleObject>, locals: HashMap<String, Value>) -> Self {
        Scope { locals, globals }
    }
}
