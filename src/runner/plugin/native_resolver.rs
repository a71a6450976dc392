//! Native module resolver: wraps a `NativeRegistry` as a `ModuleResolver`.

use std::rc::Rc;

use crate::runner::ds::error::ModuleError;
use crate::runner::ds::function_object::{FunctionKind, FunctionObject};
use crate::runner::ds::module_name::ModuleName;
use crate::runner::ds::module_object::{ModuleObject, ATTR_DOC};
use crate::runner::ds::value::Value;
use crate::runner::plugin::registry::NativeRegistry;
use crate::runner::plugin::resolver::ModuleResolver;
use crate::runner::plugin::types::{EvalContext, NativeExport};

/// Serves the modules registered in a `NativeRegistry`.
pub struct NativeResolver {
    registry: NativeRegistry,
}

impl NativeResolver {
    pub fn new(registry: NativeRegistry) -> Self {
        NativeResolver { registry }
    }

    pub fn registry(&self) -> &NativeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut NativeRegistry {
        &mut self.registry
    }
}

impl ModuleResolver for NativeResolver {
    fn has_module(&self, name: &ModuleName) -> bool {
        self.registry.has_module(name.as_str())
    }

    fn load(&self, name: &ModuleName, ctx: &mut EvalContext) -> Result<Rc<ModuleObject>, ModuleError> {
        let def = self
            .registry
            .get_module(name.as_str())
            .ok_or_else(|| ModuleError::ModuleNotFound(name.to_string()))?;

        let module = Rc::new(ModuleObject::new(name));
        if let Some(doc) = &def.doc {
            module.set_attr(ATTR_DOC, Value::str(doc.as_str()));
        }
        for (attr, value) in &def.constants {
            module.set_attr(attr.as_str(), value.clone());
        }
        for (attr, export) in &def.functions {
            let kind = match export {
                NativeExport::Native(f) => FunctionKind::Native(*f),
                NativeExport::Plugin(f) => FunctionKind::Plugin(f.clone()),
            };
            let function = FunctionObject::new(attr.as_str(), name.as_str(), kind);
            module.set_attr(attr.as_str(), Value::Function(Rc::new(function)));
        }

        if let Some(init) = &def.initializer {
            init(&module, ctx)?;
        }

        Ok(module)
    }

    fn name(&self) -> &str {
        "native"
    }
}
