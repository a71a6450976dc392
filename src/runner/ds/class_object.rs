use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::runner::ds::error::ModuleError;
use crate::runner::ds::value::Value;
use crate::runner::plugin::types::EvalContext;

/// A class exported by a module. Its attribute table is fixed once the
/// defining module body has run.
pub struct ClassObject {
    name: String,
    module: String,
    attrs: HashMap<String, Value>,
}

impl ClassObject {
    pub fn new(name: impl Into<String>, module: impl Into<String>) -> Self {
        ClassObject {
            name: name.into(),
            module: module.into(),
            attrs: HashMap::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attrs.insert(name.into(), value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// Attribute defined directly in the class body (methods are returned unbound).
    pub fn get_class_attr(&self, name: &str) -> Option<Value> {
        self.attrs.get(name).cloned()
    }

    /// Create a new instance. Classes in this runtime take no constructor arguments.
    pub fn instantiate(
        class: &Rc<ClassObject>,
        _ctx: &mut EvalContext,
        args: Vec<Value>,
    ) -> Result<Value, ModuleError> {
        if !args.is_empty() {
            return Err(ModuleError::Type(format!(
                "{}() takes no arguments ({} given)",
                class.name,
                args.len()
            )));
        }
        Ok(Value::Instance(Rc::new(InstanceObject {
            class: class.clone(),
            attrs: RefCell::new(HashMap::new()),
        })))
    }
}

pub struct InstanceObject {
    class: Rc<ClassObject>,
    attrs: RefCell<HashMap<String, Value>>,
}

impl InstanceObject {
    pub fn class(&self) -> &Rc<ClassObject> {
        &self.class
    }

    pub fn set_attr(&self, name: impl Into<String>, value: Value) {
        self.attrs.borrow_mut().insert(name.into(), value);
    }

    /// Instance attributes shadow class attributes; class functions come
    /// back bound to `this`.
    pub fn get_attr(this: &Rc<InstanceObject>, name: &str) -> Result<Value, ModuleError> {
        if let Some(v) = this.attrs.borrow().get(name) {
            return Ok(v.clone());
        }
        match this.class.get_class_attr(name) {
            Some(Value::Function(function)) => Ok(Value::BoundMethod {
                receiver: this.clone(),
                function,
            }),
            Some(v) => Ok(v),
            None => Err(ModuleError::attribute(
                format!("'{}' object", this.class.name),
                name,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::lazy::attribute::AttributeSource;

    #[test]
    fn test_instance_attr_shadows_class_attr() {
        let class = Rc::new(ClassObject::new("Point", "geo").with_attr("dims", Value::Int(2)));
        let mut ctx = EvalContext::new();
        let instance = ClassObject::instantiate(&class, &mut ctx, vec![]).unwrap();

        assert_eq!(instance.get_attr("dims").unwrap(), Value::Int(2));
        if let Value::Instance(i) = &instance {
            i.set_attr("dims", Value::Int(3));
        }
        assert_eq!(instance.get_attr("dims").unwrap(), Value::Int(3));
        assert_eq!(class.get_class_attr("dims"), Some(Value::Int(2)));
    }

    #[test]
    fn test_instantiate_rejects_arguments() {
        let class = Rc::new(ClassObject::new("Point", "geo"));
        let mut ctx = EvalContext::new();
        let err = ClassObject::instantiate(&class, &mut ctx, vec![Value::Int(1)]).unwrap_err();
        assert_eq!(err.to_string(), "Point() takes no arguments (1 given)");
    }

    #[test]
    fn test_missing_instance_attr() {
        let class = Rc::new(ClassObject::new("Point", "geo"));
        let mut ctx = EvalContext::new();
        let instance = ClassObject::instantiate(&class, &mut ctx, vec![]).unwrap();
        let err = instance.get_attr("z").unwrap_err();
        assert_eq!(err.to_string(), "'Point' object has no attribute 'z'");
    }
}
