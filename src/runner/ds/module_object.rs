//! `ModuleObject` - a loaded module as a first-class value.
//!
//! A module is a named aggregate of exports. Attribute access on a module is
//! a lookup in its attribute table; nothing is computed on the fly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use crate::runner::ds::error::ModuleError;
use crate::runner::ds::module_name::ModuleName;
use crate::runner::ds::value::Value;
use crate::runner::lazy::attribute::AttributeSource;

pub const ATTR_NAME: &str = "__name__";
pub const ATTR_PACKAGE: &str = "__package__";
pub const ATTR_FILE: &str = "__file__";
pub const ATTR_DOC: &str = "__doc__";

#[derive(Debug)]
pub struct ModuleObject {
    name: ModuleName,
    /// Filled while the module body runs, read-only in practice afterwards.
    attrs: RefCell<HashMap<String, Value>>,
}

impl ModuleObject {
    /// Create an empty module carrying `__name__` and `__package__`.
    pub fn new(name: impl Into<ModuleName>) -> Self {
        let name = name.into();
        let mut attrs = HashMap::new();
        attrs.insert(ATTR_NAME.to_string(), Value::str(name.as_str()));
        attrs.insert(
            ATTR_PACKAGE.to_string(),
            match name.parent() {
                Some(parent) => Value::str(parent.as_str()),
                None => Value::str(""),
            },
        );
        ModuleObject {
            name,
            attrs: RefCell::new(attrs),
        }
    }

    /// Create an empty module loaded from `path`.
    pub fn with_file(name: impl Into<ModuleName>, path: &Path) -> Self {
        let module = Self::new(name);
        module.set_attr(ATTR_FILE, Value::str(path.display().to_string()));
        module
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn module_name(&self) -> &ModuleName {
        &self.name
    }

    /// Source file the module was loaded from, `None` for native modules.
    pub fn file(&self) -> Option<String> {
        match self.attrs.borrow().get(ATTR_FILE) {
            Some(Value::Str(s)) => Some(s.clone()),
            _ => None,
        }
    }

    pub fn set_attr(&self, name: impl Into<String>, value: Value) {
        self.attrs.borrow_mut().insert(name.into(), value);
    }

    pub fn del_attr(&self, name: &str) -> bool {
        self.attrs.borrow_mut().remove(name).is_some()
    }

    /// All attribute names, sorted.
    pub fn dir(&self) -> Vec<String> {
        let mut names: Vec<String> = self.attrs.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    /// Attribute names that do not start with an underscore, sorted.
    pub fn public_names(&self) -> Vec<String> {
        self.dir()
            .into_iter()
            .filter(|n| !n.starts_with('_'))
            .collect()
    }
}

impl AttributeSource for ModuleObject {
    fn get_attr(&self, name: &str) -> Result<Value, ModuleError> {
        self.attrs
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| ModuleError::attribute(format!("module '{}'", self.name), name))
    }

    fn has_attr(&self, name: &str) -> bool {
        self.attrs.borrow().contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_module_metadata() {
        let module = ModuleObject::new("pkg.sub");
        assert_eq!(module.get_attr(ATTR_NAME).unwrap(), Value::str("pkg.sub"));
        assert_eq!(module.get_attr(ATTR_PACKAGE).unwrap(), Value::str("pkg"));
        assert_eq!(module.file(), None);
    }

    #[test]
    fn test_missing_attribute_error() {
        let module = ModuleObject::new("pkg");
        let err = module.get_attr("nope").unwrap_err();
        assert!(err.is_attribute_error());
        assert_eq!(err.to_string(), "module 'pkg' has no attribute 'nope'");
    }

    #[test]
    fn test_public_names_skip_dunders() {
        let module = ModuleObject::new("pkg");
        module.set_attr("b", Value::Int(2));
        module.set_attr("a", Value::Int(1));
        module.set_attr("_hidden", Value::None);
        assert_eq!(module.public_names(), vec!["a".to_string(), "b".to_string()]);
        assert!(module.del_attr("a"));
        assert!(!module.has_attr("a"));
    }
}
