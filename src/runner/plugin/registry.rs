//! Registry of native module definitions.

use std::collections::HashMap;

use super::types::NativeModule;

/// Holds the definitions of modules implemented in Rust.
///
/// Registering a module is cheap: it only stores the recipe. The module
/// object is built when an importer asks for it.
pub struct NativeRegistry {
    modules: HashMap<String, NativeModule>,
}

impl NativeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        NativeRegistry {
            modules: HashMap::new(),
        }
    }

    /// Register a module definition, replacing any previous one of the same name.
    pub fn register_module(&mut self, module: NativeModule) {
        self.modules.insert(module.name.clone(), module);
    }

    pub fn with_module(mut self, module: NativeModule) -> Self {
        self.register_module(module);
        self
    }

    pub fn get_module(&self, name: &str) -> Option<&NativeModule> {
        self.modules.get(name)
    }

    pub fn has_module(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Registered module names, sorted.
    pub fn module_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modules.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for NativeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
