//! `LazyModule` - a stand-in for a module that has not been imported yet.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::runner::ds::error::ModuleError;
use crate::runner::ds::module_name::ModuleName;
use crate::runner::ds::module_object::ModuleObject;
use crate::runner::ds::value::Value;
use crate::runner::lazy::attribute::AttributeSource;
use crate::runner::plugin::importer::{Importer, SharedImporter};

/// Unloaded → Loaded, exactly once. There is no way back.
enum ProxyState {
    Unloaded,
    Loaded(Rc<ModuleObject>),
}

/// Placeholder bound to a module name.
///
/// Constructing one records the name and nothing else. The first attribute
/// read imports the module through the bound importer and caches it; every
/// later read on this proxy delegates to the cached module. If the import
/// fails the error is returned as is and the proxy stays unloaded.
///
/// The proxy never turns into the module: code holding a `LazyModule` keeps
/// holding a `LazyModule`, it just reads the module's attributes through it.
pub struct LazyModule {
    name: ModuleName,
    importer: SharedImporter,
    state: RefCell<ProxyState>,
}

impl LazyModule {
    /// Proxy resolved through the calling thread's default importer.
    pub fn new(name: impl Into<ModuleName>) -> Self {
        Self::with_importer(name, Importer::shared_default())
    }

    /// Proxy resolved through `importer`.
    pub fn with_importer(name: impl Into<ModuleName>, importer: SharedImporter) -> Self {
        LazyModule {
            name: name.into(),
            importer,
            state: RefCell::new(ProxyState::Unloaded),
        }
    }

    pub fn module_name(&self) -> &ModuleName {
        &self.name
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.state.borrow(), ProxyState::Loaded(_))
    }

    /// The cached module, without triggering a load.
    pub fn module(&self) -> Option<Rc<ModuleObject>> {
        match &*self.state.borrow() {
            ProxyState::Loaded(module) => Some(module.clone()),
            ProxyState::Unloaded => None,
        }
    }

    /// Import the module if this proxy has not done so yet, and return it.
    ///
    /// Safe to call from module code running under the same importer.
    pub fn load(&self) -> Result<Rc<ModuleObject>, ModuleError> {
        if let Some(module) = self.module() {
            return Ok(module);
        }

        let module = Importer::import_shared(&self.importer, &self.name)?;
        debug!(module = %self.name, "lazy module loaded");
        *self.state.borrow_mut() = ProxyState::Loaded(module.clone());
        Ok(module)
    }
}

impl AttributeSource for LazyModule {
    fn get_attr(&self, name: &str) -> Result<Value, ModuleError> {
        self.load()?.get_attr(name)
    }
}

impl fmt::Debug for LazyModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyModule")
            .field("name", &self.name.as_str())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl fmt::Display for LazyModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_loaded() { "loaded" } else { "unloaded" };
        write!(f, "<lazy module '{}' ({})>", self.name, state)
    }
}
