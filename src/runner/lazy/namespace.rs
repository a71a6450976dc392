//! A named container of lazy fields, one slot per field.

use std::collections::BTreeMap;

use crate::runner::ds::error::ModuleError;
use crate::runner::ds::module_name::ModuleName;
use crate::runner::ds::value::Value;
use crate::runner::lazy::attribute::AttributeSource;
use crate::runner::lazy::proxy::LazyModule;
use crate::runner::lazy::slot::{Binding, LazySlot};
use crate::runner::plugin::importer::{Importer, SharedImporter};

/// Groups lazily imported modules under field names.
///
/// ```
/// use lazyimport::runner::lazy::LazyNamespace;
///
/// let libs = LazyNamespace::new("LazyLibs").with_lib("json", "codecs.json");
/// assert!(libs.get("json").unwrap().is_proxy());
/// ```
pub struct LazyNamespace {
    name: String,
    importer: SharedImporter,
    slots: BTreeMap<String, LazySlot>,
}

impl LazyNamespace {
    /// Namespace whose fields import through the thread's default importer.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_importer(name, Importer::shared_default())
    }

    pub fn with_importer(name: impl Into<String>, importer: SharedImporter) -> Self {
        LazyNamespace {
            name: name.into(),
            importer,
            slots: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a field holding a fresh proxy for `module`. Nothing is imported.
    pub fn with_lib(self, field: impl Into<String>, module: impl Into<ModuleName>) -> Self {
        let proxy = LazyModule::with_importer(module, self.importer.clone());
        self.with_proxy(field, proxy)
    }

    /// Add a field holding the given proxy.
    pub fn with_proxy(mut self, field: impl Into<String>, proxy: LazyModule) -> Self {
        self.slots.insert(field.into(), LazySlot::new(proxy));
        self
    }

    pub fn slot(&self, field: &str) -> Result<&LazySlot, ModuleError> {
        self.slots
            .get(field)
            .ok_or_else(|| ModuleError::attribute(format!("type object '{}'", self.name), field))
    }

    /// Current binding of a field, as a reader of the field would see it.
    pub fn get(&self, field: &str) -> Result<Binding, ModuleError> {
        Ok(self.slot(field)?.get())
    }

    /// Read `attr` through the field's slot, loading and rebinding on first use.
    pub fn get_attr(&self, field: &str, attr: &str) -> Result<Value, ModuleError> {
        self.slot(field)?.get_attr(attr)
    }

    /// Field names, sorted.
    pub fn fields(&self) -> Vec<&str> {
        self.slots.keys().map(|s| s.as_str()).collect()
    }
}
