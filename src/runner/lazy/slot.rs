//! Owning slots: the place a lazy module is first stored.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::runner::ds::error::ModuleError;
use crate::runner::ds::module_object::ModuleObject;
use crate::runner::ds::value::Value;
use crate::runner::lazy::attribute::AttributeSource;
use crate::runner::lazy::proxy::LazyModule;

/// What a slot currently holds. Cloning it captures a reference.
#[derive(Clone)]
pub enum Binding {
    Proxy(Rc<LazyModule>),
    Module(Rc<ModuleObject>),
}

impl Binding {
    /// Is this a real module, with no proxy in between?
    pub fn is_module(&self) -> bool {
        matches!(self, Binding::Module(_))
    }

    pub fn is_proxy(&self) -> bool {
        matches!(self, Binding::Proxy(_))
    }

    pub fn as_module(&self) -> Option<&Rc<ModuleObject>> {
        match self {
            Binding::Module(m) => Some(m),
            Binding::Proxy(_) => None,
        }
    }

    pub fn as_proxy(&self) -> Option<&Rc<LazyModule>> {
        match self {
            Binding::Proxy(p) => Some(p),
            Binding::Module(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Binding::Proxy(_) => "LazyModule",
            Binding::Module(_) => "module",
        }
    }
}

impl AttributeSource for Binding {
    fn get_attr(&self, name: &str) -> Result<Value, ModuleError> {
        match self {
            Binding::Proxy(proxy) => proxy.get_attr(name),
            Binding::Module(module) => module.get_attr(name),
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Proxy(p) => write!(f, "Binding::Proxy({:?})", p),
            Binding::Module(m) => write!(f, "Binding::Module({})", m.name()),
        }
    }
}

/// Indirection cell for one lazy field.
///
/// Starts out holding a proxy. The first attribute read *through the slot*
/// loads the proxy and replaces it with the module, so later reads through
/// the slot skip the proxy. References taken with [`LazySlot::get`] before
/// that point keep the proxy.
pub struct LazySlot {
    binding: RefCell<Binding>,
}

impl LazySlot {
    pub fn new(proxy: LazyModule) -> Self {
        Self::from_proxy(Rc::new(proxy))
    }

    /// Slot holding an existing (possibly shared) proxy.
    pub fn from_proxy(proxy: Rc<LazyModule>) -> Self {
        LazySlot {
            binding: RefCell::new(Binding::Proxy(proxy)),
        }
    }

    /// Current binding of the slot.
    pub fn get(&self) -> Binding {
        self.binding.borrow().clone()
    }

    /// Has the slot been rebound to its module?
    pub fn is_resolved(&self) -> bool {
        self.binding.borrow().is_module()
    }

    /// Load through the held proxy if needed and rebind the slot to the module.
    ///
    /// A proxy that was already loaded through another reference is not
    /// imported again; the slot just takes its cached module.
    pub fn resolve(&self) -> Result<Rc<ModuleObject>, ModuleError> {
        let proxy = match &*self.binding.borrow() {
            Binding::Module(module) => return Ok(module.clone()),
            Binding::Proxy(proxy) => proxy.clone(),
        };

        let module = proxy.load()?;
        debug!(module = %proxy.module_name(), "slot rebound to loaded module");
        *self.binding.borrow_mut() = Binding::Module(module.clone());
        Ok(module)
    }
}

impl AttributeSource for LazySlot {
    /// The slot is rebound before the lookup, so even a missing attribute
    /// leaves the slot holding the module.
    fn get_attr(&self, name: &str) -> Result<Value, ModuleError> {
        self.resolve()?.get_attr(name)
    }
}

impl fmt::Debug for LazySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LazySlot({:?})", self.binding.borrow())
    }
}
