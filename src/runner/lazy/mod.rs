//! Deferred module loading.
//!
//! A [`LazyModule`] is a placeholder for a module that has not been imported
//! yet. It costs nothing to create; the import happens on the first
//! attribute read and is never repeated for that proxy.
//!
//! ```text
//! LazyNamespace "LazyLibs"
//!   └── field "mylib" → LazySlot
//!                         ├── before first read: Binding::Proxy(LazyModule "tests.fixture")
//!                         └── after first read:  Binding::Module(ModuleObject "tests.fixture")
//! ```
//!
//! Reads through the slot rebind it to the module. A `Binding` captured
//! from the slot before that stays a proxy, and keeps answering attribute
//! reads by delegating to the module the proxy cached.

pub mod attribute;
pub mod proxy;
pub mod slot;
pub mod namespace;

pub use attribute::AttributeSource;
pub use namespace::LazyNamespace;
pub use proxy::LazyModule;
pub use slot::{Binding, LazySlot};
