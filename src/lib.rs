//! # lazyimport - deferred module loading
//!
//! Modules are imported on first use instead of at definition time:
//! - [`LazyModule`] proxies that import their module on the first attribute read
//! - [`LazySlot`] / [`LazyNamespace`] owning cells that swap the proxy for the
//!   real module after first use
//! - An [`Importer`] with pluggable resolvers and a per-importer module cache
//! - A small module source language (`.lmod` files) parsed with pest
//!
//! ## Quick Start
//!
//! ```
//! use lazyimport::{Importer, LazyNamespace, NativeModule, NativeRegistry, NativeResolver, Value};
//!
//! let registry = NativeRegistry::new()
//!     .with_module(NativeModule::new("mylib").add_constant("__version__", Value::str("1.2.3")));
//! let importer = Importer::new()
//!     .with_resolver(Box::new(NativeResolver::new(registry)))
//!     .into_shared();
//!
//! // Nothing is imported here.
//! let libs = LazyNamespace::with_importer("LazyLibs", importer.clone()).with_lib("mylib", "mylib");
//! assert!(libs.get("mylib").unwrap().is_proxy());
//! assert!(!importer.borrow().is_loaded("mylib"));
//!
//! // The first read imports the module and rebinds the field.
//! assert_eq!(libs.get_attr("mylib", "__version__").unwrap(), Value::str("1.2.3"));
//! assert!(libs.get("mylib").unwrap().is_module());
//! ```
//!
//! ## Proxies and References
//!
//! Reading through the owning slot replaces the proxy in that slot. A
//! reference captured earlier keeps pointing at the proxy:
//!
//! ```
//! use lazyimport::{AttributeSource, Importer, LazyNamespace, NativeModule, NativeRegistry,
//!                  NativeResolver, Value};
//!
//! let registry = NativeRegistry::new()
//!     .with_module(NativeModule::new("mylib").add_constant("answer", Value::Int(42)));
//! let importer = Importer::new()
//!     .with_resolver(Box::new(NativeResolver::new(registry)))
//!     .into_shared();
//! let libs = LazyNamespace::with_importer("LazyLibs", importer).with_lib("mylib", "mylib");
//!
//! let lib = libs.get("mylib").unwrap();
//! assert_eq!(lib.get_attr("answer").unwrap(), Value::Int(42));
//! assert!(lib.is_proxy());
//! ```
//!
//! ## Architecture
//!
//! - **[`parser`]** - Module source grammar and AST types
//! - **[`runner`]** - Everything that happens at run time
//!   - **[`runner::lazy`]** - Proxies, slots and namespaces
//!   - **[`runner::plugin`]** - Importer, resolvers and configuration
//!   - **[`runner::ds`]** - Values, modules, functions and errors
//!   - **[`runner::eval`]** - Module body and function evaluation
//! - **[`logging`]** - tracing subscriber setup for the command line tool

#[macro_use]
extern crate lazy_static;

pub mod logging;
pub mod parser;
pub mod runner;

pub use runner::ds::error::ModuleError;
pub use runner::ds::module_name::ModuleName;
pub use runner::ds::module_object::ModuleObject;
pub use runner::ds::value::Value;
pub use runner::lazy::{AttributeSource, Binding, LazyModule, LazyNamespace, LazySlot};
pub use runner::plugin::{
    ConfigError, EvalContext, ImportConfig, Importer, ModuleResolver, NativeModule,
    NativeRegistry, NativeResolver, SharedImporter, SourceResolver,
};
