//! Module loading: resolvers, the importer and its configuration.
//!
//! ## Resolution Flow
//!
//! When code asks the [`Importer`] for a module (e.g., `tests.fixture`):
//!
//! 1. **Check cache**: Has this module been loaded before?
//! 2. **Query resolvers**: Ask each resolver in registration order
//! 3. **Execute**: The owning resolver builds the module and runs its body
//! 4. **Cache result**: Store the module for future imports
//!
//! ### Key Components
//!
//! - **[`ModuleResolver`]**: Trait for providing modules by dotted name
//! - **[`NativeResolver`]**: Adapter serving modules defined in Rust via [`NativeRegistry`]
//! - **[`SourceResolver`]**: Loads module source files from a search path
//! - **[`Importer`]**: Holds the resolvers and the module cache
//! - **[`ImportConfig`]**: Search path and file extension, from TOML or the environment
//!
//! ## Example: Native Module
//!
//! ```
//! use lazyimport::runner::ds::module_name::ModuleName;
//! use lazyimport::runner::ds::value::Value;
//! use lazyimport::runner::lazy::attribute::AttributeSource;
//! use lazyimport::runner::plugin::{Importer, NativeModule, NativeRegistry, NativeResolver};
//!
//! let registry = NativeRegistry::new()
//!     .with_module(NativeModule::new("consts").add_constant("answer", Value::Int(42)));
//!
//! let mut importer = Importer::new().with_resolver(Box::new(NativeResolver::new(registry)));
//! let consts = importer.import_module(&ModuleName::new("consts")).unwrap();
//! assert_eq!(consts.get_attr("answer").unwrap(), Value::Int(42));
//! ```

pub mod types;
pub mod registry;
pub mod config;
pub mod resolver;
pub mod native_resolver;
pub mod source_resolver;
pub mod importer;

pub use types::{EvalContext, NativeExport, NativeFn, NativeModule, PluginFn};
pub use registry::NativeRegistry;
pub use config::{ConfigError, ImportConfig};
pub use resolver::ModuleResolver;
pub use native_resolver::NativeResolver;
pub use source_resolver::SourceResolver;
pub use importer::{ImportStats, Importer, SharedImporter};
