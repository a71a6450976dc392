//! Resolver trait for locating and loading modules by name.
//!
//! The importer owns a list of resolvers. Each one answers two questions:
//! can it provide a module with a given name, and what does that module
//! look like once its body has run.

use std::rc::Rc;

use crate::runner::ds::error::ModuleError;
use crate::runner::ds::module_name::ModuleName;
use crate::runner::ds::module_object::ModuleObject;
use crate::runner::plugin::types::EvalContext;

/// A source of modules.
///
/// Resolvers are queried in registration order. The first resolver that
/// claims a name wins.
pub trait ModuleResolver {
    /// Does this resolver provide a module with the given name?
    ///
    /// This should be a cheap check (a map lookup or a file existence test).
    /// It must NOT execute any module code.
    fn has_module(&self, name: &ModuleName) -> bool;

    /// Build the module and run its body.
    ///
    /// Called only after `has_module` returns `true`. The importer caches
    /// the result, so for a given importer this runs at most once per
    /// successfully loaded name.
    fn load(&self, name: &ModuleName, ctx: &mut EvalContext) -> Result<Rc<ModuleObject>, ModuleError>;

    /// Human-readable name for this resolver (for debugging/logging).
    fn name(&self) -> &str;
}
