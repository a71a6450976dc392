//! The importer: module cache plus an ordered list of resolvers.
//!
//! ## How It Works
//!
//! ```text
//! import_module("tests.fixture")
//!      ↓
//! 1. Already in the module cache? → return the cached module
//! 2. Validate the dotted name
//! 3. Query resolvers: Does anyone provide "tests.fixture"?
//! 4. SourceResolver says "yes" → run the module body
//! 5. Cache the module under its name
//! ```
//!
//! Failed loads are not cached; a later request tries again.
//!
//! [`Importer::import_shared`] releases the importer while a module body
//! runs, so bodies and native initializers may import other modules through
//! the same shared importer. A module that is asked for while its own body
//! is still running fails with `ModuleError::CircularImport`.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use tracing::{debug, trace};

use crate::runner::ds::error::ModuleError;
use crate::runner::ds::module_name::ModuleName;
use crate::runner::ds::module_object::ModuleObject;
use crate::runner::plugin::config::{ImportConfig, DEFAULT_CONFIG};
use crate::runner::plugin::resolver::ModuleResolver;
use crate::runner::plugin::source_resolver::SourceResolver;
use crate::runner::plugin::types::EvalContext;

/// Importers are shared by every lazy module bound to them.
pub type SharedImporter = Rc<RefCell<Importer>>;

thread_local! {
    static DEFAULT_IMPORTER: SharedImporter =
        Rc::new(RefCell::new(Importer::from_config(&DEFAULT_CONFIG)));
}

/// Per-name import counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    /// Calls to `import_module` for this name, cache hits included.
    pub requests: usize,
    /// Times a module body actually ran (successfully or not).
    pub executions: usize,
}

/// Loads modules by name and caches them for the lifetime of the importer.
///
/// ## Resolution Order
///
/// When a name is imported:
/// 1. Check if it's in the cache → return cached module
/// 2. Query each resolver's `has_module()` in registration order
/// 3. First resolver that claims the name wins
/// 4. Call resolver's `load()` to execute the module body
/// 5. Cache the module and resolver index
pub struct Importer {
    /// Registered resolvers, queried in order.
    resolvers: Vec<Rc<dyn ModuleResolver>>,
    /// Loaded modules (name → module).
    modules: HashMap<String, Rc<ModuleObject>>,
    /// Which resolver loaded which name.
    resolver_map: HashMap<String, usize>,
    stats: HashMap<String, ImportStats>,
    /// Names whose body is running right now.
    loading: HashSet<String>,
    /// Context module bodies run in; collects their `print` output.
    ctx: EvalContext,
}

/// First half of an import: either the answer, or the work left to do
/// once the importer is no longer borrowed.
enum ImportStep {
    Cached(Rc<ModuleObject>),
    Load {
        resolver: Rc<dyn ModuleResolver>,
        index: usize,
        ctx: EvalContext,
    },
}

impl Importer {
    /// An importer with no resolvers; every import fails until one is added.
    pub fn new() -> Self {
        Importer {
            resolvers: Vec::new(),
            modules: HashMap::new(),
            resolver_map: HashMap::new(),
            stats: HashMap::new(),
            loading: HashSet::new(),
            ctx: EvalContext::new(),
        }
    }

    /// An importer serving source modules from the configured search path.
    pub fn from_config(config: &ImportConfig) -> Self {
        let mut importer = Self::new();
        importer.add_resolver(Box::new(SourceResolver::from_config(config)));
        importer
    }

    /// The calling thread's default importer, built from `DEFAULT_CONFIG`.
    pub fn shared_default() -> SharedImporter {
        DEFAULT_IMPORTER.with(|importer| importer.clone())
    }

    pub fn into_shared(self) -> SharedImporter {
        Rc::new(RefCell::new(self))
    }

    /// Register a resolver. Resolvers are queried in registration order.
    pub fn add_resolver(&mut self, resolver: Box<dyn ModuleResolver>) {
        self.resolvers.push(Rc::from(resolver));
    }

    pub fn with_resolver(mut self, resolver: Box<dyn ModuleResolver>) -> Self {
        self.add_resolver(resolver);
        self
    }

    /// Find which resolver (if any) provides the given name.
    fn find_resolver_index(&self, name: &ModuleName) -> Option<usize> {
        if let Some(&idx) = self.resolver_map.get(name.as_str()) {
            return Some(idx);
        }
        self.resolvers.iter().position(|r| r.has_module(name))
    }

    /// Can any resolver provide `name`? Runs no module code.
    pub fn can_import(&self, name: &ModuleName) -> bool {
        self.modules.contains_key(name.as_str()) || self.find_resolver_index(name).is_some()
    }

    /// Import a module, running its body on first request.
    ///
    /// The importer stays borrowed for the whole call. Use
    /// [`Importer::import_shared`] when module code may import through the
    /// same shared importer.
    pub fn import_module(&mut self, name: &ModuleName) -> Result<Rc<ModuleObject>, ModuleError> {
        match self.begin_import(name)? {
            ImportStep::Cached(module) => Ok(module),
            ImportStep::Load {
                resolver,
                index,
                mut ctx,
            } => {
                let result = resolver.load(name, &mut ctx);
                self.finish_import(name, index, ctx, result)
            }
        }
    }

    /// Import through a shared handle. The handle is not borrowed while the
    /// module body runs.
    pub fn import_shared(
        importer: &SharedImporter,
        name: &ModuleName,
    ) -> Result<Rc<ModuleObject>, ModuleError> {
        let step = importer.borrow_mut().begin_import(name)?;
        match step {
            ImportStep::Cached(module) => Ok(module),
            ImportStep::Load {
                resolver,
                index,
                mut ctx,
            } => {
                let result = resolver.load(name, &mut ctx);
                importer.borrow_mut().finish_import(name, index, ctx, result)
            }
        }
    }

    fn begin_import(&mut self, name: &ModuleName) -> Result<ImportStep, ModuleError> {
        self.stats.entry(name.to_string()).or_default().requests += 1;

        if let Some(module) = self.modules.get(name.as_str()) {
            trace!(module = %name, "module cache hit");
            return Ok(ImportStep::Cached(module.clone()));
        }
        if self.loading.contains(name.as_str()) {
            return Err(ModuleError::CircularImport(name.to_string()));
        }

        name.validate()?;
        let index = self
            .find_resolver_index(name)
            .ok_or_else(|| ModuleError::ModuleNotFound(name.to_string()))?;

        self.stats.entry(name.to_string()).or_default().executions += 1;
        self.loading.insert(name.to_string());
        let resolver = self.resolvers[index].clone();
        debug!(module = %name, resolver = resolver.name(), "loading module");

        Ok(ImportStep::Load {
            resolver,
            index,
            ctx: std::mem::take(&mut self.ctx),
        })
    }

    fn finish_import(
        &mut self,
        name: &ModuleName,
        index: usize,
        mut ctx: EvalContext,
        result: Result<Rc<ModuleObject>, ModuleError>,
    ) -> Result<Rc<ModuleObject>, ModuleError> {
        self.loading.remove(name.as_str());
        // Output of imports nested in this one landed in `self.ctx` meanwhile.
        ctx.output.append(&mut self.ctx.output);
        self.ctx = ctx;

        let module = match result {
            Ok(module) => module,
            Err(e) => {
                debug!(module = %name, error = %e, "module load failed");
                return Err(e);
            }
        };

        self.modules.insert(name.to_string(), module.clone());
        self.resolver_map.insert(name.to_string(), index);
        Ok(module)
    }

    /// Put an already built module into the cache, replacing any previous one.
    pub fn insert_module(&mut self, module: Rc<ModuleObject>) {
        self.modules.insert(module.name().to_string(), module);
    }

    pub fn get_module(&self, name: &str) -> Option<Rc<ModuleObject>> {
        self.modules.get(name).cloned()
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Names of all cached modules, sorted.
    pub fn loaded_modules(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn stats(&self, name: &str) -> ImportStats {
        self.stats.get(name).copied().unwrap_or_default()
    }

    /// Lines printed by module bodies so far.
    pub fn output(&self) -> &[String] {
        &self.ctx.output
    }

    pub fn take_output(&mut self) -> Vec<String> {
        self.ctx.take_output()
    }

    /// Get a reference to the resolvers (for inspection/testing).
    pub fn resolvers(&self) -> &[Rc<dyn ModuleResolver>] {
        &self.resolvers
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}
