//! Source module resolver: finds module files on a search path and runs them.
//!
//! ## Lookup
//!
//! For a name `a.b.c` and extension `lmod`, each search directory is tried
//! in order for:
//!
//! ```text
//! <dir>/a/b/c.lmod            plain module
//! <dir>/a/b/c/__init__.lmod   package
//! ```
//!
//! The first existing file wins.

use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use tracing::debug;

use crate::parser::ModuleParser;
use crate::runner::ds::error::ModuleError;
use crate::runner::ds::module_name::ModuleName;
use crate::runner::ds::module_object::{ModuleObject, ATTR_PACKAGE};
use crate::runner::ds::value::Value;
use crate::runner::eval::statement::execute_module;
use crate::runner::plugin::config::ImportConfig;
use crate::runner::plugin::resolver::ModuleResolver;
use crate::runner::plugin::types::EvalContext;

pub const PACKAGE_INIT: &str = "__init__";

pub struct SourceResolver {
    search_path: Vec<PathBuf>,
    extension: String,
}

impl SourceResolver {
    pub fn new(search_path: Vec<PathBuf>, extension: impl Into<String>) -> Self {
        SourceResolver {
            search_path,
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &ImportConfig) -> Self {
        Self::new(config.effective_search_path(), config.extension.as_str())
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Path of the file that would be loaded for `name`, if any.
    pub fn locate(&self, name: &ModuleName) -> Option<PathBuf> {
        if name.validate().is_err() {
            return None;
        }
        for dir in &self.search_path {
            let mut base = dir.clone();
            for part in name.parts() {
                base.push(part);
            }

            let module_file = base.with_extension(&self.extension);
            if module_file.is_file() {
                return Some(module_file);
            }

            let package_init = base.join(format!("{}.{}", PACKAGE_INIT, self.extension));
            if package_init.is_file() {
                return Some(package_init);
            }
        }
        None
    }
}

impl ModuleResolver for SourceResolver {
    fn has_module(&self, name: &ModuleName) -> bool {
        self.locate(name).is_some()
    }

    fn load(&self, name: &ModuleName, ctx: &mut EvalContext) -> Result<Rc<ModuleObject>, ModuleError> {
        let path = self
            .locate(name)
            .ok_or_else(|| ModuleError::ModuleNotFound(name.to_string()))?;
        debug!(module = %name, path = %path.display(), "reading module source");

        let source = fs::read_to_string(&path).map_err(|source| ModuleError::Io {
            module: name.to_string(),
            path: path.clone(),
            source,
        })?;
        let ast = ModuleParser::parse_to_ast_from_str(&source).map_err(|e| ModuleError::Syntax {
            module: name.to_string(),
            message: e.to_string(),
        })?;

        let module = Rc::new(ModuleObject::with_file(name, &path));
        if path.file_stem().map_or(false, |stem| stem == PACKAGE_INIT) {
            module.set_attr(ATTR_PACKAGE, Value::str(name.as_str()));
        }
        execute_module(&module, &ast, ctx)?;
        Ok(module)
    }

    fn name(&self) -> &str {
        "source"
    }
}
