use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure a module load or a module-level operation can produce.
///
/// The lazy layer never wraps these: a failure seen through a proxy is the
/// same value the importer or the module itself produced.
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("No module named '{0}'")]
    ModuleNotFound(String),

    #[error("Invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    #[error("Failed to read module '{module}' from {}: {source}", path.display())]
    Io {
        module: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Syntax error in module '{module}': {message}")]
    Syntax { module: String, message: String },

    #[error("Module '{module}' failed to initialize: {message}")]
    Init { module: String, message: String },

    #[error("{owner} has no attribute '{attr}'")]
    Attribute { owner: String, attr: String },

    #[error("name '{0}' is not defined")]
    Name(String),

    #[error("{0}")]
    Type(String),

    #[error("maximum recursion depth exceeded while calling {0}()")]
    Recursion(String),

    #[error("cannot import '{0}' while it is still being imported (circular import)")]
    CircularImport(String),
}

impl ModuleError {
    pub fn attribute(owner: impl Into<String>, attr: impl Into<String>) -> Self {
        ModuleError::Attribute {
            owner: owner.into(),
            attr: attr.into(),
        }
    }

    /// True for failures raised while resolving or loading a module.
    pub fn is_import_error(&self) -> bool {
        matches!(
            self,
            ModuleError::ModuleNotFound(_)
                | ModuleError::InvalidModuleName { .. }
                | ModuleError::Io { .. }
                | ModuleError::Syntax { .. }
                | ModuleError::Init { .. }
                | ModuleError::CircularImport(_)
        )
    }

    pub fn is_attribute_error(&self) -> bool {
        matches!(self, ModuleError::Attribute { .. })
    }
}
