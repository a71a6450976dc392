//! Name-based attribute lookup shared by modules, proxies and values.

use crate::runner::ds::error::ModuleError;
use crate::runner::ds::value::Value;

/// Anything attributes can be read from by name.
pub trait AttributeSource {
    /// Look up `name`, failing with `ModuleError::Attribute` when absent.
    fn get_attr(&self, name: &str) -> Result<Value, ModuleError>;

    /// Does `name` resolve? Any error counts as "no".
    fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_ok()
    }
}
