//! Core types for the module loading architecture.

use std::collections::HashMap;
use std::rc::Rc;

use crate::runner::ds::error::ModuleError;
use crate::runner::ds::module_object::ModuleObject;
use crate::runner::ds::value::Value;

/// Nesting limit for script function calls.
pub const MAX_CALL_DEPTH: usize = 100;

/// Execution context passed to module bodies and native functions.
pub struct EvalContext {
    /// Lines written by `print` while running module code.
    pub output: Vec<String>,
    /// Script calls currently in progress.
    depth: usize,
}

impl EvalContext {
    pub fn new() -> Self {
        EvalContext {
            output: Vec::new(),
            depth: 0,
        }
    }

    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Account for one more nested script call. Every successful call must
    /// be paired with `exit_call`.
    pub fn enter_call(&mut self, function: &str) -> Result<(), ModuleError> {
        if self.depth >= MAX_CALL_DEPTH {
            return Err(ModuleError::Recursion(function.to_string()));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn exit_call(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Function signature for natively implemented module functions.
pub type NativeFn = fn(ctx: &mut EvalContext, args: Vec<Value>) -> Result<Value, ModuleError>;

/// Embedder-supplied function. Shared, since one definition backs every load.
pub type PluginFn = Rc<dyn Fn(&mut EvalContext, Vec<Value>) -> Result<Value, ModuleError>>;

/// Runs once per execution of a native module body, after its exports are set.
pub type ModuleInitFn = Rc<dyn Fn(&ModuleObject, &mut EvalContext) -> Result<(), ModuleError>>;

/// A function export of a native module.
#[derive(Clone)]
pub enum NativeExport {
    Native(NativeFn),
    Plugin(PluginFn),
}

/// Definition of a module implemented in Rust.
///
/// Nothing here is materialized until the module is imported; the
/// definition is only a recipe for building a `ModuleObject`.
pub struct NativeModule {
    /// Dotted name the module is importable under.
    pub name: String,

    /// Module docstring, exposed as `__doc__`.
    pub doc: Option<String>,

    /// Constant exports.
    pub constants: HashMap<String, Value>,

    /// Function exports.
    pub functions: HashMap<String, NativeExport>,

    /// Hook run when the module body executes.
    pub initializer: Option<ModuleInitFn>,
}

impl NativeModule {
    pub fn new(name: impl Into<String>) -> Self {
        NativeModule {
            name: name.into(),
            doc: None,
            constants: HashMap::new(),
            functions: HashMap::new(),
            initializer: None,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a constant export.
    pub fn add_constant(mut self, name: impl Into<String>, value: Value) -> Self {
        self.constants.insert(name.into(), value);
        self
    }

    /// Add a native function export.
    pub fn add_function(mut self, name: impl Into<String>, func: NativeFn) -> Self {
        self.functions.insert(name.into(), NativeExport::Native(func));
        self
    }

    /// Add a closure export.
    pub fn add_plugin_function<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut EvalContext, Vec<Value>) -> Result<Value, ModuleError> + 'static,
    {
        self.functions
            .insert(name.into(), NativeExport::Plugin(Rc::new(func)));
        self
    }

    /// Set the hook run every time the module body executes.
    pub fn with_initializer<F>(mut self, init: F) -> Self
    where
        F: Fn(&ModuleObject, &mut EvalContext) -> Result<(), ModuleError> + 'static,
    {
        self.initializer = Some(Rc::new(init));
        self
    }
}
