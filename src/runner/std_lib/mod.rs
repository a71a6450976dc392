//! Builtin functions visible to every module body.

pub mod builtins;

pub use builtins::lookup_builtin;
