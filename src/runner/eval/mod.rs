//! Evaluation of module bodies and script functions.
//!
//! Module bodies run once, top to bottom, writing each definition into the
//! module's attribute table. Function bodies are single expressions
//! evaluated against their parameters and the defining module's globals.

pub mod types;
pub mod expression;
pub mod statement;
pub mod function;

pub use types::{Scope, ValueResult};
