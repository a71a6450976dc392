use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::runner::ds::class_object::{ClassObject, InstanceObject};
use crate::runner::ds::error::ModuleError;
use crate::runner::ds::function_object::FunctionObject;
use crate::runner::ds::module_object::ModuleObject;
use crate::runner::eval::function::call_function;
use crate::runner::lazy::attribute::AttributeSource;
use crate::runner::plugin::types::EvalContext;

pub const TYPE_STR_NONE: &str = "NoneType";
pub const TYPE_STR_BOOL: &str = "bool";
pub const TYPE_STR_INT: &str = "int";
pub const TYPE_STR_FLOAT: &str = "float";
pub const TYPE_STR_STR: &str = "str";
pub const TYPE_STR_FUNCTION: &str = "function";
pub const TYPE_STR_CLASS: &str = "type";
pub const TYPE_STR_METHOD: &str = "method";
pub const TYPE_STR_MODULE: &str = "module";

pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Function(Rc<FunctionObject>),
    Class(Rc<ClassObject>),
    Instance(Rc<InstanceObject>),
    BoundMethod {
        receiver: Rc<InstanceObject>,
        function: Rc<FunctionObject>,
    },
    Module(Rc<ModuleObject>),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Name of the runtime type, as used in error messages.
    pub fn type_name(&self) -> &str {
        match self {
            Value::None => TYPE_STR_NONE,
            Value::Bool(_) => TYPE_STR_BOOL,
            Value::Int(_) => TYPE_STR_INT,
            Value::Float(_) => TYPE_STR_FLOAT,
            Value::Str(_) => TYPE_STR_STR,
            Value::Function(_) => TYPE_STR_FUNCTION,
            Value::Class(_) => TYPE_STR_CLASS,
            Value::Instance(i) => i.class().name(),
            Value::BoundMethod { .. } => TYPE_STR_METHOD,
            Value::Module(_) => TYPE_STR_MODULE,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(
            self,
            Value::Function(_) | Value::Class(_) | Value::BoundMethod { .. }
        )
    }

    pub fn as_module(&self) -> Option<&Rc<ModuleObject>> {
        match self {
            Value::Module(m) => Some(m),
            _ => None,
        }
    }

    /// Invoke a callable value.
    ///
    /// Classes are instantiated, bound methods receive their instance as
    /// the first argument.
    pub fn call(&self, ctx: &mut EvalContext, args: Vec<Value>) -> Result<Value, ModuleError> {
        match self {
            Value::Function(f) => call_function(f, ctx, args),
            Value::BoundMethod { receiver, function } => {
                let mut full_args = Vec::with_capacity(args.len() + 1);
                full_args.push(Value::Instance(receiver.clone()));
                full_args.extend(args);
                call_function(function, ctx, full_args)
            }
            Value::Class(c) => ClassObject::instantiate(c, ctx, args),
            _ => Err(ModuleError::Type(format!(
                "'{}' object is not callable",
                self.type_name()
            ))),
        }
    }

    /// Look up `name` on this value and call it.
    pub fn call_method(
        &self,
        ctx: &mut EvalContext,
        name: &str,
        args: Vec<Value>,
    ) -> Result<Value, ModuleError> {
        self.get_attr(name)?.call(ctx, args)
    }
}

impl AttributeSource for Value {
    fn get_attr(&self, name: &str) -> Result<Value, ModuleError> {
        match self {
            Value::Module(m) => m.get_attr(name),
            Value::Instance(i) => InstanceObject::get_attr(i, name),
            Value::Class(c) => c
                .get_class_attr(name)
                .ok_or_else(|| ModuleError::attribute(format!("type object '{}'", c.name()), name)),
            _ => Err(ModuleError::attribute(
                format!("'{}' object", self.type_name()),
                name,
            )),
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::None => Value::None,
            Value::Bool(b) => Value::Bool(*b),
            Value::Int(i) => Value::Int(*i),
            Value::Float(f) => Value::Float(*f),
            Value::Str(s) => Value::Str(s.to_string()),
            Value::Function(f) => Value::Function(f.clone()),
            Value::Class(c) => Value::Class(c.clone()),
            Value::Instance(i) => Value::Instance(i.clone()),
            Value::BoundMethod { receiver, function } => Value::BoundMethod {
                receiver: receiver.clone(),
                function: function.clone(),
            },
            Value::Module(m) => Value::Module(m.clone()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(n) => write!(f, "{:?}", n),
            Value::Str(s) => write!(f, "'{}'", s),
            Value::Function(func) => write!(f, "<function {}>", func.qualified_name()),
            Value::Class(c) => write!(f, "<class '{}.{}'>", c.module(), c.name()),
            Value::Instance(i) => {
                write!(f, "<{}.{} object>", i.class().module(), i.class().name())
            }
            Value::BoundMethod { function, .. } => {
                write!(f, "<bound method {}>", function.qualified_name())
            }
            Value::Module(m) => write!(f, "<module '{}'>", m.name()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "Value::None"),
            Value::Bool(b) => write!(f, "Value::Bool({})", b),
            Value::Int(i) => write!(f, "Value::Int({})", i),
            Value::Float(n) => write!(f, "Value::Float({:?})", n),
            Value::Str(s) => write!(f, "Value::Str({:?})", s),
            Value::Function(func) => write!(f, "Value::Function({})", func.qualified_name()),
            Value::Class(c) => write!(f, "Value::Class({})", c.name()),
            Value::Instance(i) => write!(f, "Value::Instance({})", i.class().name()),
            Value::BoundMethod { function, .. } => {
                write!(f, "Value::BoundMethod({})", function.qualified_name())
            }
            Value::Module(m) => write!(f, "Value::Module({})", m.name()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                int_equals_float(*a, *b)
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Rc::ptr_eq(a, b),
            (
                Value::BoundMethod {
                    receiver: ra,
                    function: fa,
                },
                Value::BoundMethod {
                    receiver: rb,
                    function: fb,
                },
            ) => Rc::ptr_eq(ra, rb) && Rc::ptr_eq(fa, fb),
            (Value::Module(a), Value::Module(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Exact comparison: the float must be integral and convert to `i` without rounding.
fn int_equals_float(i: i64, f: f64) -> bool {
    // 2^63, the first float past i64::MAX.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && f >= -LIMIT && f < LIMIT && f as i64 == i
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
