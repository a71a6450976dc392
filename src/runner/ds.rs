pub mod class_object;
pub mod error;
pub mod function_object;
pub mod module_name;
pub mod module_object;
pub mod value;
