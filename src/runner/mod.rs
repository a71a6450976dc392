pub mod ds;
pub mod eval;
pub mod lazy;
pub mod plugin;
pub mod std_lib;
