//! Concrete providers and the compiled-in registration table.

pub mod builtin;
pub mod console;
pub mod in_memory;
