//! C source generation for the `pg_byte` lookup functions.

pub mod literal;
pub mod render;
