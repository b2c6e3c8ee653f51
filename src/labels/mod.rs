//! Reading the label list: parsing, validation and the resulting registry.

pub mod error;
pub mod parser;
pub mod registry;
