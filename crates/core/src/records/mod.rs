//! Raw financial records.
//!
//! These are the inputs to report computation: income sources, expenses,
//! assets, loans, and goals as the user recorded them. Validation of
//! incoming data happens at the persistence boundary; the types here
//! assume well-formed records.

pub mod types;

#[cfg(test)]
mod tests;

pub use types::*;
