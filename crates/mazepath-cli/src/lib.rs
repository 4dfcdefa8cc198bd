//! Mazepath CLI library.
//!
//! Terminal styling and output formatting shared by the `mazepath-cli`
//! subcommands.

pub mod output;
pub mod terminal;
