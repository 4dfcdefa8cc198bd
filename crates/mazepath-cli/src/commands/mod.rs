// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and
// dispatches here.

pub mod generate;
pub mod matrix;
pub mod solve;
pub mod source;
