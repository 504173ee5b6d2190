//! # CLI Behavior
//!
//! This is **one possible UI client** for taskline, not the application itself. The CLI
//! is the only place that knows about terminal I/O, exit codes and output formatting.
//!
//! ### Naked Execution (`tl`)
//!
//! Running `tl` with no arguments shows the board view, the same as `tl list` without
//! filters.
//!
//! ### Identifier Arguments
//!
//! Commands that target items take one identifier expression (`tl check 2,3-4`). Extra
//! positional words are joined with commas, so `tl check 2 3-4` means the same thing.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Output formatting into strings
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
