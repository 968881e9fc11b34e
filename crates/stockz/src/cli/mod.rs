//! # CLI Behavior
//!
//! This is **one possible UI client** for stockz, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## Naked Execution
//!
//! Running `stockz` with no arguments is `stockz list`.
//!
//! ## Ids
//!
//! Tables show the first 8 characters of each id. Every command that takes an id
//! also accepts any unambiguous prefix.
//!
//! ## One Invocation, One Session
//!
//! Each run builds a fresh `ViewState`. `edit` walks the same form flow a
//! graphical client would: begin editing, overlay the given flags on the current
//! values, submit.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context setup and per-command handlers
//! - `print`: Tables, number formatting, colored messages, JSON output

mod commands;
mod print;
pub mod setup;

pub use commands::run;
