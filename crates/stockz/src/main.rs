//! # Stockz CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/stockzapp/`: UI-agnostic inventory library (store, stats, view, transfer)
//! - `crates/stockz/`: this terminal client
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/stockz/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Tables, colors, JSON output (print.rs)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/stockzapp/src/api.rs)                    │
//! │  - Form-mode transitions on a ViewState                     │
//! │  - Returns CmdResult values carrying fresh Snapshots        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI owns argument parsing,
//! context initialization, confirmation prompts, file output and rendering.
//!
//! ## Testing Approach
//!
//! Business logic is tested in the library. This crate has unit tests for parsing
//! and formatting helpers, and end-to-end tests in `tests/` that drive the binary
//! against a temporary data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
