//! # Stockz Architecture
//!
//! Stockz is a **UI-agnostic inventory library**. The terminal client in `crates/stockz`
//! is one possible presentation layer; the same core could sit behind a web form or a
//! REST service without changes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (crates/stockz, or any other client)          │
//! │  - Owns a ViewState, renders Snapshots, prints messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Applies form-mode transitions on the caller's ViewState  │
//! │  - Re-derives a Snapshot after every mutation               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / update / delete / clear / import / export       │
//! │  - Load, mutate, persist. No terminal I/O.                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ItemStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Alongside the command layer sit the pure engines that never touch storage:
//!
//! - [`stats`]: totals, per-category summary, highest-value item
//! - [`view`]: free-text filter and single-key sort
//! - [`transfer`]: CSV / JSON encoding and JSON import parsing
//!
//! ## Numbers Are Strings
//!
//! Quantities and prices are kept exactly as the user typed them. Arithmetic goes
//! through [`model::parse_number`], which degrades anything malformed to zero instead
//! of failing. A stray letter in a price never blocks a listing or an export.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each mutating/transfer operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Item`, `ItemFields`, lenient number parsing
//! - [`session`]: `ViewState` (form mode, sort, search query)
//! - [`config`]: Configuration
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod session;
pub mod stats;
pub mod store;
pub mod transfer;
pub mod view;

#[cfg(test)]
pub mod test_utils;
