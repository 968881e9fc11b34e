//! # Command Layer
//!
//! This module contains the **core business logic** of stockz. Each command lives in
//! its own submodule and is a plain function over an [`ItemStore`](crate::store::ItemStore).
//!
//! ## Role and Responsibilities
//!
//! - Load the item list, apply the operation, persist it (for mutations)
//! - Return a structured [`CmdResult`] with affected items and messages
//! - Stay completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr, or prompts
//! - **Form-mode bookkeeping**: that belongs to the API, which owns the
//!   `ViewState` transitions
//! - **Confirmation**: `delete::run_all` empties the store unconditionally; asking
//!   "are you sure?" is the caller's job
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `affected_items`: items created, updated, removed or imported
//! - `snapshot`: the derived report plus visible rows (attached by the API after
//!   every mutation, or produced by [`list`])
//! - `export`: encoded payload for [`export`]
//! - `messages`: leveled messages (info, success, warning, error)
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and check both the returned result and what was persisted.
//!
//! ## Command Modules
//!
//! - [`create`]: Add an item
//! - [`update`]: Replace an item's fields by id
//! - [`delete`]: Remove one item, or all of them
//! - [`get`]: Look up one item by id
//! - [`list`]: Build a [`Snapshot`] for a `ViewState`
//! - [`export`]: Encode the inventory as CSV or JSON
//! - [`import`]: Replace the inventory from a JSON document

use crate::model::Item;
use crate::stats::InventoryReport;
use crate::transfer::ExportFormat;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod import;
pub mod list;
pub mod update;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Derived state for one render: report over the whole inventory, plus the rows
/// left after filtering and sorting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    pub report: InventoryReport,
    pub items: Vec<Item>,
}

/// Encoded export, ready to be written wherever the caller wants.
#[derive(Debug, Clone, Serialize)]
pub struct ExportPayload {
    pub format: ExportFormat,
    pub file_name: String,
    pub content: String,
    pub item_count: usize,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Snapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportPayload>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn with_export(mut self, payload: ExportPayload) -> Self {
        self.export = Some(payload);
        self
    }
}
