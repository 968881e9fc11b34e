//! Per-session presentation state.
//!
//! A `ViewState` belongs to whoever renders the inventory (a CLI invocation, a
//! form on a page). It is passed by reference into the API; the library keeps no
//! state of its own between calls.

use crate::view::{SortConfig, SortField};
use serde::{Deserialize, Serialize};

/// What a submit does: add a new item, or update the one being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    #[default]
    Add,
    Edit(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub mode: FormMode,
    pub sort: SortConfig,
    pub query: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_sort(mut self, sort: SortConfig) -> Self {
        self.sort = sort;
        self
    }

    pub fn begin_edit(&mut self, id: impl Into<String>) {
        self.mode = FormMode::Edit(id.into());
    }

    pub fn cancel_edit(&mut self) {
        self.mode = FormMode::Add;
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Edit(id) => Some(id.as_str()),
            FormMode::Add => None,
        }
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
}
