//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for all stockz operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the appropriate command function
//! - **Owns form-mode transitions** on the caller's [`ViewState`]
//! - **Re-derives** a [`Snapshot`] after every mutation, so the caller always gets
//!   fresh stats and rows for its current query and sort
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Hold session state**: The `ViewState` lives with the caller
//!
//! ## Form Flow
//!
//! ```text
//!   Add ──begin_edit(id)──▶ Edit(id)
//!    ▲                        │
//!    └── submit ok / cancel ──┤
//!        delete(id) / clear   │
//!        import               │
//!                             └── submit fails validation: stays in Edit(id)
//! ```
//!
//! ## Generic Over ItemStore
//!
//! `InventoryApi<S: ItemStore>` runs against `FileStore` in production and
//! `InMemoryStore` in tests.

use crate::commands::{self, CmdResult, Snapshot};
use crate::error::Result;
use crate::model::{Item, ItemFields};
use crate::session::{FormMode, ViewState};
use crate::store::ItemStore;
use crate::transfer::ExportFormat;

pub struct InventoryApi<S: ItemStore> {
    store: S,
}

impl<S: ItemStore> InventoryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current stats plus the filtered, sorted rows for `view`.
    pub fn snapshot(&self, view: &ViewState) -> Result<Snapshot> {
        let items = self.store.load()?;
        Ok(commands::list::snapshot(&items, view))
    }

    pub fn list_items(&self, view: &ViewState) -> Result<CmdResult> {
        commands::list::run(&self.store, view)
    }

    /// Full id for a full id or a unique id prefix.
    pub fn resolve_id(&self, needle: &str) -> Result<String> {
        commands::get::resolve_id(&self.store, needle)
    }

    pub fn get_item(&self, id: &str) -> Result<Item> {
        commands::get::find(&self.store, id)
    }

    pub fn create_item(&mut self, view: &ViewState, fields: ItemFields) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.store, fields)?;
        self.refresh(result, view)
    }

    pub fn update_item(
        &mut self,
        view: &ViewState,
        id: &str,
        fields: ItemFields,
    ) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.store, id, fields)?;
        self.refresh(result, view)
    }

    /// Switch the form to edit `id` and hand back its current fields.
    pub fn begin_edit(&self, view: &mut ViewState, id: &str) -> Result<ItemFields> {
        let item = commands::get::find(&self.store, id)?;
        view.begin_edit(id);
        Ok(ItemFields::from(&item))
    }

    pub fn cancel_edit(&self, view: &mut ViewState) {
        view.cancel_edit();
    }

    /// Create or update depending on the form mode.
    ///
    /// The mode returns to Add only when the write succeeds.
    pub fn submit(&mut self, view: &mut ViewState, fields: ItemFields) -> Result<CmdResult> {
        let result = match &view.mode {
            FormMode::Add => commands::create::run(&mut self.store, fields)?,
            FormMode::Edit(id) => {
                let id = id.clone();
                commands::update::run(&mut self.store, &id, fields)?
            }
        };
        view.cancel_edit();
        self.refresh(result, view)
    }

    pub fn delete_item(&mut self, view: &mut ViewState, id: &str) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        if view.is_editing(id) {
            view.cancel_edit();
        }
        self.refresh(result, view)
    }

    /// Remove everything. Callers confirm with the user first.
    pub fn clear_items(&mut self, view: &mut ViewState) -> Result<CmdResult> {
        let result = commands::delete::run_all(&mut self.store)?;
        view.cancel_edit();
        self.refresh(result, view)
    }

    pub fn export(&self, format: ExportFormat, with_bom: bool) -> Result<CmdResult> {
        commands::export::run(&self.store, format, with_bom)
    }

    pub fn import_json(&mut self, view: &mut ViewState, raw: &str) -> Result<CmdResult> {
        let result = commands::import::run(&mut self.store, raw)?;
        view.cancel_edit();
        self.refresh(result, view)
    }

    fn refresh(&self, result: CmdResult, view: &ViewState) -> Result<CmdResult> {
        Ok(result.with_snapshot(self.snapshot(view)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockzError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api_with(count: usize) -> InventoryApi<InMemoryStore> {
        let store = StoreFixture::new().with_items(count).build();
        InventoryApi::new(store)
    }

    fn first_id(api: &InventoryApi<InMemoryStore>) -> String {
        api.store().load().unwrap()[0].id.clone()
    }

    #[test]
    fn mutations_carry_a_fresh_snapshot() {
        let mut api = api_with(0);
        let view = ViewState::new();

        let result = api
            .create_item(
                &view,
                ItemFields::new("Cement", "CM-1")
                    .with_quantity("2")
                    .with_price("100"),
            )
            .unwrap();

        let snap = result.snapshot.unwrap();
        assert_eq!(snap.items.len(), 1);
        assert_eq!(snap.report.stats.total_items, 1);
        assert_eq!(snap.report.stats.total_value, 200.0);
    }

    #[test]
    fn snapshot_respects_the_view_query() {
        let mut api = api_with(3);
        let view = ViewState::new().with_query("item 2");
        let fields = ItemFields::new("Other", "O");
        let result = api.create_item(&view, fields).unwrap();
        let snap = result.snapshot.unwrap();
        assert_eq!(snap.items.len(), 1);
        assert_eq!(snap.report.stats.total_items, 4);
    }

    #[test]
    fn begin_edit_prefills_and_switches_mode() {
        let api = api_with(2);
        let id = first_id(&api);
        let mut view = ViewState::new();

        let fields = api.begin_edit(&mut view, &id).unwrap();
        assert_eq!(fields.name, "Item 1");
        assert_eq!(view.mode, FormMode::Edit(id));
    }

    #[test]
    fn begin_edit_unknown_id_keeps_mode() {
        let api = api_with(1);
        let mut view = ViewState::new();
        let err = api.begin_edit(&mut view, "nope").unwrap_err();
        assert!(matches!(err, StockzError::ItemNotFound(_)));
        assert_eq!(view.mode, FormMode::Add);
    }

    #[test]
    fn submit_in_add_mode_creates() {
        let mut api = api_with(1);
        let mut view = ViewState::new();
        api.submit(&mut view, ItemFields::new("New", "N")).unwrap();
        assert_eq!(api.store().load().unwrap().len(), 2);
        assert_eq!(view.mode, FormMode::Add);
    }

    #[test]
    fn submit_in_edit_mode_updates_and_returns_to_add() {
        let mut api = api_with(2);
        let id = first_id(&api);
        let mut view = ViewState::new();
        let mut fields = api.begin_edit(&mut view, &id).unwrap();
        fields.name = "Renamed".to_string();

        let result = api.submit(&mut view, fields).unwrap();

        assert_eq!(result.affected_items[0].id, id);
        assert_eq!(api.get_item(&id).unwrap().name, "Renamed");
        assert_eq!(api.store().load().unwrap().len(), 2);
        assert_eq!(view.mode, FormMode::Add);
    }

    #[test]
    fn failed_submit_keeps_edit_mode() {
        let mut api = api_with(1);
        let id = first_id(&api);
        let mut view = ViewState::new();
        api.begin_edit(&mut view, &id).unwrap();

        let fields = ItemFields::new("", "x");
        let err = api.submit(&mut view, fields).unwrap_err();
        assert!(matches!(err, StockzError::Validation(_)));
        assert!(view.is_editing(&id));
    }

    #[test]
    fn cancel_edit_returns_to_add() {
        let api = api_with(1);
        let id = first_id(&api);
        let mut view = ViewState::new();
        api.begin_edit(&mut view, &id).unwrap();
        api.cancel_edit(&mut view);
        assert_eq!(view.mode, FormMode::Add);
    }

    #[test]
    fn deleting_the_edited_item_resets_mode() {
        let mut api = api_with(2);
        let id = first_id(&api);
        let mut view = ViewState::new();
        api.begin_edit(&mut view, &id).unwrap();

        api.delete_item(&mut view, &id).unwrap();
        assert_eq!(view.mode, FormMode::Add);
    }

    #[test]
    fn deleting_another_item_keeps_mode() {
        let mut api = api_with(2);
        let items = api.store().load().unwrap();
        let mut view = ViewState::new();
        api.begin_edit(&mut view, &items[0].id).unwrap();

        let result = api.delete_item(&mut view, &items[1].id).unwrap();
        assert!(view.is_editing(&items[0].id));
        assert_eq!(result.snapshot.unwrap().items.len(), 1);
    }

    #[test]
    fn clear_items_empties_and_resets() {
        let mut api = api_with(3);
        let id = first_id(&api);
        let mut view = ViewState::new();
        api.begin_edit(&mut view, &id).unwrap();

        let result = api.clear_items(&mut view).unwrap();
        let snap = result.snapshot.unwrap();
        assert!(snap.items.is_empty());
        assert_eq!(snap.report.stats.total_items, 0);
        assert!(snap.report.max_value_item.is_none());
        assert_eq!(view.mode, FormMode::Add);
    }

    #[test]
    fn import_resets_mode_and_replaces() {
        let mut api = api_with(2);
        let id = first_id(&api);
        let mut view = ViewState::new();
        api.begin_edit(&mut view, &id).unwrap();

        let result = api
            .import_json(&mut view, r#"[{"id": "z", "name": "Z", "code": "z"}]"#)
            .unwrap();
        assert_eq!(result.snapshot.unwrap().items[0].id, "z");
        assert_eq!(view.mode, FormMode::Add);
    }

    #[test]
    fn failed_import_keeps_everything() {
        let mut api = api_with(2);
        let id = first_id(&api);
        let mut view = ViewState::new();
        api.begin_edit(&mut view, &id).unwrap();

        assert!(api.import_json(&mut view, "{}").is_err());
        assert!(view.is_editing(&id));
        assert_eq!(api.store().load().unwrap().len(), 2);
    }

    #[test]
    fn resolve_id_accepts_prefix() {
        let api = api_with(1);
        let id = first_id(&api);
        assert_eq!(api.resolve_id(&id[..8]).unwrap(), id);
    }

    #[test]
    fn export_dispatches() {
        let api = api_with(1);
        let result = api.export(ExportFormat::Json, false).unwrap();
        assert_eq!(result.export.unwrap().file_name, "inventory.json");
    }
}
