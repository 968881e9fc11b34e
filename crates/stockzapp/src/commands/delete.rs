use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ItemStore;

/// Remove the item with `id`. Absent ids are ignored.
pub fn run<S: ItemStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut items = store.load()?;
    let mut result = CmdResult::default();

    let Some(pos) = items.iter().position(|item| item.id == id) else {
        tracing::debug!(id, "delete ignored, no such item");
        result.add_message(CmdMessage::info(format!("No item with id {}", id)));
        return Ok(result);
    };

    let removed = items.remove(pos);
    store.save(&items)?;

    tracing::info!(id, name = %removed.name, "item deleted");
    result.add_message(CmdMessage::success(format!(
        "Item deleted: {} ({})",
        removed.name, removed.code
    )));
    Ok(result.with_affected_items(vec![removed]))
}

/// Empty the inventory. Confirmation is the caller's responsibility.
pub fn run_all<S: ItemStore>(store: &mut S) -> Result<CmdResult> {
    let removed = store.load()?;
    store.save(&[])?;

    tracing::info!(count = removed.len(), "inventory cleared");
    let mut result = CmdResult::default();
    let message = format!("Removed {} items", removed.len());
    result.add_message(CmdMessage::success(message));
    Ok(result.with_affected_items(removed))
}
