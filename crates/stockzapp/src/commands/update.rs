use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemFields;
use crate::store::ItemStore;

/// Replace every field of the item with `id`, keeping the id.
///
/// An unknown id is not an error: nothing is written and the result carries a
/// warning instead of an affected item.
pub fn run<S: ItemStore>(store: &mut S, id: &str, fields: ItemFields) -> Result<CmdResult> {
    fields.validate()?;

    let mut items = store.load()?;
    let mut result = CmdResult::default();

    let Some(item) = items.iter_mut().find(|item| item.id == id) else {
        tracing::warn!(id, "update ignored, no such item");
        result.add_message(CmdMessage::warning(format!(
            "No item with id {}, nothing updated",
            id
        )));
        return Ok(result);
    };

    item.apply(fields);
    let updated = item.clone();
    store.save(&items)?;

    tracing::info!(id, name = %updated.name, "item updated");
    result.add_message(CmdMessage::success(format!(
        "Item updated: {} ({})",
        updated.name, updated.code
    )));
    Ok(result.with_affected_items(vec![updated]))
}
