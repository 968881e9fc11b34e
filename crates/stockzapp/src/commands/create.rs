use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Item, ItemFields};
use crate::store::ItemStore;

pub fn run<S: ItemStore>(store: &mut S, fields: ItemFields) -> Result<CmdResult> {
    fields.validate()?;

    let mut items = store.load()?;
    let item = Item::new(fields);
    items.push(item.clone());
    store.save(&items)?;

    tracing::info!(id = %item.id, name = %item.name, "item created");

    let mut result = CmdResult::default().with_affected_items(vec![item.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Item created: {} ({})",
        item.name, item.code
    )));
    Ok(result)
}
