use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::new_id;
use crate::store::ItemStore;
use crate::transfer;
use std::collections::HashSet;

/// Replace the inventory with the items in a JSON document.
///
/// The document is fully decoded before anything is written, so a rejected
/// document leaves the store as it was. Records with a blank or repeated id get
/// a fresh one.
pub fn run<S: ItemStore>(store: &mut S, raw: &str) -> Result<CmdResult> {
    let mut items = transfer::parse_json(raw)?;

    let mut seen = HashSet::new();
    let mut reassigned = 0;
    for item in items.iter_mut() {
        if item.id.trim().is_empty() || !seen.insert(item.id.clone()) {
            item.id = new_id();
            seen.insert(item.id.clone());
            reassigned += 1;
        }
    }

    store.save(&items)?;
    tracing::info!(count = items.len(), reassigned, "inventory imported");

    let mut result = CmdResult::default();
    if reassigned > 0 {
        result.add_message(CmdMessage::info(format!(
            "Assigned new ids to {} items",
            reassigned
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Imported {} items",
        items.len()
    )));
    Ok(result.with_affected_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::StockzError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn replaces_collection_wholesale() {
        let mut store = StoreFixture::new().with_items(3).build();
        let raw = r#"[
            {"id": "a", "name": "Cement", "code": "CM-1", "quantity": "20", "price": "150000"},
            {"id": "b", "name": "Rebar", "code": "RB-2", "quantity": 50, "price": 230000}
        ]"#;

        let result = run(&mut store, raw).unwrap();
        assert_eq!(result.affected_items.len(), 2);

        let items = store.load().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "a");
        assert_eq!(items[1].quantity, "50");
        assert_eq!(items[1].price, "230000");
        assert_eq!(items[1].location, "");
    }

    #[test]
    fn empty_array_clears() {
        let mut store = StoreFixture::new().with_items(2).build();
        run(&mut store, "[]").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn non_array_leaves_store_untouched() {
        let mut store = StoreFixture::new().with_items(2).build();
        let before = store.load().unwrap();

        let err = run(&mut store, r#"{"id": "x"}"#).unwrap_err();
        assert!(matches!(err, StockzError::InvalidFormat(_)));
        assert_eq!(store.load().unwrap(), before);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn unparseable_text_is_invalid_json() {
        let mut store = StoreFixture::new().with_items(1).build();
        let err = run(&mut store, "not json").unwrap_err();
        assert!(matches!(err, StockzError::InvalidJson(_)));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn missing_and_duplicate_ids_are_reassigned() {
        let mut store = StoreFixture::new().build();
        let raw = r#"[
            {"name": "A", "code": "a"},
            {"id": "dup", "name": "B", "code": "b"},
            {"id": "dup", "name": "C", "code": "c"}
        ]"#;

        let result = run(&mut store, raw).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Info));

        let items = store.load().unwrap();
        let ids: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), 3);
        assert!(items.iter().all(|i| !i.id.is_empty()));
        assert_eq!(items[1].id, "dup");
        assert_ne!(items[2].id, "dup");
    }

    #[test]
    fn write_failure_propagates() {
        let mut store = StoreFixture::new().build();
        store.set_simulate_write_error(true);
        assert!(matches!(
            run(&mut store, "[]"),
            Err(StockzError::Store(_))
        ));
    }
}
