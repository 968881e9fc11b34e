use crate::commands::{CmdResult, Snapshot};
use crate::error::Result;
use crate::model::Item;
use crate::session::ViewState;
use crate::stats;
use crate::store::ItemStore;
use crate::view::{filter_items, sort_items};

/// Derive, filter, sort.
///
/// The report always covers the whole inventory; only the rows are narrowed by
/// the query.
pub fn snapshot(items: &[Item], view: &ViewState) -> Snapshot {
    let report = stats::report(items);
    let visible = filter_items(items, &view.query);
    let rows = sort_items(&visible, &view.sort);
    Snapshot {
        report,
        items: rows,
    }
}

pub fn run<S: ItemStore>(store: &S, view: &ViewState) -> Result<CmdResult> {
    let items = store.load()?;
    Ok(CmdResult::default().with_snapshot(snapshot(&items, view)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemFields;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::view::{SortConfig, SortDirection, SortField};

    fn store() -> crate::store::memory::InMemoryStore {
        StoreFixture::new()
            .with_item(
                ItemFields::new("Cement", "CM-1")
                    .with_quantity("20")
                    .with_price("150")
                    .with_category("Building"),
            )
            .with_item(
                ItemFields::new("Rebar", "RB-2")
                    .with_quantity("50")
                    .with_price("230")
                    .with_category("Building"),
            )
            .with_item(
                ItemFields::new("Screw", "SC-3")
                    .with_quantity("200")
                    .with_price("2")
                    .with_category("Hardware"),
            )
            .build()
    }

    #[test]
    fn default_view_lists_everything_in_order() {
        let result = run(&store(), &ViewState::new()).unwrap();
        let snap = result.snapshot.unwrap();
        let names: Vec<_> = snap.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Cement", "Rebar", "Screw"]);
        assert_eq!(snap.report.stats.total_items, 3);
        assert_eq!(snap.report.stats.total_value, 3000.0 + 11500.0 + 400.0);
    }

    #[test]
    fn query_narrows_rows_but_not_report() {
        let view = ViewState::new().with_query("hardware");
        let snap = run(&store(), &view).unwrap().snapshot.unwrap();
        assert_eq!(snap.items.len(), 1);
        assert_eq!(snap.items[0].name, "Screw");
        assert_eq!(snap.report.stats.total_items, 3);
        assert_eq!(snap.report.categories.len(), 2);
    }

    #[test]
    fn filter_then_sort() {
        let view = ViewState::new()
            .with_query("building")
            .with_sort(SortConfig::by(SortField::Value, SortDirection::Desc));
        let snap = run(&store(), &view).unwrap().snapshot.unwrap();
        let names: Vec<_> = snap.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Rebar", "Cement"]);
        assert_eq!(snap.report.max_value_item.unwrap().name, "Rebar");
    }
}
