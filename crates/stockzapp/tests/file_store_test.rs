use stockzapp::api::InventoryApi;
use stockzapp::model::ItemFields;
use stockzapp::session::ViewState;
use stockzapp::store::fs::FileStore;
use stockzapp::store::ItemStore;
use stockzapp::transfer::ExportFormat;
use tempfile::TempDir;

#[test]
fn test_api_over_file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("nested").join("data");
    let mut view = ViewState::new();

    {
        let mut api = InventoryApi::new(FileStore::in_dir(&data));
        api.submit(
            &mut view,
            ItemFields::new("Cement", "CM-1")
                .with_quantity("20")
                .with_price("150000"),
        )
        .unwrap();
        api.submit(
            &mut view,
            ItemFields::new("Rebar", "RB-2").with_quantity("50"),
        )
        .unwrap();
    }

    let api = InventoryApi::new(FileStore::in_dir(&data));
    let snap = api.snapshot(&view).unwrap();
    assert_eq!(snap.items.len(), 2);
    assert_eq!(snap.items[0].name, "Cement");
    assert_eq!(snap.report.stats.total_quantity, 70.0);
    assert_eq!(snap.report.stats.total_value, 3_000_000.0);
}

#[test]
fn test_no_temp_files_left_behind() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::in_dir(dir.path());
    let mut api_view = ViewState::new();
    let mut api = InventoryApi::new(FileStore::in_dir(dir.path()));

    for i in 0..5 {
        api.submit(&mut api_view, ItemFields::new(format!("Item {}", i), "c"))
            .unwrap();
    }
    let items = store.load().unwrap();
    store.save(&items).unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["inventory.json"]);
}

#[test]
fn test_import_export_through_files() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let mut view = ViewState::new();

    let mut api = InventoryApi::new(FileStore::in_dir(source.path()));
    api.submit(
        &mut view,
        ItemFields::new("Bolt \"M8\"", "BT-3").with_category("Hardware"),
    )
    .unwrap();
    let exported = api
        .export(ExportFormat::Json, false)
        .unwrap()
        .export
        .unwrap();

    let mut other = InventoryApi::new(FileStore::in_dir(target.path()));
    other.import_json(&mut view, &exported.content).unwrap();

    let original = api.store().load().unwrap();
    let imported = other.store().load().unwrap();
    assert_eq!(original, imported);
}

#[test]
fn test_corrupt_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(path, "{ not json").unwrap();

    let api = InventoryApi::new(FileStore::in_dir(dir.path()));
    let err = api.snapshot(&ViewState::new()).unwrap_err();
    assert!(matches!(
        err,
        stockzapp::error::StockzError::Serialization(_)
    ));
}
