use crate::commands::{CmdMessage, CmdResult, ExportPayload};
use crate::error::Result;
use crate::store::ItemStore;
use crate::transfer::{self, ExportFormat};

/// Encode the whole inventory. Writing the payload anywhere is up to the caller.
pub fn run<S: ItemStore>(store: &S, format: ExportFormat, with_bom: bool) -> Result<CmdResult> {
    let items = store.load()?;

    let content = match format {
        ExportFormat::Csv => transfer::to_csv(&items, with_bom)?,
        ExportFormat::Json => transfer::to_json(&items)?,
    };

    tracing::debug!(%format, count = items.len(), "inventory encoded");

    let payload = ExportPayload {
        format,
        file_name: format.file_name().to_string(),
        content,
        item_count: items.len(),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} items as {}",
        payload.item_count, format
    )));
    Ok(result.with_export(payload))
}
