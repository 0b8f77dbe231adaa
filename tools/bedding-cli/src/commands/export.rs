//! Export the store as delimited text.

use anyhow::{Context as _, Result};

use bedding_catalog::record::EXPORT_COLUMNS;

use super::ExportArgs;
use crate::context::Context;

/// Run the export command.
pub async fn run(args: ExportArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store();
    ctx.output
        .debug(&format!("Loading store from {}", store.path().display()));
    let records = store
        .load()
        .with_context(|| format!("Failed to load {}", store.path().display()))?;

    if records.is_empty() {
        ctx.output.info("The product store is empty, nothing to export");
        return Ok(());
    }

    let output_path = ctx.resolve_path(args.output.as_deref().unwrap_or(&ctx.config.export.path));

    // Config may override the canonical ERP column order.
    let configured = &ctx.config.export.columns;
    let columns: Vec<&str> = if configured.is_empty() {
        EXPORT_COLUMNS.to_vec()
    } else {
        configured.iter().map(String::as_str).collect()
    };

    let spinner = ctx.output.spinner("Rendering delimited text");
    let content = bedding_export::to_csv(&records, Some(&columns));
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output_path, content)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    spinner.finish_and_clear();

    ctx.output.success(&format!(
        "Exported {} records to {}",
        records.len(),
        output_path.display()
    ));

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "exported": records.len(),
            "path": output_path.display().to_string(),
        }));
    }

    Ok(())
}
