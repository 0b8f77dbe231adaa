//! List the accumulated catalog records.

use anyhow::{Context as _, Result};

use super::ListArgs;
use crate::context::Context;

const WIDTHS: [usize; 4] = [10, 8, 64, 10];

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store();
    let records = store
        .load()
        .with_context(|| format!("Failed to load {}", store.path().display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&records);
        return Ok(());
    }

    if records.is_empty() {
        ctx.output.info("The product store is empty");
        return Ok(());
    }

    let skip = match args.limit {
        Some(limit) => records.len().saturating_sub(limit),
        None => 0,
    };

    ctx.output
        .header(&format!("{} records in {}", records.len(), store.path().display()));
    ctx.output
        .table_row(&["CODE", "TYPE", "DESCRIPTION", "WEIGHT"], &WIDTHS);
    for record in records.iter().skip(skip) {
        let code = record
            .get("B1_XCODANT")
            .map(|v| v.to_string())
            .unwrap_or_default();
        let kind = record
            .get("tipo")
            .map(|v| v.to_string())
            .unwrap_or_default();
        let description = record
            .get("B1_DESC")
            .map(|v| v.to_string())
            .unwrap_or_default();
        let weight = record
            .get("B1_PESO")
            .map(|v| v.to_string())
            .unwrap_or_default();
        ctx.output.table_row(
            &[&code, &kind, &truncate(&description, WIDTHS[2]), &weight],
            &WIDTHS,
        );
    }

    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}
