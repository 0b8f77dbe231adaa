//! Compose names from a form file and append records to the store.

use std::path::Path;

use anyhow::{Context as _, Result};
use dialoguer::Confirm;

use bedding_catalog::prelude::*;

use super::GenerateArgs;
use crate::context::Context;

/// Run the generate command.
pub async fn run(args: GenerateArgs, ctx: &Context) -> Result<()> {
    let input_path = ctx.resolve_path(&args.input);
    ctx.output
        .debug(&format!("Loading form from {}", input_path.display()));
    let form = load_form(&input_path)?;
    form.validate()
        .with_context(|| format!("Invalid form: {}", input_path.display()))?;

    let mattresses = compose_mattress_names(&form);
    let expansion = compose_kit_names(&form, &mattresses);
    for warning in &expansion.warnings {
        ctx.output.warn(&warning.to_string());
    }

    let total = mattresses.len() + expansion.kits.len();
    ctx.output.header(&format!(
        "{} records to generate ({} mattresses, {} kits)",
        total,
        mattresses.len(),
        expansion.kits.len()
    ));

    // Preview with the codes and barcodes the records will take.
    let mut preview = SequenceAllocator::new(form.starting_sequence);
    for mattress in &mattresses {
        let code = preview.advance();
        ctx.output.list_item(&format!(
            "{} | {} | {:.1} kg | EAN {}",
            code,
            mattress.full_name,
            mattress.weight_kg,
            ean13(code)
        ));
    }
    for kit in &expansion.kits {
        let code = preview.advance();
        ctx.output.list_item(&format!(
            "{} | {} | {:.1} kg | EAN {}",
            code,
            kit.full_name,
            kit.total_weight_kg,
            ean13(code)
        ));
    }

    if args.dry_run {
        ctx.output.info("Dry run, nothing was saved");
        return Ok(());
    }

    let store = ctx.store();
    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Append {} records to {}?",
                total,
                store.path().display()
            ))
            .default(true)
            .interact()?;
        if !confirmed {
            ctx.output.info("Aborted, nothing was saved");
            return Ok(());
        }
    }

    let mut allocator = SequenceAllocator::new(form.starting_sequence);
    let records = assemble_records(&form, &mattresses, &expansion.kits, &mut allocator);

    let spinner = ctx.output.spinner("Appending to product store");
    let stored_total = store
        .append(&records)
        .with_context(|| format!("Failed to append to {}", store.path().display()))?;
    spinner.finish_and_clear();
    ctx.output.success(&format!(
        "Stored {} records ({} in store)",
        records.len(),
        stored_total
    ));

    if let Some(csv) = &args.csv {
        let csv_path = ctx.resolve_path(csv);
        let content = bedding_export::to_csv(&records, Some(&EXPORT_COLUMNS[..]));
        if let Some(parent) = csv_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&csv_path, content)
            .with_context(|| format!("Failed to write {}", csv_path.display()))?;
        ctx.output
            .success(&format!("Wrote {}", csv_path.display()));
    }

    // The last issued code seeds the next run.
    ctx.output
        .kv("Next starting sequence", &allocator.current().to_string());

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "generated": records.len(),
            "total": stored_total,
            "next_starting_sequence": allocator.current(),
            "warnings": expansion.warnings,
        }));
    }

    Ok(())
}

/// Load a product form from a TOML or JSON file, picked by extension.
pub(crate) fn load_form(path: &Path) -> Result<ProductForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form file: {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON form: {}", path.display()))
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML form: {}", path.display()))
    }
}
