//! Manage saved form drafts.
//!
//! Drafts are named copies of form files, kept newest-first in one JSON
//! document so a selection can be reworked later without retyping it.

use std::path::Path;

use anyhow::{bail, Context as _, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bedding_catalog::ProductForm;

use super::{DraftArgs, DraftCommand};
use crate::commands::generate::load_form;
use crate::context::Context;

const WIDTHS: [usize; 3] = [18, 28, 20];

/// A saved form draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftLog {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub form: ProductForm,
}

/// Run the draft command.
pub async fn run(args: DraftArgs, ctx: &Context) -> Result<()> {
    match args.command {
        DraftCommand::Save { input, name } => save(&input, &name, ctx),
        DraftCommand::List => list(ctx),
        DraftCommand::Show { id } => show(&id, ctx),
        DraftCommand::Delete { id } => delete(&id, ctx),
    }
}

fn save(input: &str, name: &str, ctx: &Context) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Draft name must not be empty");
    }

    // Drafts keep the form as-is; validation happens at generation time.
    let form = load_form(&ctx.resolve_path(input))?;

    let path = ctx.drafts_path();
    let mut drafts = load_drafts(&path)?;
    let draft = DraftLog {
        id: generate_draft_id(),
        name: name.to_string(),
        created_at: Utc::now(),
        form,
    };
    let id = draft.id.clone();
    drafts.insert(0, draft);
    save_drafts(&path, &drafts)?;

    ctx.output
        .success(&format!("Saved draft '{}' as {}", name, id));
    Ok(())
}

fn list(ctx: &Context) -> Result<()> {
    let drafts = load_drafts(&ctx.drafts_path())?;

    if ctx.output.is_json() {
        ctx.output.json(&drafts);
        return Ok(());
    }

    if drafts.is_empty() {
        ctx.output.info("No drafts saved");
        return Ok(());
    }

    ctx.output.header(&format!("{} drafts", drafts.len()));
    ctx.output.table_row(&["ID", "NAME", "CREATED"], &WIDTHS);
    for draft in &drafts {
        ctx.output.table_row(
            &[
                &draft.id,
                &draft.name,
                &draft.created_at.format("%Y-%m-%d %H:%M").to_string(),
            ],
            &WIDTHS,
        );
    }
    Ok(())
}

fn show(id: &str, ctx: &Context) -> Result<()> {
    let drafts = load_drafts(&ctx.drafts_path())?;
    let Some(draft) = drafts.iter().find(|d| d.id == id) else {
        bail!("Draft not found: {}", id);
    };
    ctx.output.json(&draft);
    Ok(())
}

fn delete(id: &str, ctx: &Context) -> Result<()> {
    let path = ctx.drafts_path();
    let mut drafts = load_drafts(&path)?;
    let before = drafts.len();
    drafts.retain(|d| d.id != id);
    if drafts.len() == before {
        bail!("Draft not found: {}", id);
    }
    save_drafts(&path, &drafts)?;
    ctx.output.success(&format!("Deleted draft {}", id));
    Ok(())
}

fn load_drafts(path: &Path) -> Result<Vec<DraftLog>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read drafts: {}", path.display()))
        }
    };
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse drafts: {}", path.display()))
}

fn save_drafts(path: &Path, drafts: &[DraftLog]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(drafts)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write drafts: {}", path.display()))
}

/// Generate a draft id from timestamp and a process-local counter.
fn generate_draft_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("{:x}-{:02x}", timestamp, counter)
}
