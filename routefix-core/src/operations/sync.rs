use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;

use crate::apply::{apply_renames, confirm};
use crate::interrupt::PromptGuard;
use crate::output::SyncResult;
use crate::preview::{render_changes, Preview};
use crate::Config;

#[derive(Debug, Clone, Copy)]
pub struct SyncOptions {
    /// Skip the confirmation prompt
    pub auto_approve: bool,
    /// Show the proposals and stop
    pub dry_run: bool,
    pub preview: Preview,
    pub use_color: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            auto_approve: false,
            dry_run: false,
            preview: Preview::List,
            use_color: false,
        }
    }
}

/// Sync operation - extract routes, plan, confirm, then rename.
///
/// The proposals and the prompt are written to `writer`; the answer is read
/// from `reader`. Nothing on disk changes unless the operator answers `y` or
/// `auto_approve` is set.
pub fn sync_operation<R: BufRead, W: Write>(
    root: &Path,
    config: &Config,
    options: &SyncOptions,
    reader: &mut R,
    writer: &mut W,
) -> Result<SyncResult> {
    let plan = super::plan_operation(root, config)?;
    let changes = plan.changes;

    writeln!(
        writer,
        "{}",
        render_changes(&changes, options.preview, options.use_color)
    )
    .context("Failed to write preview")?;

    if changes.is_empty() {
        return Ok(SyncResult::NothingToDo);
    }

    if options.dry_run {
        return Ok(SyncResult::DryRun { changes });
    }

    if !options.auto_approve {
        let approved = {
            let _guard = PromptGuard::enter();
            confirm(reader, writer)?
        };
        if !approved {
            return Ok(SyncResult::Cancelled { changes });
        }
    }

    let report = apply_renames(root, &changes);
    Ok(SyncResult::Applied { report })
}
