//! Export command - write a user's name to a file

use std::path::Path;

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(id: i64, file: &Path) -> Result<()> {
    let ctx = get_context()?;
    ctx.export_service.export(id, file)?;

    output::success(&format!("Wrote name for user {} to {}", id, file.display()));
    Ok(())
}
