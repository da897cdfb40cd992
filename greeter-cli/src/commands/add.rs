//! Add command - create or update a user row

use anyhow::Result;
use greeter_core::User;

use super::get_context;
use crate::output;

pub fn run(id: i64, name: &str) -> Result<()> {
    let ctx = get_context()?;
    ctx.store.upsert_user(&User::new(id, name))?;

    output::success(&format!("Saved user {} ({})", id, name));
    Ok(())
}
