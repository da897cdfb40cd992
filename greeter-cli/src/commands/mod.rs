//! CLI command implementations

pub mod add;
pub mod daypart;
pub mod export;

use std::path::PathBuf;

use anyhow::{Context, Result};
use greeter_core::GreeterContext;

/// Get the greeter directory from environment or default
pub fn get_greeter_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("GREETER_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".greeter")
    }
}

/// Get or create greeter context
pub fn get_context() -> Result<GreeterContext> {
    let greeter_dir = get_greeter_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(&greeter_dir)
        .with_context(|| format!("Failed to create greeter directory: {:?}", greeter_dir))?;

    Ok(GreeterContext::new(&greeter_dir)?)
}
