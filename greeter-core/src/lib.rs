//! Greeter Core - time-of-day labels and user name export
//!
//! This crate implements the core logic following hexagonal architecture:
//!
//! - **domain**: Daypart classification, User entity, error types
//! - **ports**: Trait definitions for external dependencies (UserStore, Clock)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (DuckDB, system clock)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use adapters::duckdb::DuckDbUserStore;
use config::Config;
use services::NameExportService;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{Daypart, User, UserId};

/// Main context for greeter operations
///
/// Holds the configuration, the user store, and the services that need
/// it. Daypart classification has no store dependency and is composed at
/// the call site from [`services::DaypartService`] and a clock.
pub struct GreeterContext {
    pub config: Config,
    pub store: Arc<DuckDbUserStore>,
    pub export_service: NameExportService,
}

impl GreeterContext {
    /// Create a new greeter context rooted at `greeter_dir`
    pub fn new(greeter_dir: &Path) -> Result<Self> {
        let config = Config::load(greeter_dir)?;

        let db_path = greeter_dir.join(&config.database_filename);
        let store = Arc::new(DuckDbUserStore::open(&db_path)?);
        store.ensure_schema()?;

        let export_service = NameExportService::new(Arc::clone(&store) as Arc<dyn ports::UserStore>);

        Ok(Self {
            config,
            store,
            export_service,
        })
    }
}
