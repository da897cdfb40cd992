//! Export service - write a user's name to a destination file

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::UserId;
use crate::ports::UserStore;

/// Exports a user's display name to a caller-supplied destination
///
/// The store is injected at construction; the destination is passed per
/// call. One lookup, then at most one write.
pub struct NameExportService {
    store: Arc<dyn UserStore>,
}

impl NameExportService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Look up the name bound to `id` and write it verbatim to `destination`
    ///
    /// The destination is created or truncated only after the lookup
    /// succeeds, so a failed lookup leaves it untouched. The file handle
    /// is released on every exit path. Any error is terminal for this
    /// invocation; there are no retries.
    pub fn export(&self, id: UserId, destination: &Path) -> Result<()> {
        let name = self.store.name_by_id(id)?;

        let write_err = |source: std::io::Error| Error::write(destination, source);
        let mut file = File::create(destination).map_err(write_err)?;
        file.write_all(name.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)?;
        Ok(())
    }
}
