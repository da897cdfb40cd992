//! User store port - name lookup abstraction

use crate::domain::result::Result;
use crate::domain::UserId;

/// Name lookup capability
///
/// The one operation this core needs from a user store. Implementations
/// (adapters) provide the actual storage access; consumers receive the
/// store as an injected dependency and never reach for a global handle.
pub trait UserStore: Send + Sync {
    /// Look up the display name bound to `id`
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) when no row
    /// exists for `id`, and [`Error::Lookup`](crate::Error::Lookup) when
    /// the underlying query fails.
    fn name_by_id(&self, id: UserId) -> Result<String>;
}
