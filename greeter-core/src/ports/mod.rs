//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

mod clock;
mod user_store;

pub use clock::Clock;
pub use user_store::UserStore;
