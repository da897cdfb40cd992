//! Core domain entities
//!
//! Pure data structures and classification logic - no I/O or external
//! dependencies.

mod daypart;
mod user;
pub mod result;

pub use daypart::Daypart;
pub use user::{User, UserId};
