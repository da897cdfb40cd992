//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - DuckDB for the UserStore port
//! - Local wall-clock time for the Clock port

pub mod clock;
pub mod duckdb;
