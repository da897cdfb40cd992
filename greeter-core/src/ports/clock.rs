//! Clock port - wall-clock abstraction

use chrono::{DateTime, Local};

/// Wall-clock capability
///
/// Anything that needs "now" takes a clock explicitly instead of reading
/// process-global time, so time-dependent logic stays testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}
