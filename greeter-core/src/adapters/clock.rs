//! System clock implementation

use chrono::{DateTime, Local};

use crate::ports::Clock;

/// Production clock reading local wall-clock time
///
/// The only place in the crate where ambient time is read.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
