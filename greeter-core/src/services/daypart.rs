//! Daypart service - classify the current wall-clock hour

use std::sync::Arc;

use chrono::Timelike;

use crate::domain::result::Result;
use crate::domain::Daypart;
use crate::ports::Clock;

/// Classifies "now" using an injected clock
pub struct DaypartService {
    clock: Arc<dyn Clock>,
}

impl DaypartService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Daypart of the clock's current hour
    pub fn current(&self) -> Result<Daypart> {
        Daypart::from_hour(self.clock.now().hour())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone};

    use super::*;

    struct FixedClock {
        hour: u32,
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            Local
                .with_ymd_and_hms(2024, 1, 15, self.hour, 30, 0)
                .unwrap()
        }
    }

    #[test]
    fn test_current_uses_injected_clock() {
        let cases = [
            (3, Daypart::Night),
            (9, Daypart::Morning),
            (14, Daypart::Afternoon),
            (21, Daypart::Evening),
        ];
        for (hour, expected) in cases {
            let service = DaypartService::new(Arc::new(FixedClock { hour }));
            assert_eq!(service.current().unwrap(), expected);
        }
    }
}
