//! Daypart classification
//!
//! Partitions the 24-hour clock into four coarse labels. Classification
//! is a pure function of the hour; anything needing "the current hour"
//! goes through the [`Clock`](crate::ports::Clock) port instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// One of four coarse labels partitioning a 24-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Daypart {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl Daypart {
    /// Classify an hour of day (0-23)
    ///
    /// Hours 24 and above are rejected rather than silently bucketed.
    pub fn from_hour(hour: u32) -> Result<Self> {
        match hour {
            0..=5 => Ok(Daypart::Night),
            6..=11 => Ok(Daypart::Morning),
            12..=17 => Ok(Daypart::Afternoon),
            18..=23 => Ok(Daypart::Evening),
            _ => Err(Error::InvalidHour(hour)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Daypart::Night => "Night",
            Daypart::Morning => "Morning",
            Daypart::Afternoon => "Afternoon",
            Daypart::Evening => "Evening",
        }
    }
}

impl fmt::Display for Daypart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_lower_bounds() {
        assert_eq!(Daypart::from_hour(0).unwrap(), Daypart::Night);
        assert_eq!(Daypart::from_hour(6).unwrap(), Daypart::Morning);
        assert_eq!(Daypart::from_hour(12).unwrap(), Daypart::Afternoon);
        assert_eq!(Daypart::from_hour(18).unwrap(), Daypart::Evening);
    }

    #[test]
    fn test_interval_upper_bounds() {
        assert_eq!(Daypart::from_hour(5).unwrap(), Daypart::Night);
        assert_eq!(Daypart::from_hour(11).unwrap(), Daypart::Morning);
        assert_eq!(Daypart::from_hour(17).unwrap(), Daypart::Afternoon);
        assert_eq!(Daypart::from_hour(23).unwrap(), Daypart::Evening);
    }

    #[test]
    fn test_every_valid_hour_is_covered() {
        for hour in 0..24 {
            assert!(Daypart::from_hour(hour).is_ok(), "hour {} rejected", hour);
        }
    }

    #[test]
    fn test_out_of_range_hours_rejected() {
        for hour in [24, 25, 99, u32::MAX] {
            match Daypart::from_hour(hour) {
                Err(Error::InvalidHour(h)) => assert_eq!(h, hour),
                other => panic!("expected InvalidHour for {}, got {:?}", hour, other),
            }
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        for hour in 0..24 {
            let first = Daypart::from_hour(hour).unwrap();
            let second = Daypart::from_hour(hour).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Daypart::Night.to_string(), "Night");
        assert_eq!(Daypart::Evening.to_string(), "Evening");
    }
}
