//! Daypart command - classify a given or current hour

use std::sync::Arc;

use anyhow::Result;
use greeter_core::adapters::clock::SystemClock;
use greeter_core::services::DaypartService;
use greeter_core::Daypart;

pub fn run(hour: Option<u32>, json: bool) -> Result<()> {
    let daypart = match hour {
        Some(h) => Daypart::from_hour(h)?,
        None => DaypartService::new(Arc::new(SystemClock)).current()?,
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "daypart": daypart }))?
        );
    } else {
        println!("{}", daypart);
    }

    Ok(())
}
