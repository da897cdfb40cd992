//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case.

mod daypart;
mod export;

pub use daypart::DaypartService;
pub use export::NameExportService;
