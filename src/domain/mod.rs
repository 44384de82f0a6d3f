//! Domain entities and value objects, free of persistence and HTTP concerns.

pub mod craft;
pub mod report;
pub mod types;
