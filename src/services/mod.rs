pub mod crafts;
pub mod errors;
pub mod main;
pub mod reports;
pub mod seed;

pub use errors::{ServiceError, ServiceResult};
