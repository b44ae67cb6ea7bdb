// Shared services
// HTTP access to the screening API and the polling ticker, usable from browser and native code

pub mod api_service;
pub mod ticker;

pub use api_service::{ApiService, HttpFailure};
pub use ticker::IntervalTicker;
