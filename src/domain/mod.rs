pub mod models;
pub mod workflow;
