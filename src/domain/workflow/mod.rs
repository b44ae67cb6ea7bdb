// Screening workflow controller
// search -> details -> screening -> results, with status polling in between

pub mod api;
pub mod controller;
pub mod sections;
pub mod state;

pub use api::{drive_polling, ScreeningApi, Ticker};
pub use controller::WorkflowController;
pub use sections::{Section, SectionOrder};
pub use state::{
    ChatRequest, LookupRequest, PollStep, PollTicket, QueriesRequest, RequestToken, Stage,
    StartRequest, WorkflowState,
};
