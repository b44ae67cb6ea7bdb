//! Seams between the workflow and the outside world
//!
//! `ScreeningApi` is the backend as seen by the controller and `Ticker`
//! paces the polling loop. Both are `?Send` so browser futures qualify.

use async_trait::async_trait;

use super::state::{PollStep, PollTicket};
use crate::domain::models::{NetworkMember, ScreeningStatus, StartScreeningResponse};
use crate::shared::errors::WorkflowError;

/// Backend operations used by the screening workflow
///
/// Implementations map HTTP failures onto the workflow error taxonomy:
/// lookups fail with `NotFound`, starts with `Start`, query loads with
/// `Load`, answers with `Chat`, and status fetches with `NotFound` or
/// `PollTransport`.
#[async_trait(?Send)]
pub trait ScreeningApi {
    async fn lookup_member(&self, nm_id: &str) -> Result<NetworkMember, WorkflowError>;

    /// `nm_id` is the member the user looked up; the response names the
    /// identifier to poll, which may differ
    async fn start_screening(&self, nm_id: &str) -> Result<StartScreeningResponse, WorkflowError>;

    async fn fetch_status(&self, nm_id: &str) -> Result<ScreeningStatus, WorkflowError>;

    async fn fetch_queries(&self, nm_id: &str) -> Result<Vec<String>, WorkflowError>;

    async fn answer_query(&self, nm_id: &str, user_query: &str) -> Result<String, WorkflowError>;
}

/// Source of polling intervals
#[async_trait(?Send)]
pub trait Ticker {
    /// Resolve after one polling interval
    async fn tick(&mut self);
}

/// Fetch status immediately, then once per tick, until `apply` stops the loop
///
/// `apply` is normally `WorkflowState::apply_poll`; it decides whether the
/// run is finished, still running, or was cancelled by navigation.
pub async fn drive_polling<A, T, F>(
    api: &A,
    ticker: &mut T,
    ticket: &PollTicket,
    mut apply: F,
) -> PollStep
where
    A: ScreeningApi + ?Sized,
    T: Ticker + ?Sized,
    F: FnMut(&PollTicket, Result<ScreeningStatus, WorkflowError>) -> PollStep,
{
    loop {
        let fetched = api.fetch_status(&ticket.nm_id).await;
        match apply(ticket, fetched) {
            PollStep::Continue => ticker.tick().await,
            finished => return finished,
        }
    }
}
