//! Sequential driver of the screening workflow
//!
//! Owns a `ScreeningApi` and a `WorkflowState` and runs each operation's
//! begin, request and finish phases back to back. The browser page drives
//! the same phases itself so it can render between them.

use super::api::{drive_polling, ScreeningApi, Ticker};
use super::sections::Section;
use super::state::{PollStep, PollTicket, WorkflowState};
use crate::domain::models::NetworkMember;
use crate::shared::errors::WorkflowError;

pub struct WorkflowController<A> {
    api: A,
    state: WorkflowState,
}

impl<A: ScreeningApi> WorkflowController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: WorkflowState::new(),
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Look up a member and move to `details`
    pub async fn lookup_member(&mut self, nm_id: &str) -> Result<&NetworkMember, WorkflowError> {
        let request = self.state.begin_lookup(nm_id)?;
        let response = self.api.lookup_member(&request.nm_id).await;
        self.state.finish_lookup(&request, response)?;
        self.state.member().ok_or(WorkflowError::Cancelled)
    }

    /// Start a screening and move to `screening`; poll with the returned ticket
    pub async fn start_screening(&mut self) -> Result<PollTicket, WorkflowError> {
        let request = self.state.begin_start()?;
        let response = self.api.start_screening(&request.nm_id).await;
        self.state.finish_start(&request, response)
    }

    pub async fn poll_until_complete<T>(&mut self, ticket: &PollTicket, ticker: &mut T) -> PollStep
    where
        T: Ticker + ?Sized,
    {
        self.poll_observed(ticket, ticker, |_| {}).await
    }

    /// Poll until completion, calling `observe` after every fetch
    pub async fn poll_observed<T, O>(
        &mut self,
        ticket: &PollTicket,
        ticker: &mut T,
        mut observe: O,
    ) -> PollStep
    where
        T: Ticker + ?Sized,
        O: FnMut(&WorkflowState),
    {
        let state = &mut self.state;
        drive_polling(&self.api, ticker, ticket, |ticket, fetched| {
            let step = state.apply_poll(ticket, fetched);
            observe(state);
            step
        })
        .await
    }

    /// Start a screening and poll it to the end
    pub async fn run_screening<T>(&mut self, ticker: &mut T) -> Result<PollStep, WorkflowError>
    where
        T: Ticker + ?Sized,
    {
        let ticket = self.start_screening().await?;
        Ok(self.poll_until_complete(&ticket, ticker).await)
    }

    /// Load the generated queries and open the queries panel
    pub async fn load_queries(&mut self, nm_id: &str) -> Result<&[String], WorkflowError> {
        let request = self.state.begin_load_queries(nm_id)?;
        let response = self.api.fetch_queries(&request.nm_id).await;
        self.state.finish_load_queries(&request, response)?;
        Ok(self.state.queries())
    }

    /// Send a follow-up question; the answer (or an error note) lands in the chat
    pub async fn send_chat_message(&mut self, text: &str) -> Result<(), WorkflowError> {
        let request = self.state.begin_chat(text)?;
        let response = self.api.answer_query(&request.nm_id, &request.text).await;
        self.state.finish_chat(&request, response)
    }

    pub fn show_section(&mut self, section: Section) {
        self.state.show_section(section);
    }

    pub fn dismiss_section(&mut self, section: Section) {
        self.state.dismiss_section(section);
    }

    pub fn go_back(&mut self) {
        self.state.go_back();
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}
