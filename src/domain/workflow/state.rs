//! Screening workflow view model
//!
//! Every network-backed operation is split into a `begin_*` phase that
//! validates input and returns a token, and a `finish_*` phase that applies
//! the response. Tokens carry the navigation epoch: once the user goes back
//! or resets, responses to older requests are rejected.

use serde::{Deserialize, Serialize};

use super::sections::{Section, SectionOrder};
use crate::domain::models::{
    ChatMessage, NetworkMember, ScreeningResults, ScreeningStatus, StartScreeningResponse,
};
use crate::shared::errors::WorkflowError;
use crate::shared::logging::{
    log_poll_error, log_poll_status, log_stale_response, log_workflow_transition,
};

/// Screen shown to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Search,
    Details,
    Screening,
    Results,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Search => "search",
            Stage::Details => "details",
            Stage::Screening => "screening",
            Stage::Results => "results",
        }
    }
}

/// Proof that a request was issued from the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    epoch: u64,
}

/// Validated lookup ready to be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub token: RequestToken,
    pub nm_id: String,
}

/// Validated start request; `nm_id` is the looked-up member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRequest {
    pub token: RequestToken,
    pub nm_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueriesRequest {
    pub token: RequestToken,
    pub nm_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub token: RequestToken,
    pub nm_id: String,
    pub text: String,
}

/// Handle of one polling run, keyed by the identifier the service returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTicket {
    pub nm_id: String,
    generation: u64,
}

/// What the polling loop should do after applying a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStep {
    /// Not terminal yet, wait one interval and fetch again
    Continue,
    /// Terminal status reached, results stored
    Completed,
    /// The run was cancelled by navigation; stop without touching state
    Cancelled,
}

/// Client-side state of one screening session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowState {
    stage: Stage,
    member: Option<NetworkMember>,
    screening_id: Option<String>,
    status: Option<ScreeningStatus>,
    queries: Vec<String>,
    queries_loading: bool,
    chat: Vec<ChatMessage>,
    chat_pending: bool,
    lookup_pending: bool,
    start_pending: bool,
    error: Option<String>,
    sections: SectionOrder,
    epoch: u64,
    poll_generation: u64,
    polling: bool,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- accessors ----

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn member(&self) -> Option<&NetworkMember> {
        self.member.as_ref()
    }

    /// Identifier returned by the start call, used for polling and chat
    pub fn screening_id(&self) -> Option<&str> {
        self.screening_id.as_deref()
    }

    pub fn status(&self) -> Option<&ScreeningStatus> {
        self.status.as_ref()
    }

    /// Results, only once the terminal status has been observed
    pub fn results(&self) -> Option<&ScreeningResults> {
        match self.stage {
            Stage::Results => self.status.as_ref().and_then(|s| s.results.as_ref()),
            _ => None,
        }
    }

    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    pub fn is_loading_queries(&self) -> bool {
        self.queries_loading
    }

    pub fn chat(&self) -> &[ChatMessage] {
        &self.chat
    }

    pub fn is_chat_pending(&self) -> bool {
        self.chat_pending
    }

    pub fn is_lookup_pending(&self) -> bool {
        self.lookup_pending
    }

    pub fn is_start_pending(&self) -> bool {
        self.start_pending
    }

    pub fn is_polling(&self) -> bool {
        self.polling
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn sections(&self) -> &SectionOrder {
        &self.sections
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // ---- lookup ----

    pub fn begin_lookup(&mut self, raw_id: &str) -> Result<LookupRequest, WorkflowError> {
        let nm_id = raw_id.trim();
        if nm_id.is_empty() {
            return Err(self.fail(WorkflowError::validation("Please enter a Network Member ID")));
        }

        self.error = None;
        self.lookup_pending = true;
        Ok(LookupRequest {
            token: self.token(),
            nm_id: nm_id.to_string(),
        })
    }

    pub fn finish_lookup(
        &mut self,
        request: &LookupRequest,
        response: Result<NetworkMember, WorkflowError>,
    ) -> Result<(), WorkflowError> {
        self.check_token(request.token, "lookup")?;
        self.lookup_pending = false;

        let mut member = response.map_err(|e| self.fail(e))?;
        if member.nm_id.is_empty() {
            member.nm_id = request.nm_id.clone();
        }
        self.member = Some(member);
        self.transition(Stage::Details);
        Ok(())
    }

    // ---- screening ----

    pub fn begin_start(&mut self) -> Result<StartRequest, WorkflowError> {
        let member_id = self
            .member
            .as_ref()
            .filter(|_| self.stage == Stage::Details)
            .map(|member| member.nm_id.clone());
        let Some(nm_id) = member_id else {
            return Err(self.fail(WorkflowError::validation("Look up a Network Member first")));
        };
        if self.start_pending {
            return Err(WorkflowError::validation("Screening is already being started"));
        }

        self.error = None;
        self.start_pending = true;
        Ok(StartRequest {
            token: self.token(),
            nm_id,
        })
    }

    /// Apply the start response; on success polling must begin with the returned ticket
    pub fn finish_start(
        &mut self,
        request: &StartRequest,
        response: Result<StartScreeningResponse, WorkflowError>,
    ) -> Result<PollTicket, WorkflowError> {
        self.check_token(request.token, "start")?;
        self.start_pending = false;

        let started = response.map_err(|e| self.fail(e))?;
        self.screening_id = Some(started.nm_id.clone());
        self.status = None;
        self.poll_generation += 1;
        self.polling = true;
        self.transition(Stage::Screening);

        Ok(PollTicket {
            nm_id: started.nm_id,
            generation: self.poll_generation,
        })
    }

    /// Apply one polling fetch. Errors are logged and swallowed.
    pub fn apply_poll(
        &mut self,
        ticket: &PollTicket,
        fetched: Result<ScreeningStatus, WorkflowError>,
    ) -> PollStep {
        if !self.polling || ticket.generation != self.poll_generation {
            log_stale_response("status");
            return PollStep::Cancelled;
        }

        let status = match fetched {
            Ok(status) => status,
            Err(e) => {
                log_poll_error(&ticket.nm_id, &e.to_string());
                return PollStep::Continue;
            }
        };

        log_poll_status(&ticket.nm_id, &status.status);
        if status.is_completed() {
            self.status = Some(status);
            self.polling = false;
            self.transition(Stage::Results);
            PollStep::Completed
        } else {
            // intermediate records never expose results
            self.status = Some(ScreeningStatus {
                results: None,
                ..status
            });
            PollStep::Continue
        }
    }

    pub fn cancel_poll(&mut self) {
        self.polling = false;
        self.poll_generation += 1;
    }

    // ---- queries ----

    pub fn begin_load_queries(&mut self, raw_id: &str) -> Result<QueriesRequest, WorkflowError> {
        let nm_id = raw_id.trim();
        if nm_id.is_empty() {
            return Err(self.fail(WorkflowError::validation("No screening to load queries for")));
        }

        self.queries_loading = true;
        Ok(QueriesRequest {
            token: self.token(),
            nm_id: nm_id.to_string(),
        })
    }

    pub fn finish_load_queries(
        &mut self,
        request: &QueriesRequest,
        response: Result<Vec<String>, WorkflowError>,
    ) -> Result<(), WorkflowError> {
        self.check_token(request.token, "queries")?;
        self.queries_loading = false;

        let queries = response.map_err(|e| self.fail(e))?;
        self.queries = queries;
        self.sections.show(Section::Queries);
        Ok(())
    }

    // ---- sections ----

    pub fn show_section(&mut self, section: Section) {
        self.sections.show(section);
    }

    pub fn dismiss_section(&mut self, section: Section) {
        self.sections.dismiss(section);
    }

    // ---- chat ----

    /// Validate and optimistically append the user's message
    pub fn begin_chat(&mut self, text: &str) -> Result<ChatRequest, WorkflowError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(WorkflowError::validation("Message is empty"));
        }
        if self.chat_pending {
            return Err(WorkflowError::validation("Wait for the previous answer"));
        }
        let nm_id = self
            .screening_id
            .clone()
            .or_else(|| self.member.as_ref().map(|m| m.nm_id.clone()))
            .ok_or_else(|| WorkflowError::validation("No screening to ask about"))?;

        self.chat.push(ChatMessage::user(text));
        self.chat_pending = true;
        Ok(ChatRequest {
            token: self.token(),
            nm_id,
            text: text.to_string(),
        })
    }

    /// Append the agent's answer, or an agent-role error message
    pub fn finish_chat(
        &mut self,
        request: &ChatRequest,
        response: Result<String, WorkflowError>,
    ) -> Result<(), WorkflowError> {
        self.check_token(request.token, "chat")?;
        self.chat_pending = false;

        match response {
            Ok(answer) => {
                self.chat.push(ChatMessage::agent(answer));
                Ok(())
            }
            Err(e) => {
                self.chat.push(ChatMessage::agent(format!(
                    "Sorry, I couldn't answer that right now. {}",
                    e
                )));
                Err(e)
            }
        }
    }

    // ---- navigation ----

    /// Move one step back, dropping what was acquired in the stage being left
    pub fn go_back(&mut self) {
        match self.stage {
            Stage::Search => return,
            Stage::Details => {
                self.member = None;
                self.transition(Stage::Search);
            }
            Stage::Screening | Stage::Results => {
                self.cancel_poll();
                self.clear_screening();
                self.transition(Stage::Details);
            }
        }
        self.error = None;
        self.lookup_pending = false;
        self.start_pending = false;
        self.epoch += 1;
    }

    /// Return to search with nothing retained
    pub fn reset(&mut self) {
        self.cancel_poll();
        let previous = self.stage;
        *self = Self {
            epoch: self.epoch + 1,
            poll_generation: self.poll_generation,
            ..Self::default()
        };
        if previous != Stage::Search {
            log_workflow_transition(previous.as_str(), Stage::Search.as_str());
        }
    }

    // ---- helpers ----

    fn clear_screening(&mut self) {
        self.screening_id = None;
        self.status = None;
        self.queries.clear();
        self.queries_loading = false;
        self.chat.clear();
        self.chat_pending = false;
        self.sections.clear();
    }

    fn token(&self) -> RequestToken {
        RequestToken { epoch: self.epoch }
    }

    fn check_token(&self, token: RequestToken, kind: &str) -> Result<(), WorkflowError> {
        if token.epoch == self.epoch {
            Ok(())
        } else {
            log_stale_response(kind);
            Err(WorkflowError::Cancelled)
        }
    }

    fn fail(&mut self, error: WorkflowError) -> WorkflowError {
        if error.is_visible() {
            self.error = Some(error.to_string());
        }
        error
    }

    fn transition(&mut self, to: Stage) {
        log_workflow_transition(self.stage.as_str(), to.as_str());
        self.stage = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::WorkHistoryEntry;

    fn member(nm_id: &str) -> NetworkMember {
        NetworkMember {
            nm_id: nm_id.to_string(),
            name: "Michael Bartikoski".to_string(),
            biography: "Executive".to_string(),
            practice_area: "Consumer Goods & Services".to_string(),
            council_name: "Consumer Goods & Services Council".to_string(),
            country: "United States".to_string(),
            linkedin_url: "https://www.linkedin.com/in/michael-bartikoski-12345".to_string(),
            work_history: vec![WorkHistoryEntry {
                company: "CraftMark Bakery, LLC".to_string(),
                title: "Chief Operating Officer".to_string(),
                period: "2020-Present".to_string(),
            }],
        }
    }

    fn status(nm_id: &str, label: &str, results: Option<ScreeningResults>) -> ScreeningStatus {
        ScreeningStatus {
            nm_id: nm_id.to_string(),
            status: label.to_string(),
            start_time: None,
            results,
        }
    }

    fn results() -> ScreeningResults {
        ScreeningResults {
            summary: "<p>No negative news</p>".to_string(),
            citations: vec!["https://example.com/a".to_string()],
        }
    }

    /// State sitting in `details` with a member loaded
    fn at_details() -> WorkflowState {
        let mut state = WorkflowState::new();
        let request = state.begin_lookup("6023085").unwrap();
        state.finish_lookup(&request, Ok(member("6023085"))).unwrap();
        state
    }

    /// State sitting in `screening` with an active ticket
    fn at_screening(returned_id: &str) -> (WorkflowState, PollTicket) {
        let mut state = at_details();
        let request = state.begin_start().unwrap();
        let ticket = state
            .finish_start(
                &request,
                Ok(StartScreeningResponse {
                    message: "Screening started successfully".to_string(),
                    nm_id: returned_id.to_string(),
                }),
            )
            .unwrap();
        (state, ticket)
    }

    #[test]
    fn test_blank_lookup_is_rejected_locally() {
        let mut state = WorkflowState::new();
        let err = state.begin_lookup("   ").unwrap_err();

        assert!(matches!(err, WorkflowError::Validation(_)));
        assert_eq!(state.stage(), Stage::Search);
        assert!(state.error().is_some());
        assert!(!state.is_lookup_pending());
    }

    #[test]
    fn test_lookup_trims_identifier() {
        let mut state = WorkflowState::new();
        let request = state.begin_lookup("  6023085 ").unwrap();
        assert_eq!(request.nm_id, "6023085");
    }

    #[test]
    fn test_failed_lookup_stays_on_search() {
        let mut state = WorkflowState::new();
        let request = state.begin_lookup("does-not-exist").unwrap();
        let err = state
            .finish_lookup(
                &request,
                Err(WorkflowError::NotFound("Network Member not found".into())),
            )
            .unwrap_err();

        assert!(matches!(err, WorkflowError::NotFound(_)));
        assert_eq!(state.stage(), Stage::Search);
        assert!(state.member().is_none());
        assert_eq!(state.error(), Some("Not found: Network Member not found"));
    }

    #[test]
    fn test_lookup_fills_missing_identifier() {
        let mut state = WorkflowState::new();
        let request = state.begin_lookup("12345").unwrap();
        state.finish_lookup(&request, Ok(member(""))).unwrap();

        assert_eq!(state.stage(), Stage::Details);
        assert_eq!(state.member().unwrap().nm_id, "12345");
    }

    #[test]
    fn test_start_requires_member() {
        let mut state = WorkflowState::new();
        assert!(matches!(state.begin_start(), Err(WorkflowError::Validation(_))));
    }

    #[test]
    fn test_ticket_uses_returned_identifier() {
        let (state, ticket) = at_screening("6023085-demo");

        assert_eq!(ticket.nm_id, "6023085-demo");
        assert_eq!(state.screening_id(), Some("6023085-demo"));
        assert_eq!(state.stage(), Stage::Screening);
        assert!(state.is_polling());
    }

    #[test]
    fn test_start_failure_stays_on_details() {
        let mut state = at_details();
        let request = state.begin_start().unwrap();
        let err = state
            .finish_start(&request, Err(WorkflowError::Start("HTTP 500".into())))
            .unwrap_err();

        assert!(matches!(err, WorkflowError::Start(_)));
        assert_eq!(state.stage(), Stage::Details);
        assert!(!state.is_polling());
        assert!(state.error().is_some());
    }

    #[test]
    fn test_poll_continues_until_completed() {
        let (mut state, ticket) = at_screening("6023085");

        let step = state.apply_poll(&ticket, Ok(status("6023085", "Collecting public records...", None)));
        assert_eq!(step, PollStep::Continue);
        assert_eq!(state.stage(), Stage::Screening);
        assert!(state.results().is_none());

        let step = state.apply_poll(&ticket, Ok(status("6023085", "completed", Some(results()))));
        assert_eq!(step, PollStep::Completed);
        assert_eq!(state.stage(), Stage::Results);
        assert!(!state.is_polling());
        assert_eq!(state.results().unwrap().citations.len(), 1);
    }

    #[test]
    fn test_poll_errors_are_swallowed() {
        let (mut state, ticket) = at_screening("6023085");

        let step = state.apply_poll(&ticket, Err(WorkflowError::PollTransport("connection reset".into())));
        assert_eq!(step, PollStep::Continue);
        assert!(state.error().is_none());

        let step = state.apply_poll(&ticket, Err(WorkflowError::NotFound("Screening not found".into())));
        assert_eq!(step, PollStep::Continue);
        assert!(state.is_polling());
    }

    #[test]
    fn test_intermediate_status_never_exposes_results() {
        let (mut state, ticket) = at_screening("6023085");
        state.apply_poll(&ticket, Ok(status("6023085", "Summarizing results...", Some(results()))));

        assert!(state.status().unwrap().results.is_none());
        assert!(state.results().is_none());
    }

    #[test]
    fn test_go_back_cancels_polling() {
        let (mut state, ticket) = at_screening("6023085");
        state.go_back();

        assert_eq!(state.stage(), Stage::Details);
        assert!(state.member().is_some());
        assert!(state.status().is_none());
        assert_eq!(
            state.apply_poll(&ticket, Ok(status("6023085", "Completed", Some(results())))),
            PollStep::Cancelled
        );
        assert_eq!(state.stage(), Stage::Details);
    }

    #[test]
    fn test_go_back_from_results_returns_to_details() {
        let (mut state, ticket) = at_screening("6023085");
        state.apply_poll(&ticket, Ok(status("6023085", "Completed", Some(results()))));
        state.show_section(Section::Citations);

        state.go_back();
        assert_eq!(state.stage(), Stage::Details);
        assert!(state.results().is_none());
        assert!(state.sections().is_empty());

        state.go_back();
        assert_eq!(state.stage(), Stage::Search);
        assert!(state.member().is_none());

        state.go_back();
        assert_eq!(state.stage(), Stage::Search);
    }

    #[test]
    fn test_stale_lookup_after_reset_is_dropped() {
        let mut state = WorkflowState::new();
        let request = state.begin_lookup("6023085").unwrap();
        state.reset();

        let err = state.finish_lookup(&request, Ok(member("6023085"))).unwrap_err();
        assert_eq!(err, WorkflowError::Cancelled);
        assert_eq!(state.stage(), Stage::Search);
        assert!(state.member().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let (mut state, ticket) = at_screening("6023085");
        let chat = state.begin_chat("Any lawsuits?").unwrap();
        state.finish_chat(&chat, Ok("None found".into())).unwrap();

        state.reset();
        let once = (
            state.stage(),
            state.member().cloned(),
            state.status().cloned(),
            state.queries().to_vec(),
            state.chat().to_vec(),
            state.error().map(str::to_string),
        );
        state.reset();
        let twice = (
            state.stage(),
            state.member().cloned(),
            state.status().cloned(),
            state.queries().to_vec(),
            state.chat().to_vec(),
            state.error().map(str::to_string),
        );

        assert_eq!(once, twice);
        assert_eq!(once.0, Stage::Search);
        assert!(once.1.is_none() && once.2.is_none() && once.3.is_empty() && once.4.is_empty());
        assert_eq!(state.apply_poll(&ticket, Ok(status("6023085", "Completed", None))), PollStep::Cancelled);
    }

    #[test]
    fn test_failed_query_load_keeps_previous_queries() {
        let (mut state, _ticket) = at_screening("6023085");
        let first = state.begin_load_queries("6023085").unwrap();
        state
            .finish_load_queries(&first, Ok(vec!["\"Michael Bartikoski\" lawsuit".into()]))
            .unwrap();
        assert!(state.sections().is_open(Section::Queries));

        let second = state.begin_load_queries("6023085").unwrap();
        assert!(state.is_loading_queries());
        let err = state
            .finish_load_queries(&second, Err(WorkflowError::Load("HTTP 500".into())))
            .unwrap_err();

        assert!(matches!(err, WorkflowError::Load(_)));
        assert_eq!(state.queries().len(), 1);
        assert!(!state.is_loading_queries());
    }

    #[test]
    fn test_duplicate_query_loads_are_allowed() {
        let (mut state, _ticket) = at_screening("6023085");
        let first = state.begin_load_queries("6023085").unwrap();
        let second = state.begin_load_queries("6023085").unwrap();

        state.finish_load_queries(&second, Ok(vec!["b".into()])).unwrap();
        state.finish_load_queries(&first, Ok(vec!["a".into()])).unwrap();
        assert_eq!(state.queries(), ["a".to_string()]);
    }

    #[test]
    fn test_chat_rejects_blank_and_concurrent_sends() {
        let (mut state, _ticket) = at_screening("6023085");

        assert!(matches!(state.begin_chat("  \n"), Err(WorkflowError::Validation(_))));
        assert!(state.chat().is_empty());

        let pending = state.begin_chat("Any lawsuits?").unwrap();
        assert_eq!(state.chat().len(), 1);
        assert!(matches!(state.begin_chat("And fraud?"), Err(WorkflowError::Validation(_))));
        assert_eq!(state.chat().len(), 1);

        state.finish_chat(&pending, Ok("No lawsuits".into())).unwrap();
        assert!(!state.is_chat_pending());
        assert!(state.begin_chat("And fraud?").is_ok());
    }

    #[test]
    fn test_chat_failure_appends_agent_message() {
        let (mut state, _ticket) = at_screening("6023085");
        let request = state.begin_chat("Any lawsuits?").unwrap();
        let err = state
            .finish_chat(&request, Err(WorkflowError::Chat("HTTP 500".into())))
            .unwrap_err();

        assert!(matches!(err, WorkflowError::Chat(_)));
        let last = state.chat().last().unwrap();
        assert_eq!(last.role, crate::domain::models::ChatRole::Agent);
        assert!(last.text.contains("HTTP 500"));
        assert!(!state.is_chat_pending());
    }
}
