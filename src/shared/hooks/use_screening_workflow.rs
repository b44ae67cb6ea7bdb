use std::future::Future;
use std::time::Duration;

use dioxus::core::{current_scope_id, Runtime, ScopeId, Task};
use dioxus::prelude::*;

use crate::config::ClientConfig;
use crate::domain::workflow::{drive_polling, ScreeningApi, Section, WorkflowState};
use crate::shared::services::{ApiService, IntervalTicker};

/// Screening workflow bound to Dioxus signals
///
/// Each operation runs its begin phase, awaits the request in a spawned
/// task, then applies the finish phase. Responses that arrive after
/// navigation are rejected by the state itself.
#[derive(Clone, Copy)]
pub struct ScreeningWorkflow {
    pub state: Signal<WorkflowState>,
    pub poll_task: Signal<Option<Task>>,
    api: Signal<ApiService>,
    poll_interval: Duration,
    scope: ScopeId,
}

impl ScreeningWorkflow {
    fn api(&self) -> ApiService {
        self.api.peek().clone()
    }

    /// Spawn under the scope that called the hook, not the one firing the event
    fn spawn_owned(&self, task: impl Future<Output = ()> + 'static) -> Task {
        Runtime::current().spawn(self.scope, task)
    }

    /// Replace the polling task, cancelling any previous one
    fn spawn_polling(&self, task: impl Future<Output = ()> + 'static) {
        self.cancel_polling();
        let task = self.spawn_owned(task);
        let mut poll_task = self.poll_task;
        poll_task.set(Some(task));
    }

    pub fn lookup(&self, raw_id: String) {
        let mut state = self.state;
        let api = self.api();

        self.spawn_owned(async move {
            let request = state.write().begin_lookup(&raw_id);
            let Ok(request) = request else { return };

            let response = api.lookup_member(&request.nm_id).await;
            let _ = state.write().finish_lookup(&request, response);
        });
    }

    /// Start a screening and keep polling it until completion or navigation
    pub fn start(&self) {
        let mut state = self.state;
        let api = self.api();
        let mut ticker = IntervalTicker::new(self.poll_interval);

        self.spawn_polling(async move {
            let request = state.write().begin_start();
            let Ok(request) = request else { return };

            let response = api.start_screening(&request.nm_id).await;
            let ticket = state.write().finish_start(&request, response);
            let Ok(ticket) = ticket else { return };

            drive_polling(&api, &mut ticker, &ticket, |ticket, fetched| {
                state.write().apply_poll(ticket, fetched)
            })
            .await;
        });
    }

    pub fn load_queries(&self, nm_id: String) {
        let mut state = self.state;
        let api = self.api();

        self.spawn_owned(async move {
            let request = state.write().begin_load_queries(&nm_id);
            let Ok(request) = request else { return };

            let response = api.fetch_queries(&request.nm_id).await;
            let _ = state.write().finish_load_queries(&request, response);
        });
    }

    pub fn send_chat(&self, text: String) {
        let mut state = self.state;
        let api = self.api();

        self.spawn_owned(async move {
            let request = state.write().begin_chat(&text);
            let Ok(request) = request else { return };

            let response = api.answer_query(&request.nm_id, &request.text).await;
            let _ = state.write().finish_chat(&request, response);
        });
    }

    pub fn show_section(&self, section: Section) {
        let mut state = self.state;
        state.write().show_section(section);
    }

    pub fn dismiss_section(&self, section: Section) {
        let mut state = self.state;
        state.write().dismiss_section(section);
    }

    pub fn clear_error(&self) {
        let mut state = self.state;
        state.write().clear_error();
    }

    pub fn go_back(&self) {
        self.cancel_polling();
        let mut state = self.state;
        state.write().go_back();
    }

    pub fn reset(&self) {
        self.cancel_polling();
        let mut state = self.state;
        state.write().reset();
    }

    fn cancel_polling(&self) {
        let mut poll_task = self.poll_task;
        if let Some(task) = poll_task.write().take() {
            task.cancel();
        }
    }
}

/// Hook owning the screening workflow of one page
///
/// Tasks belong to the component calling this hook, whichever child fires
/// the event. They outlive panels that unmount mid-request, and unmounting
/// the page itself stops any polling loop.
pub fn use_screening_workflow() -> ScreeningWorkflow {
    let scope = use_hook(current_scope_id);
    let config = use_hook(ClientConfig::default);
    let state = use_signal(WorkflowState::new);
    let poll_task = use_signal(|| None::<Task>);
    let base_url = config.base_url.clone();
    let api = use_signal(move || ApiService::with_base_url(base_url));

    ScreeningWorkflow {
        state,
        poll_task,
        api,
        poll_interval: config.poll_interval,
        scope,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use dioxus::core::{NoOpMutations, VirtualDom};

    use super::*;

    static SURVIVING_TICKS: AtomicUsize = AtomicUsize::new(0);
    static RESET_TICKS: AtomicUsize = AtomicUsize::new(0);

    const DETAILS: u8 = 0;
    const SCREENING: u8 = 1;
    const LEFT: u8 = 2;

    fn ticks(counter: usize) -> &'static AtomicUsize {
        if counter == 0 {
            &SURVIVING_TICKS
        } else {
            &RESET_TICKS
        }
    }

    /// Starts polling from a child task, the way an onclick handler does,
    /// then moves the page past the child so it unmounts
    #[component]
    fn StartPanel(counter: usize, leave_after: usize) -> Element {
        let workflow = use_context::<ScreeningWorkflow>();
        let mut stage = use_context::<Signal<u8>>();

        use_hook(move || {
            spawn(async move {
                workflow.spawn_polling(async move {
                    stage.set(SCREENING);
                    loop {
                        let count = ticks(counter).fetch_add(1, Ordering::SeqCst) + 1;
                        if count == leave_after {
                            stage.set(LEFT);
                        }
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    }
                });
            });
        });

        rsx! { "details" }
    }

    #[component]
    fn LeavePanel() -> Element {
        let workflow = use_context::<ScreeningWorkflow>();
        use_hook(move || {
            spawn(async move { workflow.reset() });
        });
        rsx! { "search" }
    }

    #[component]
    fn Page(counter: usize, leave_after: usize) -> Element {
        let workflow = use_screening_workflow();
        use_context_provider(|| workflow);
        let stage = use_context_provider(|| Signal::new(DETAILS));

        rsx! {
            match stage() {
                DETAILS => rsx! { StartPanel { counter, leave_after } },
                SCREENING => rsx! { "screening" },
                _ => rsx! { LeavePanel {} },
            }
        }
    }

    async fn drive(dom: &mut VirtualDom, duration: Duration) {
        let _ = tokio::time::timeout(duration, async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await;
    }

    #[tokio::test]
    async fn test_polling_outlives_the_panel_that_started_it() {
        let mut dom = VirtualDom::new_with_props(
            Page,
            PageProps {
                counter: 0,
                leave_after: usize::MAX,
            },
        );
        dom.rebuild_in_place();

        drive(&mut dom, Duration::from_millis(300)).await;

        assert!(SURVIVING_TICKS.load(Ordering::SeqCst) >= 5);
    }

    #[tokio::test]
    async fn test_reset_cancels_polling() {
        let mut dom = VirtualDom::new_with_props(
            Page,
            PageProps {
                counter: 1,
                leave_after: 3,
            },
        );
        dom.rebuild_in_place();

        drive(&mut dom, Duration::from_millis(300)).await;
        let stopped_at = RESET_TICKS.load(Ordering::SeqCst);
        assert!(stopped_at >= 3);

        drive(&mut dom, Duration::from_millis(100)).await;
        assert_eq!(RESET_TICKS.load(Ordering::SeqCst), stopped_at);
    }
}
