//! Single-page screening workflow: search, details, screening, results

use dioxus::prelude::*;

use crate::app::components::{
    ActionButton, Card, ErrorMessage, LoadingText, MemberSidebar, ResultsView, SearchForm, StatusPanel,
};
use crate::app::layouts::Navbar;
use crate::domain::workflow::Stage;
use crate::shared::hooks::{use_screening_workflow, ScreeningWorkflow};

#[component]
pub fn ScreeningPage() -> Element {
    let workflow = use_screening_workflow();
    use_context_provider(|| workflow);

    let state = workflow.state.read();
    let stage = state.stage();
    let member = state.member().cloned();
    let error = state.error().map(str::to_string);
    let lookup_pending = state.is_lookup_pending();
    drop(state);

    rsx! {
        Navbar {
            can_go_back: stage != Stage::Search,
            on_back: move |_| workflow.go_back(),
            on_reset: move |_| workflow.reset(),
        }

        div { class: "c-page",
            if let Some(member) = member {
                MemberSidebar { member }
            }

            main { class: "c-page__main",
                if let Some(message) = error {
                    ErrorMessage {
                        message,
                        on_dismiss: move |_| workflow.clear_error(),
                    }
                }

                match stage {
                    Stage::Search => rsx! {
                        SearchForm {
                            pending: lookup_pending,
                            on_search: move |nm_id| workflow.lookup(nm_id),
                        }
                    },
                    Stage::Details => rsx! { DetailsPanel {} },
                    Stage::Screening => rsx! { ScreeningProgress {} },
                    Stage::Results => rsx! { ResultsView {} },
                }
            }
        }
    }
}

#[component]
fn DetailsPanel() -> Element {
    let workflow = use_context::<ScreeningWorkflow>();

    let state = workflow.state.read();
    let name = state.member().map(|m| m.name.clone()).unwrap_or_default();
    let starting = state.is_start_pending();
    drop(state);

    rsx! {
        Card { title: format!("Negative News Screening for {}", name),
            p { class: "c-details__text",
                "Run a screening across public records, news sources and legal databases."
            }
            if starting {
                LoadingText { message: "Starting screening...".to_string() }
            } else {
                ActionButton {
                    onclick: move |_| workflow.start(),
                    "Start Screening"
                }
            }
        }
    }
}

#[component]
fn ScreeningProgress() -> Element {
    let workflow = use_context::<ScreeningWorkflow>();

    let state = workflow.state.read();
    let name = state.member().map(|m| m.name.clone()).unwrap_or_default();
    let label = state
        .status()
        .map(|status| status.status.clone())
        .unwrap_or_else(|| "Starting screening...".to_string());
    drop(state);

    rsx! {
        StatusPanel { member_name: name, label }
    }
}
