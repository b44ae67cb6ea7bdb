use dioxus::prelude::*;

use super::{ActionButton, ActionTone, Card, ChatPanel, EmptyState, SectionCard};
use crate::domain::workflow::Section;
use crate::shared::hooks::ScreeningWorkflow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultTab {
    Identity,
    WorkHistory,
    NegativeNews,
}

impl ResultTab {
    const ALL: [ResultTab; 3] = [
        ResultTab::Identity,
        ResultTab::WorkHistory,
        ResultTab::NegativeNews,
    ];

    fn label(&self) -> &'static str {
        match self {
            ResultTab::Identity => "🪪 Identity Verification",
            ResultTab::WorkHistory => "📄 Work History",
            ResultTab::NegativeNews => "⚠️ Negative News",
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "c-tabs__tab c-tabs__tab--active"
    } else {
        "c-tabs__tab"
    }
}

/// Completed screening: tabs, actions, open sections, summary and chat
#[component]
pub fn ResultsView() -> Element {
    let workflow = use_context::<ScreeningWorkflow>();
    let mut active_tab = use_signal(|| ResultTab::NegativeNews);
    let mut chat_open = use_signal(|| false);

    let state = workflow.state.read();
    let summary = state
        .results()
        .map(|results| results.summary.clone())
        .unwrap_or_default();
    let member_name = state.member().map(|m| m.name.clone()).unwrap_or_default();
    let screening_id = state.screening_id().unwrap_or_default().to_string();
    let sections: Vec<Section> = state.sections().iter().collect();
    let loading_queries = state.is_loading_queries();
    drop(state);

    rsx! {
        h2 { class: "c-page__title", "Screening Results for {member_name}" }

        div { class: "c-tabs", role: "tablist",
            for tab in ResultTab::ALL {
                button {
                    class: tab_class(active_tab() == tab),
                    role: "tab",
                    onclick: move |_| active_tab.set(tab),
                    {tab.label()}
                }
            }
        }

        match active_tab() {
            ResultTab::Identity => rsx! {
                EmptyState {
                    icon: "🪪".to_string(),
                    title: "Identity verification data will be available in future phases.".to_string(),
                    description: "This section will contain identity verification results and confidence scores.".to_string(),
                }
            },
            ResultTab::WorkHistory => rsx! {
                EmptyState {
                    icon: "📄".to_string(),
                    title: "Work history verification data will be available in future phases.".to_string(),
                    description: "This section will contain employment verification and validation results.".to_string(),
                }
            },
            ResultTab::NegativeNews => rsx! {
                div { class: "c-results__actions",
                    ActionButton {
                        tone: ActionTone::Inspect,
                        onclick: move |_| workflow.load_queries(screening_id.clone()),
                        if loading_queries { "Loading Queries..." } else { "🔍 View Generated Queries" }
                    }
                    ActionButton {
                        tone: ActionTone::Inspect,
                        onclick: move |_| workflow.show_section(Section::Citations),
                        "🔗 View Citations"
                    }
                    ActionButton {
                        onclick: move |_| chat_open.toggle(),
                        if chat_open() { "Hide Conversation" } else { "Start a Conversation" }
                    }
                }

                for section in sections {
                    SectionCard { key: "{section:?}", section }
                }

                Card { title: "Screening Summary".to_string(),
                    div { class: "c-results__summary", dangerous_inner_html: "{summary}" }
                }

                if chat_open() {
                    ChatPanel {}
                }
            },
        }
    }
}
