use dioxus::prelude::*;

use super::{Card, LoadingText};
use crate::domain::workflow::Section;
use crate::shared::hooks::ScreeningWorkflow;

/// Citations or generated queries, closable with ×
#[component]
pub fn SectionCard(section: Section) -> Element {
    let workflow = use_context::<ScreeningWorkflow>();
    let state = workflow.state.read();

    let items: Vec<String> = match section {
        Section::Citations => state
            .results()
            .map(|results| results.citations.clone())
            .unwrap_or_default(),
        Section::Queries => state.queries().to_vec(),
    };
    let refreshing = section == Section::Queries && state.is_loading_queries();
    drop(state);

    rsx! {
        Card {
            title: section.title().to_string(),
            on_close: move |_| workflow.dismiss_section(section),
            if refreshing {
                LoadingText { message: "Refreshing queries...".to_string() }
            }
            ul { class: "c-section-list",
                for item in items {
                    li { class: "c-section-list__item",
                        if section == Section::Citations {
                            a {
                                class: "c-section-list__link",
                                href: "{item}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "• {item} ↗"
                            }
                        } else {
                            "• {item}"
                        }
                    }
                }
            }
        }
    }
}
