use dioxus::prelude::*;

use super::{Card, LoadingText};

/// Progress of a running screening
#[component]
pub fn StatusPanel(member_name: String, label: String) -> Element {
    rsx! {
        Card { title: format!("Screening {}", member_name),
            LoadingText { message: label }
            p { class: "c-status__hint", "Checking for updates every few seconds." }
        }
    }
}
