use dioxus::prelude::*;

use super::{ActionButton, Card};

/// Identifier input of the `search` stage
#[component]
pub fn SearchForm(pending: bool, on_search: EventHandler<String>) -> Element {
    let mut nm_id = use_signal(String::new);

    rsx! {
        Card { title: "Find a Network Member".to_string(),
            form {
                class: "c-search-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if !pending {
                        on_search.call(nm_id());
                    }
                },
                label { class: "c-search-form__label", r#for: "nm-id", "Network Member ID" }
                div { class: "c-search-form__row",
                    input {
                        id: "nm-id",
                        class: "c-search-form__input",
                        r#type: "text",
                        placeholder: "e.g. 6023085",
                        value: "{nm_id}",
                        disabled: pending,
                        oninput: move |evt| nm_id.set(evt.value()),
                    }
                    // submits the enclosing form
                    ActionButton {
                        submit: true,
                        busy: pending,
                        if pending { "Looking up..." } else { "Look up" }
                    }
                }
            }
        }
    }
}
