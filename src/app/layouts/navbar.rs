use dioxus::prelude::*;

/// Page header with the back and restart controls
#[component]
pub fn Navbar(
    can_go_back: bool,
    on_back: EventHandler<()>,
    on_reset: EventHandler<()>,
) -> Element {
    rsx! {
        nav { class: "c-navbar",
            div { class: "c-navbar__side",
                if can_go_back {
                    button {
                        class: "c-navbar__button",
                        onclick: move |_| on_back.call(()),
                        "← Back"
                    }
                }
            }
            h1 { class: "c-navbar__title", "Negative News Screening Agent" }
            div { class: "c-navbar__side c-navbar__side--end",
                if can_go_back {
                    button {
                        class: "c-navbar__button",
                        onclick: move |_| on_reset.call(()),
                        "New Screening"
                    }
                }
            }
        }
    }
}
