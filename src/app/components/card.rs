use dioxus::prelude::*;

#[component]
pub fn Card(
    title: Option<String>,
    on_close: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "c-card",
            if let Some(title) = title {
                div {
                    class: "c-card__header",
                    h3 {
                        class: "c-card__title",
                        "{title}"
                    }
                    if let Some(on_close) = on_close {
                        button {
                            class: "c-card__close",
                            title: "Close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
