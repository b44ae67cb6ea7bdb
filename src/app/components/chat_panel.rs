//! Follow-up questions about the screening results

use dioxus::prelude::*;

use super::{ActionButton, Card};
use crate::domain::models::ChatRole;
use crate::shared::hooks::ScreeningWorkflow;

fn message_class(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "c-chat__message c-chat__message--user",
        ChatRole::Agent => "c-chat__message c-chat__message--agent",
    }
}

#[component]
pub fn ChatPanel() -> Element {
    let workflow = use_context::<ScreeningWorkflow>();
    let mut input = use_signal(String::new);

    let state = workflow.state.read();
    let messages = state.chat().to_vec();
    let pending = state.is_chat_pending();
    drop(state);

    let mut send = move || {
        let text = input();
        if text.trim().is_empty() || pending {
            return;
        }
        input.set(String::new());
        workflow.send_chat(text);
    };

    rsx! {
        Card { title: "Ask about these results".to_string(),
            ul { class: "c-chat__messages",
                if messages.is_empty() {
                    li { class: "c-chat__empty",
                        "Ask about legal issues, work history or negative news."
                    }
                }
                for message in messages {
                    li {
                        key: "{message.id}",
                        class: message_class(message.role),
                        p { class: "c-chat__text", "{message.text}" }
                        span { class: "c-chat__time",
                            {message.created_at.format("%H:%M").to_string()}
                        }
                    }
                }
                if pending {
                    li { class: "c-chat__message c-chat__message--agent c-chat__message--pending",
                        "Thinking..."
                    }
                }
            }
            div { class: "c-chat__input-row",
                textarea {
                    class: "c-chat__input",
                    rows: "2",
                    placeholder: "Type a question... (Enter to send, Shift+Enter for new line)",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
                            evt.prevent_default();
                            send();
                        }
                    },
                }
                ActionButton {
                    busy: pending,
                    disabled: input().trim().is_empty(),
                    onclick: move |_| send(),
                    "Send"
                }
            }
        }
    }
}
