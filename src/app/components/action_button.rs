use dioxus::prelude::*;

/// Visual weight of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionTone {
    /// The one step that moves the screening forward
    #[default]
    Advance,
    /// Side views over data that is already loaded
    Inspect,
}

fn action_class(tone: ActionTone, busy: bool) -> String {
    let tone = match tone {
        ActionTone::Advance => "c-action--advance",
        ActionTone::Inspect => "c-action--inspect",
    };
    if busy {
        format!("c-action {tone} c-action--busy")
    } else {
        format!("c-action {tone}")
    }
}

/// Button for workflow steps. A busy action is disabled until its request settles.
#[component]
pub fn ActionButton(
    #[props(default)] tone: ActionTone,
    #[props(default)] busy: bool,
    #[props(default)] disabled: bool,
    /// Submits the enclosing form instead of handling clicks itself
    #[props(default)]
    submit: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: action_class(tone, busy),
            r#type: if submit { "submit" } else { "button" },
            disabled: disabled || busy,
            aria_busy: busy,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
