use dioxus::prelude::*;

use crate::domain::models::NetworkMember;

#[component]
fn Field(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "c-member__field",
            span { class: "c-member__label", "{label}" }
            p { class: "c-member__value", "{value}" }
        }
    }
}

/// Profile of the member under review
#[component]
pub fn MemberSidebar(member: NetworkMember) -> Element {
    rsx! {
        aside { class: "c-member",
            h2 { class: "c-member__heading", "NM details" }
            Field { label: "ID", value: member.nm_id.clone() }
            Field { label: "Name", value: member.name.clone() }
            Field { label: "Country", value: member.country.clone() }
            Field { label: "Council Name", value: member.council_name.clone() }
            Field { label: "Practice Area", value: member.practice_area.clone() }
            if !member.linkedin_url.is_empty() {
                div { class: "c-member__field",
                    span { class: "c-member__label", "LinkedIn" }
                    a {
                        class: "c-member__link",
                        href: "{member.linkedin_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View Profile ↗"
                    }
                }
            }

            h3 { class: "c-member__subheading", "Biography" }
            p { class: "c-member__bio", "{member.biography}" }

            h3 { class: "c-member__subheading", "Work History" }
            ul { class: "c-member__history",
                for entry in member.work_history.iter() {
                    li { class: "c-member__job",
                        p { class: "c-member__company", "{entry.company}" }
                        p { class: "c-member__title", "{entry.title}" }
                        span { class: "c-member__period", "{entry.period}" }
                    }
                }
            }
        }
    }
}
