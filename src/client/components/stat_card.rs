use dioxus::prelude::*;

#[component]
pub fn StatCard(title: &'static str, value: String) -> Element {
    rsx!(
        div { class: "stat bg-base-200 rounded-box",
            div { class: "stat-title",
                "{title}"
            }
            div { class: "stat-value",
                "{value}"
            }
        }
    )
}
