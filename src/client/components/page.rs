use dioxus::prelude::*;

/// Full-height page body below the fixed navbar.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or("");

    rsx!(
        div {
            class: "min-h-screen pt-16 p-4 {class}",
            {children}
        }
    )
}
