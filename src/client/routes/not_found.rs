use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Arsenal" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-2",
                p { class: "text-4xl",
                    "404"
                }
                p {
                    "Page /{path} not found"
                }
            }
        }
    )
}
