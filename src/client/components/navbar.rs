use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBoxesStacked;
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaBoxesStacked
                    }
                    p { class: "text-xl",
                        "Arsenal"
                    }
                    p { class: "text-xs",
                        "v0.1.0"
                    }
                }
            }
            div {
                class: "navbar-end",
                ul { class: "menu menu-horizontal px-1",
                    li {
                        Link { to: Route::Dashboard {}, "Dashboard" }
                    }
                    li {
                        Link { to: Route::Inventory {}, "Inventory" }
                    }
                    li {
                        Link { to: Route::Issues {}, "Issues" }
                    }
                    li {
                        Link { to: Route::Alerts {}, "Alerts" }
                    }
                    li {
                        Link { to: Route::Reports {}, "Reports" }
                    }
                    li {
                        Link { to: Route::Users {}, "Users" }
                    }
                    li {
                        a { href: "/api/docs", "API Docs" }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
