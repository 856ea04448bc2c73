use dioxus::document::Title;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{client::components::Page, model::user::UserDto};

#[component]
pub fn Users() -> Element {
    let mut users = use_signal(Vec::<UserDto>::new);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move {
            crate::client::util::fetch::get_json::<Vec<UserDto>>("/api/users").await
        });

        match &*future.read_unchecked() {
            Some(Ok(data)) => users.set(data.clone()),
            Some(Err(err)) => {
                tracing::error!(err);
            }
            None => (),
        }
    }

    rsx!(
        Title { "Users | Arsenal" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                h1 { class: "text-2xl",
                    "Users"
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Username" }
                                th { "Name" }
                                th { "Rank" }
                                th { "Role" }
                                th { "Appointment" }
                            }
                        }
                        tbody {
                            {users.iter().map(|user| {
                                let appointment = user
                                    .appointment
                                    .clone()
                                    .unwrap_or_else(|| "-".to_string());

                                rsx! {
                                    tr {
                                        td { "{user.username}" }
                                        td { "{user.name}" }
                                        td { "{user.rank}" }
                                        td {
                                            span { class: "badge", "{user.role}" }
                                        }
                                        td { "{appointment}" }
                                    }
                                }
                            })}
                        }
                    }
                }
            }
        }
    )
}
