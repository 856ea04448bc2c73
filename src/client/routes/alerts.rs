use dioxus::document::Title;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{client::components::Page, model::alert::AlertDto};

#[component]
pub fn Alerts() -> Element {
    let mut alerts = use_signal(Vec::<AlertDto>::new);
    let refresh = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || {
            let _ = refresh();

            async move {
                crate::client::util::fetch::get_json::<Vec<AlertDto>>("/api/alerts").await
            }
        });

        match &*future.read_unchecked() {
            Some(Ok(data)) => alerts.set(data.clone()),
            Some(Err(err)) => {
                tracing::error!(err);
            }
            None => (),
        }
    }

    #[allow(unused_variables)]
    let run_action = move |path: String| {
        #[cfg(feature = "web")]
        {
            let mut refresh = refresh;

            spawn(async move {
                if let Err(err) =
                    crate::client::util::fetch::post_empty::<AlertDto>(&path).await
                {
                    tracing::error!(err);
                }

                refresh.with_mut(|n| *n += 1);
            });
        }
    };

    rsx!(
        Title { "Alerts | Arsenal" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                h1 { class: "text-2xl",
                    "Alerts"
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Type" }
                                th { "Message" }
                                th { "Status" }
                                th { "Raised" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            {alerts.iter().map(|alert| {
                                let id = alert.id;
                                let live = alert.status == "open" || alert.status == "acknowledged";

                                rsx! {
                                    tr {
                                        td { "{alert.alert_type}" }
                                        td { "{alert.message}" }
                                        td {
                                            span { class: "badge", "{alert.status}" }
                                        }
                                        td { "{alert.created_at}" }
                                        td {
                                            div { class: "flex gap-1",
                                                if alert.status == "open" {
                                                    button {
                                                        class: "btn btn-xs",
                                                        onclick: move |_| {
                                                            #[cfg(feature = "web")]
                                                            {
                                                                let mut refresh = refresh;

                                                                spawn(async move {
                                                                    use crate::model::alert::{
                                                                        AcknowledgeAlertDto, AlertDto,
                                                                    };

                                                                    // Requester context comes from the logged in
                                                                    // user once there is one
                                                                    let result = crate::client::util::fetch::post_json::<_, AlertDto>(
                                                                        &format!("/api/alerts/{}/acknowledge", id),
                                                                        &AcknowledgeAlertDto { user_id: 1 },
                                                                    )
                                                                    .await;

                                                                    if let Err(err) = result {
                                                                        tracing::error!(err);
                                                                    }

                                                                    refresh.with_mut(|n| *n += 1);
                                                                });
                                                            }
                                                        },
                                                        "Acknowledge"
                                                    }
                                                }
                                                if live {
                                                    button {
                                                        class: "btn btn-xs",
                                                        onclick: move |_| run_action(
                                                            format!("/api/alerts/{}/resolve", id)
                                                        ),
                                                        "Resolve"
                                                    }
                                                    button {
                                                        class: "btn btn-xs btn-ghost",
                                                        onclick: move |_| run_action(
                                                            format!("/api/alerts/{}/dismiss", id)
                                                        ),
                                                        "Dismiss"
                                                    }
                                                }
                                            }
                                        }
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
