use dioxus::document::Title;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{components::Page, router::Route},
    model::issue::IssueDetailDto,
};

#[component]
pub fn Issues() -> Element {
    let mut issues = use_signal(Vec::<IssueDetailDto>::new);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move {
            crate::client::util::fetch::get_json::<Vec<IssueDetailDto>>("/api/issues/joined").await
        });

        match &*future.read_unchecked() {
            Some(Ok(data)) => issues.set(data.clone()),
            Some(Err(err)) => {
                tracing::error!(err);
            }
            None => (),
        }
    }

    rsx!(
        Title { "Issues | Arsenal" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                div { class: "flex items-center justify-between",
                    h1 { class: "text-2xl",
                        "Issues"
                    }
                    Link {
                        to: Route::IssueCreate {},
                        class: "btn btn-primary",
                        "New Issue"
                    }
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Lot" }
                                th { "Requester" }
                                th { "Date" }
                                th { "Quantity" }
                                th { "Caliber" }
                            }
                        }
                        tbody {
                            {issues.iter().map(|issue| {
                                let lot = issue
                                    .lot_number
                                    .clone()
                                    .unwrap_or_else(|| format!("#{}", issue.inventory_stock_id));
                                let requester = issue
                                    .requester_name
                                    .clone()
                                    .unwrap_or_else(|| format!("#{}", issue.user_id));
                                let caliber =
                                    issue.caliber.clone().unwrap_or_else(|| "-".to_string());

                                rsx! {
                                    tr {
                                        td { "{issue.id}" }
                                        td { "{lot}" }
                                        td { "{requester}" }
                                        td { "{issue.issue_date}" }
                                        td { "{issue.issue_quantity}" }
                                        td { "{caliber}" }
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
