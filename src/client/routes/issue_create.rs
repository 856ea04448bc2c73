use dioxus::document::Title;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::components::Page,
    model::inventory::{AmmoTypeLineDto, StockLotDto},
};

#[component]
pub fn IssueCreate() -> Element {
    let mut lots = use_signal(Vec::<StockLotDto>::new);
    let mut type_lines = use_signal(Vec::<AmmoTypeLineDto>::new);

    let selected_lot = use_signal(String::new);
    let quantity = use_signal(String::new);
    let issue_date = use_signal(String::new);
    let selected_type_line = use_signal(String::new);
    let feedback = use_signal(|| None::<Result<String, String>>);

    #[cfg(feature = "web")]
    {
        let lots_future = use_resource(|| async move {
            crate::client::util::fetch::get_json::<Vec<StockLotDto>>("/api/inventory").await
        });

        match &*lots_future.read_unchecked() {
            Some(Ok(data)) => lots.set(data.clone()),
            Some(Err(err)) => {
                tracing::error!(err);
            }
            None => (),
        }

        let lines_future = use_resource(|| async move {
            crate::client::util::fetch::get_json::<Vec<AmmoTypeLineDto>>("/api/ammo-type-lines")
                .await
        });

        match &*lines_future.read_unchecked() {
            Some(Ok(data)) => type_lines.set(data.clone()),
            Some(Err(err)) => {
                tracing::error!(err);
            }
            None => (),
        }
    }

    let on_submit = {
        #[allow(unused_mut, unused_variables)]
        let mut feedback = feedback;

        move |_event: FormEvent| {
            #[cfg(feature = "web")]
            {
                use chrono::NaiveDate;

                use crate::model::issue::{CreateIssueDto, IssueCreatedDto};

                let lot_id = selected_lot.read().parse::<i32>();
                let qty = quantity.read().parse::<i32>();
                let date = NaiveDate::parse_from_str(&issue_date.read(), "%Y-%m-%d");
                let type_line_id = selected_type_line.read().parse::<i32>().ok();

                let (Ok(lot_id), Ok(qty), Ok(date)) = (lot_id, qty, date) else {
                    feedback.set(Some(Err(
                        "Please fill in all required fields".to_string()
                    )));
                    return;
                };

                spawn(async move {
                    let dto = CreateIssueDto {
                        inventory_stock_id: lot_id,
                        user_id: 1,
                        issue_date: date,
                        issue_quantity: qty,
                        type_line_id,
                    };

                    let result = crate::client::util::fetch::post_json::<_, IssueCreatedDto>(
                        "/api/issues",
                        &dto,
                    )
                    .await;

                    match result {
                        Ok(created) => feedback.set(Some(Ok(created.message))),
                        Err(err) => feedback.set(Some(Err(err))),
                    }
                });
            }
        }
    };

    let banner = feedback.read().as_ref().map(|result| match result {
        Ok(message) => ("alert alert-success", message.clone()),
        Err(message) => ("alert alert-error", message.clone()),
    });

    rsx!(
        Title { "New Issue | Arsenal" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[640px] p-6 flex flex-col gap-4",
                h1 { class: "text-2xl",
                    "Record Ammunition Issue"
                }
                if let Some((banner_class, message)) = banner {
                    div { class: "{banner_class}", "{message}" }
                }
                form { class: "flex flex-col gap-4", onsubmit: on_submit,
                    label { class: "form-control",
                        span { class: "label-text", "Stock lot" }
                        select {
                            class: "select select-bordered",
                            onchange: {
                                let mut selected_lot = selected_lot;
                                move |e: FormEvent| selected_lot.set(e.value())
                            },
                            option { value: "", "Select a lot" }
                            {lots.iter().map(|lot| rsx! {
                                option {
                                    value: "{lot.id}",
                                    "{lot.lot_number} ({lot.quantity} on hand)"
                                }
                            })}
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Quantity" }
                        input {
                            class: "input input-bordered",
                            r#type: "number",
                            min: "1",
                            oninput: {
                                let mut quantity = quantity;
                                move |e: FormEvent| quantity.set(e.value())
                            },
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Issue date" }
                        input {
                            class: "input input-bordered",
                            r#type: "date",
                            oninput: {
                                let mut issue_date = issue_date;
                                move |e: FormEvent| issue_date.set(e.value())
                            },
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Ammunition type line (optional)" }
                        select {
                            class: "select select-bordered",
                            onchange: {
                                let mut selected_type_line = selected_type_line;
                                move |e: FormEvent| selected_type_line.set(e.value())
                            },
                            option { value: "", "None" }
                            {type_lines.iter().map(|line| rsx! {
                                option {
                                    value: "{line.id}",
                                    "{line.caliber} ({line.category}, {line.nature})"
                                }
                            })}
                        }
                    }
                    button { class: "btn btn-primary", r#type: "submit",
                        "Create Issue"
                    }
                }
            }
        }
    )
}
