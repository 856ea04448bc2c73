use dioxus::document::Title;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{client::components::Page, model::inventory::StockLotDto};

#[component]
pub fn Inventory() -> Element {
    let mut lots = use_signal(Vec::<StockLotDto>::new);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move {
            crate::client::util::fetch::get_json::<Vec<StockLotDto>>("/api/inventory").await
        });

        match &*future.read_unchecked() {
            Some(Ok(data)) => lots.set(data.clone()),
            Some(Err(err)) => {
                tracing::error!(err);
            }
            None => (),
        }
    }

    rsx!(
        Title { "Inventory | Arsenal" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                h1 { class: "text-2xl",
                    "Inventory"
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Lot Number" }
                                th { "Quantity" }
                                th { "Stock Date" }
                                th { "Expiry Date" }
                                th { "Min Threshold" }
                            }
                        }
                        tbody {
                            {lots.iter().map(|lot| {
                                let expiry = lot
                                    .expiry_date
                                    .map(|d| d.to_string())
                                    .unwrap_or_else(|| "-".to_string());
                                let threshold = lot
                                    .min_threshold
                                    .map(|t| t.to_string())
                                    .unwrap_or_else(|| "-".to_string());

                                rsx! {
                                    tr {
                                        td { "{lot.id}" }
                                        td { "{lot.lot_number}" }
                                        td { "{lot.quantity}" }
                                        td { "{lot.stock_date}" }
                                        td { "{expiry}" }
                                        td { "{threshold}" }
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
