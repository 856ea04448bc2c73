use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::components::{Page, StatCard},
    model::dashboard::DashboardStatsDto,
};

#[component]
pub fn Dashboard() -> Element {
    let mut stats = use_signal(|| None::<DashboardStatsDto>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move {
            crate::client::util::fetch::get_json::<DashboardStatsDto>("/api/dashboard/stats").await
        });

        match &*future.read_unchecked() {
            Some(Ok(data)) => stats.set(Some(data.clone())),
            Some(Err(err)) => {
                tracing::error!(err);
            }
            None => (),
        }
    }

    rsx!(
        Title { "Dashboard | Arsenal" }
        Meta {
            name: "description",
            content: "Ammunition inventory and issue tracking dashboard."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                h1 { class: "text-2xl",
                    "Dashboard"
                }
                if let Some(stats) = stats.read().as_ref() {
                    div { class: "stats stats-vertical lg:stats-horizontal shadow",
                        StatCard { title: "Rounds On Hand", value: stats.total_on_hand.to_string() }
                        StatCard { title: "Rounds Issued", value: stats.total_issued.to_string() }
                        StatCard { title: "Stock Lots", value: stats.lot_count.to_string() }
                        StatCard { title: "Open Alerts", value: stats.open_alert_count.to_string() }
                        StatCard { title: "Expiring Soon", value: stats.expiring_soon.to_string() }
                    }
                } else {
                    div { class: "skeleton h-32 w-full" }
                }
            }
        }
    )
}
