use dioxus::document::Title;
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{client::components::Page, model::report::ReportDto};

#[component]
pub fn Reports() -> Element {
    let mut reports = use_signal(Vec::<ReportDto>::new);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move {
            crate::client::util::fetch::get_json::<Vec<ReportDto>>("/api/reports").await
        });

        match &*future.read_unchecked() {
            Some(Ok(data)) => reports.set(data.clone()),
            Some(Err(err)) => {
                tracing::error!(err);
            }
            None => (),
        }
    }

    rsx!(
        Title { "Reports | Arsenal" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                h1 { class: "text-2xl",
                    "Reports"
                }
                p { class: "text-sm",
                    "Upload report PDFs through POST /api/reports; see the API docs for the multipart fields."
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Type" }
                                th { "Period" }
                                th { "Size" }
                                th { "Downloads" }
                                th { "" }
                            }
                        }
                        tbody {
                            {reports.iter().map(|report| {
                                let size_mb =
                                    format!("{:.1} MB", report.file_size as f64 / (1024.0 * 1024.0));

                                rsx! {
                                    tr {
                                        td { "{report.name}" }
                                        td { "{report.report_type}" }
                                        td { "{report.period}" }
                                        td { "{size_mb}" }
                                        td { "{report.download_count}" }
                                        td {
                                            a {
                                                href: "/api/reports/{report.id}/download",
                                                class: "btn btn-xs",
                                                "Download"
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
