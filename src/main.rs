#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use arsenal::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use arsenal::server::scheduler::cron::start_scheduler;
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let db = startup::connect_to_database(&config).await.unwrap();
        startup::prepare_report_storage(&config).await.unwrap();
        start_scheduler(&db, &config).await.unwrap();

        tracing::info!("Starting server");

        let state = AppState {
            db,
            report_dir: config.report_storage_dir.clone().into(),
            expiry_warning_days: config.expiry_warning_days,
        };

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(state);
        router = router.merge(server_routes);

        Ok(router)
    })
}
