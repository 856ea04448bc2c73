//! Arsenal: ammunition inventory and issue tracking platform.
//!
//! A Dioxus fullstack application. The `server` feature enables the Axum API
//! backend (inventory, issues, alerts, reports, users) backed by SeaORM;
//! without it only the shared DTO models are compiled for the web client.

pub mod model;

#[cfg(feature = "server")]
pub mod server;
