//! HTTP controller endpoints for the arsenal web API.
//!
//! Axum handlers for inventory, issues, alerts, reports, users, and the
//! dashboard. Controllers handle HTTP concerns only: extract inputs, call the
//! service layer, and map models to DTOs. They are annotated with utoipa for
//! OpenAPI documentation.

pub mod alert;
pub mod dashboard;
pub mod inventory;
pub mod issue;
pub mod report;
pub mod status;
pub mod user;
