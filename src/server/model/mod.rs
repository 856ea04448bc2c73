//! Server application models and type definitions.
//!
//! Contains the shared application state handed to every Axum handler and
//! type aliases for the database entity models.

pub mod app;
pub mod db;
