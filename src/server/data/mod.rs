//! Data access layer repositories.
//!
//! Repositories provide an abstraction over database operations, organized by
//! domain. Each repository is generic over [`sea_orm::ConnectionTrait`] so the
//! same code runs against the pooled connection or inside a
//! `DatabaseTransaction` — the issue-creation workflow relies on this to run
//! its insert and decrement on one transaction handle.

pub mod alert;
pub mod inventory;
pub mod issue;
pub mod report;
pub mod type_line;
pub mod user;
