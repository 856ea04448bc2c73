use std::path::PathBuf;

use sea_orm::DatabaseConnection;

/// Shared state injected into every handler. The database handle is passed
/// explicitly rather than living in a module-level global so tests can swap
/// in an in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Directory report PDFs are stored under
    pub report_dir: PathBuf,
    /// Days ahead of a lot's expiry date at which the alert sweep warns
    pub expiry_warning_days: i64,
}

impl From<(DatabaseConnection, PathBuf, i64)> for AppState {
    fn from((db, report_dir, expiry_warning_days): (DatabaseConnection, PathBuf, i64)) -> Self {
        Self {
            db,
            report_dir,
            expiry_warning_days,
        }
    }
}
