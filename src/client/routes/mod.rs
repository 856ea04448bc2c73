pub mod alerts;
pub mod dashboard;
pub mod inventory;
pub mod issue_create;
pub mod issues;
pub mod not_found;
pub mod reports;
pub mod users;

pub use alerts::Alerts;
pub use dashboard::Dashboard;
pub use inventory::Inventory;
pub use issue_create::IssueCreate;
pub use issues::Issues;
pub use not_found::NotFound;
pub use reports::Reports;
pub use users::Users;
