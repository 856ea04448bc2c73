pub mod alert_sweep {
    /// Cron expression for the alert sweep
    /// Runs every 15 minutes at the top of the minute
    pub const CRON_EXPRESSION: &str = "0 */15 * * * *";
}
