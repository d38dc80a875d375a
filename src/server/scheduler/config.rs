pub mod character {
    /// Cron expression for character reconciliation
    /// Runs every 12 hours at the top of the hour (00:00 and 12:00 UTC)
    pub const CRON_EXPRESSION: &str = "0 0 */12 * * *";
}
