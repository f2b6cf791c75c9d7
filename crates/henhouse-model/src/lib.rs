// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Henhouse entity model.
//!
//! Flat records with scalar fields, serialized with the camelCase wire names
//! the dashboard expects. Ids are assigned by the store; `created_at` is a
//! server-side RFC 3339 timestamp. Domain dates travel as `YYYY-MM-DD`
//! strings and are parsed only where a calendar comparison is needed.

mod client;
mod error;
mod feed;
mod finance;
mod flock;
mod health;
mod production;
mod reminder;
mod settings;
mod staff;
mod stats;
mod user;

pub use client::Client;
pub use error::ValidationError;
pub use feed::{FeedConsumption, FeedItem};
pub use finance::{Expense, Sale};
pub use flock::PoultryBatch;
pub use health::HealthRecord;
pub use production::EggProduction;
pub use reminder::{Reminder, ReminderStatus};
pub use settings::{
    NotificationSettings, PreferenceSettings, ProfileSettings, SecuritySettings, SettingsPatch,
    UserSettings,
};
pub use staff::{Employee, Payment};
pub use stats::{
    DashboardStats, FinancialReport, HealthReport, InventoryReport, ProductionReport, ReportData,
};
pub use user::{Role, User};

pub const CRATE_NAME: &str = "henhouse-model";

/// Parses a `YYYY-MM-DD` domain date.
pub fn parse_date(field: &'static str, raw: &str) -> Result<chrono::NaiveDate, ValidationError> {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(field))
}

/// Lenient variant for stored rows: rows carry whatever string the client
/// sent, so calendar math skips rows that do not parse.
#[must_use]
pub fn parse_date_opt(raw: &str) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_and_rejects_garbage() {
        assert!(parse_date("purchase_date", "2024-01-15").is_ok());
        assert!(parse_date("purchase_date", "01/15/2024").is_err());
        assert!(parse_date("purchase_date", "").is_err());
    }

    #[test]
    fn parse_date_opt_is_lenient() {
        assert!(parse_date_opt("not-a-date").is_none());
        assert_eq!(
            parse_date_opt("2024-02-10"),
            chrono::NaiveDate::from_ymd_opt(2024, 2, 10)
        );
    }
}
