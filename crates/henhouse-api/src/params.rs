// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use henhouse_model::ReminderStatus;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl ReportPeriod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// `?period=` defaults to monthly; anything else is a 400.
pub fn parse_report_period(params: &HashMap<String, String>) -> Result<ReportPeriod, ApiError> {
    match params.get("period").map(String::as_str) {
        None | Some("monthly") => Ok(ReportPeriod::Monthly),
        Some("weekly") => Ok(ReportPeriod::Weekly),
        Some("yearly") => Ok(ReportPeriod::Yearly),
        Some(other) => Err(ApiError::invalid_param("period", other)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReminderFilter {
    #[default]
    All,
    Status(ReminderStatus),
}

pub fn parse_reminder_filter(params: &HashMap<String, String>) -> Result<ReminderFilter, ApiError> {
    match params.get("status").map(String::as_str) {
        None | Some("all") => Ok(ReminderFilter::All),
        Some("pending") => Ok(ReminderFilter::Status(ReminderStatus::Pending)),
        Some("completed") => Ok(ReminderFilter::Status(ReminderStatus::Completed)),
        Some("overdue") => Ok(ReminderFilter::Status(ReminderStatus::Overdue)),
        Some(other) => Err(ApiError::invalid_param("status", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn period_defaults_to_monthly() {
        assert_eq!(
            parse_report_period(&params(&[])).expect("default"),
            ReportPeriod::Monthly
        );
        assert_eq!(
            parse_report_period(&params(&[("period", "weekly")])).expect("weekly"),
            ReportPeriod::Weekly
        );
        assert!(parse_report_period(&params(&[("period", "hourly")])).is_err());
    }

    #[test]
    fn reminder_filter_parses_all_statuses() {
        assert_eq!(
            parse_reminder_filter(&params(&[])).expect("default"),
            ReminderFilter::All
        );
        assert_eq!(
            parse_reminder_filter(&params(&[("status", "overdue")])).expect("overdue"),
            ReminderFilter::Status(ReminderStatus::Overdue)
        );
        assert!(parse_reminder_filter(&params(&[("status", "soonish")])).is_err());
    }
}
