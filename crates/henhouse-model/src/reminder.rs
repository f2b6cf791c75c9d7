// SPDX-License-Identifier: Apache-2.0

use crate::parse_date_opt;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub reminder_date: String,
    pub reminder_type: String,
    pub is_completed: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    Pending,
    Completed,
    Overdue,
}

impl Reminder {
    /// Completed wins over overdue; a reminder whose date does not parse is
    /// never overdue.
    #[must_use]
    pub fn status(&self, today: NaiveDate) -> ReminderStatus {
        if self.is_completed {
            return ReminderStatus::Completed;
        }
        match parse_date_opt(&self.reminder_date) {
            Some(date) if date < today => ReminderStatus::Overdue,
            _ => ReminderStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(date: &str, completed: bool) -> Reminder {
        Reminder {
            id: 1,
            title: "Vaccination".to_string(),
            description: String::new(),
            reminder_date: date.to_string(),
            reminder_type: "vaccination".to_string(),
            is_completed: completed,
            created_at: String::new(),
        }
    }

    #[test]
    fn status_classification() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 12).expect("date");
        assert_eq!(
            reminder("2024-02-15", false).status(today),
            ReminderStatus::Pending
        );
        assert_eq!(
            reminder("2024-02-10", false).status(today),
            ReminderStatus::Overdue
        );
        assert_eq!(
            reminder("2024-02-10", true).status(today),
            ReminderStatus::Completed
        );
        assert_eq!(
            reminder("2024-02-12", false).status(today),
            ReminderStatus::Pending,
            "due today is pending, not overdue"
        );
    }

    #[test]
    fn unparseable_date_is_pending() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 12).expect("date");
        assert_eq!(reminder("soon", false).status(today), ReminderStatus::Pending);
    }
}
