// SPDX-License-Identifier: Apache-2.0

//! Live aggregates for the dashboard and report endpoints.
//!
//! Every function takes `today` explicitly so the date windows are
//! deterministic under test.

use chrono::{Datelike, Days, Months, NaiveDate};
use henhouse_model::{
    parse_date_opt, DashboardStats, FinancialReport, HealthReport, InventoryReport,
    ProductionReport, ReportData,
};

use crate::MockDb;

/// Inclusive date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    fn contains(self, raw: &str) -> bool {
        parse_date_opt(raw).is_some_and(|date| date >= self.start && date <= self.end)
    }

    fn days(self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Trailing seven days ending at `today`, and the seven before that.
fn weekly_windows(today: NaiveDate) -> (DateWindow, DateWindow) {
    let start = today - Days::new(6);
    let current = DateWindow { start, end: today };
    let previous = DateWindow {
        start: start - Days::new(7),
        end: start - Days::new(1),
    };
    (current, previous)
}

/// Calendar month containing `today`, and the month before it.
fn monthly_windows(today: NaiveDate) -> (DateWindow, DateWindow) {
    let start = today.with_day(1).unwrap_or(today);
    let end = (start + Months::new(1)) - Days::new(1);
    let prev_start = start - Months::new(1);
    let previous = DateWindow {
        start: prev_start,
        end: start - Days::new(1),
    };
    (DateWindow { start, end }, previous)
}

/// Calendar year containing `today`, and the year before it.
fn yearly_windows(today: NaiveDate) -> (DateWindow, DateWindow) {
    let start = today.with_day(1).and_then(|d| d.with_month(1)).unwrap_or(today);
    let end = (start + Months::new(12)) - Days::new(1);
    let prev_start = start - Months::new(12);
    let previous = DateWindow {
        start: prev_start,
        end: start - Days::new(1),
    };
    (DateWindow { start, end }, previous)
}

/// Window pair for a report period name. Callers validate the period string
/// before reaching here; unknown input falls back to monthly.
#[must_use]
pub fn period_windows(period: &str, today: NaiveDate) -> (DateWindow, DateWindow) {
    match period {
        "weekly" => weekly_windows(today),
        "yearly" => yearly_windows(today),
        _ => monthly_windows(today),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percent change of `current` against `previous`; 0 when there is no
/// previous signal to compare against.
fn pct_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        round2((current - previous) / previous * 100.0)
    }
}

fn feed_stock(db: &MockDb) -> f64 {
    let bought: f64 = db.feed_items.list().iter().map(|f| f.quantity_kg).sum();
    let used: f64 = db
        .feed_consumption
        .list()
        .iter()
        .map(|c| c.quantity_used)
        .sum();
    round2((bought - used).max(0.0))
}

#[must_use]
pub fn dashboard_stats(db: &MockDb, today: NaiveDate) -> DashboardStats {
    let (month, _) = monthly_windows(today);
    let soon = DateWindow {
        start: today,
        end: today + Days::new(7),
    };

    let total_birds: i64 = db.batches.list().iter().map(|b| b.current_count).sum();
    let total_eggs: i64 = db.productions.list().iter().map(|p| p.eggs_collected).sum();

    let monthly_revenue: f64 = db
        .sales
        .list()
        .iter()
        .filter(|s| month.contains(&s.sale_date))
        .map(|s| s.total_amount)
        .sum();
    let monthly_expenses: f64 = db
        .expenses
        .list()
        .iter()
        .filter(|e| month.contains(&e.expense_date))
        .map(|e| e.amount)
        .sum();

    let upcoming_reminders = db
        .reminders
        .list()
        .iter()
        .filter(|r| !r.is_completed && soon.contains(&r.reminder_date))
        .count() as i64;
    let health_alerts = db
        .health_records
        .list()
        .iter()
        .filter(|h| h.next_due_date.as_deref().is_some_and(|d| soon.contains(d)))
        .count() as i64;

    DashboardStats {
        total_birds,
        total_eggs,
        monthly_revenue: round2(monthly_revenue),
        monthly_expenses: round2(monthly_expenses),
        profit_loss: round2(monthly_revenue - monthly_expenses),
        feed_stock: feed_stock(db),
        upcoming_reminders,
        health_alerts,
    }
}

#[must_use]
pub fn report_data(db: &MockDb, period: &str, today: NaiveDate) -> ReportData {
    let (window, previous) = period_windows(period, today);

    let eggs_in = |w: DateWindow| -> i64 {
        db.productions
            .list()
            .iter()
            .filter(|p| w.contains(&p.production_date))
            .map(|p| p.eggs_collected)
            .sum()
    };
    let total_eggs = eggs_in(window);
    let previous_eggs = eggs_in(previous);

    let total_birds: i64 = db.batches.list().iter().map(|b| b.current_count).sum();
    let dead: i64 = db.batches.list().iter().map(|b| b.mortality_count).sum();
    let mortality_rate = if total_birds + dead == 0 {
        0.0
    } else {
        round2(dead as f64 / (total_birds + dead) as f64 * 100.0)
    };

    let total_revenue: f64 = db
        .sales
        .list()
        .iter()
        .filter(|s| window.contains(&s.sale_date))
        .map(|s| s.total_amount)
        .sum();
    let total_expenses: f64 = db
        .expenses
        .list()
        .iter()
        .filter(|e| window.contains(&e.expense_date))
        .map(|e| e.amount)
        .sum();
    let profit = total_revenue - total_expenses;
    let profit_margin = if total_revenue == 0.0 {
        0.0
    } else {
        round2(profit / total_revenue * 100.0)
    };

    let treatments: Vec<_> = db
        .health_records
        .list()
        .into_iter()
        .filter(|h| window.contains(&h.treatment_date))
        .collect();
    let soon = DateWindow {
        start: today,
        end: today + Days::new(7),
    };
    let upcoming_due = db
        .health_records
        .list()
        .iter()
        .filter(|h| h.next_due_date.as_deref().is_some_and(|d| soon.contains(d)))
        .count() as i64;

    ReportData {
        production: ProductionReport {
            total_eggs,
            average_daily: round2(total_eggs as f64 / window.days() as f64),
            monthly_trend: pct_change(total_eggs as f64, previous_eggs as f64),
        },
        inventory: InventoryReport {
            total_birds,
            mortality_rate,
            feed_stock: feed_stock(db),
        },
        financial: FinancialReport {
            total_revenue: round2(total_revenue),
            total_expenses: round2(total_expenses),
            profit: round2(profit),
            profit_margin,
        },
        health: HealthReport {
            total_treatments: treatments.len() as i64,
            upcoming_due,
            health_cost: round2(treatments.iter().map(|h| h.cost).sum()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use henhouse_model::{EggProduction, Expense, HealthRecord, Reminder, Sale};

    fn date(raw: &str) -> NaiveDate {
        raw.parse().expect("test date")
    }

    fn ts() -> String {
        "2024-03-01T00:00:00.000Z".to_string()
    }

    fn production(day: &str, eggs: i64) -> EggProduction {
        EggProduction {
            id: 0,
            production_date: day.to_string(),
            eggs_collected: eggs,
            broken_eggs: 0,
            notes: String::new(),
            created_at: String::new(),
        }
    }

    fn sale(day: &str, total: f64) -> Sale {
        Sale {
            id: 0,
            sale_date: day.to_string(),
            product_type: "eggs".to_string(),
            quantity: 1,
            unit_price: total,
            total_amount: total,
            customer_name: String::new(),
            customer_contact: String::new(),
            payment_status: "paid".to_string(),
            created_at: String::new(),
        }
    }

    fn expense(day: &str, amount: f64) -> Expense {
        Expense {
            id: 0,
            expense_date: day.to_string(),
            category: "feed".to_string(),
            description: String::new(),
            amount,
            supplier: String::new(),
            receipt_number: String::new(),
            created_at: String::new(),
        }
    }

    #[test]
    fn monthly_window_covers_the_whole_calendar_month() {
        let (window, previous) = monthly_windows(date("2024-02-15"));
        assert_eq!(window.start, date("2024-02-01"));
        assert_eq!(window.end, date("2024-02-29"));
        assert_eq!(previous.start, date("2024-01-01"));
        assert_eq!(previous.end, date("2024-01-31"));
    }

    #[test]
    fn dashboard_stats_count_only_the_current_month() {
        let db = MockDb::empty();
        db.sales.insert(sale("2024-03-05", 300.0), ts());
        db.sales.insert(sale("2024-02-20", 999.0), ts());
        db.expenses.insert(expense("2024-03-02", 120.0), ts());

        let stats = dashboard_stats(&db, date("2024-03-15"));
        assert_eq!(stats.monthly_revenue, 300.0);
        assert_eq!(stats.monthly_expenses, 120.0);
        assert_eq!(stats.profit_loss, 180.0);
    }

    #[test]
    fn upcoming_reminders_skip_completed_and_distant() {
        let db = MockDb::empty();
        let reminder = |day: &str, done: bool| Reminder {
            id: 0,
            title: String::new(),
            description: String::new(),
            reminder_date: day.to_string(),
            reminder_type: "other".to_string(),
            is_completed: done,
            created_at: String::new(),
        };
        db.reminders.insert(reminder("2024-03-16", false), ts());
        db.reminders.insert(reminder("2024-03-16", true), ts());
        db.reminders.insert(reminder("2024-04-01", false), ts());

        let stats = dashboard_stats(&db, date("2024-03-15"));
        assert_eq!(stats.upcoming_reminders, 1);
    }

    #[test]
    fn feed_stock_never_goes_negative() {
        let db = MockDb::seeded();
        let stats = dashboard_stats(&db, date("2024-03-15"));
        assert_eq!(stats.feed_stock, 1450.0);

        let drained = MockDb::empty();
        drained.feed_consumption.insert(
            henhouse_model::FeedConsumption {
                id: 0,
                feed_id: 1,
                consumption_date: "2024-03-01".to_string(),
                quantity_used: 10.0,
                notes: String::new(),
                feed_type: String::new(),
                created_at: String::new(),
            },
            ts(),
        );
        assert_eq!(dashboard_stats(&drained, date("2024-03-15")).feed_stock, 0.0);
    }

    #[test]
    fn report_trend_compares_adjacent_windows() {
        let db = MockDb::empty();
        db.productions.insert(production("2024-03-10", 300), ts());
        db.productions.insert(production("2024-02-10", 200), ts());

        let report = report_data(&db, "monthly", date("2024-03-15"));
        assert_eq!(report.production.total_eggs, 300);
        assert_eq!(report.production.monthly_trend, 50.0);
    }

    #[test]
    fn report_margin_handles_zero_revenue() {
        let db = MockDb::empty();
        db.expenses.insert(expense("2024-03-02", 50.0), ts());
        let report = report_data(&db, "monthly", date("2024-03-15"));
        assert_eq!(report.financial.profit, -50.0);
        assert_eq!(report.financial.profit_margin, 0.0);
    }

    #[test]
    fn yearly_report_spans_the_calendar_year() {
        let db = MockDb::empty();
        db.productions.insert(production("2024-01-02", 100), ts());
        db.productions.insert(production("2024-11-20", 50), ts());
        db.productions.insert(production("2023-12-31", 999), ts());
        let report = report_data(&db, "yearly", date("2024-06-01"));
        assert_eq!(report.production.total_eggs, 150);
    }

    #[test]
    fn health_report_counts_window_treatments_and_upcoming_due() {
        let db = MockDb::empty();
        db.health_records.insert(
            HealthRecord {
                id: 0,
                treatment_type: "vaccination".to_string(),
                treatment_name: "IB".to_string(),
                treatment_date: "2024-03-03".to_string(),
                next_due_date: Some("2024-03-18".to_string()),
                notes: String::new(),
                cost: 40.0,
                created_at: String::new(),
            },
            ts(),
        );
        let report = report_data(&db, "monthly", date("2024-03-15"));
        assert_eq!(report.health.total_treatments, 1);
        assert_eq!(report.health.upcoming_due, 1);
        assert_eq!(report.health.health_cost, 40.0);
    }
}
