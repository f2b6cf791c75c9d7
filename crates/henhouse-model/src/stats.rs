// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Dashboard card numbers, computed live from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_birds: i64,
    pub total_eggs: i64,
    pub monthly_revenue: f64,
    pub monthly_expenses: f64,
    pub profit_loss: f64,
    pub feed_stock: f64,
    pub upcoming_reminders: i64,
    pub health_alerts: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub production: ProductionReport,
    pub inventory: InventoryReport,
    pub financial: FinancialReport,
    pub health: HealthReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionReport {
    pub total_eggs: i64,
    pub average_daily: f64,
    /// Percent change against the preceding window of the same length.
    pub monthly_trend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub total_birds: i64,
    pub mortality_rate: f64,
    pub feed_stock: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub profit: f64,
    pub profit_margin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub total_treatments: i64,
    pub upcoming_due: i64,
    pub health_cost: f64,
}
