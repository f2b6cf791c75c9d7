// SPDX-License-Identifier: Apache-2.0

//! Create/update payloads. POST and PUT share a shape per collection; fields
//! the dashboard may omit are `Option` and default at the store boundary.
//! Auth payloads keep every field optional so the handlers can answer with
//! the documented presence-check messages instead of a decode error.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoultryBatchPayload {
    pub bird_type: String,
    pub breed: String,
    pub current_count: i64,
    pub age_weeks: i64,
    pub purchase_date: String,
    pub purchase_price: f64,
    pub mortality_count: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItemPayload {
    pub feed_type: String,
    pub quantity_kg: f64,
    pub unit_price: f64,
    pub supplier: String,
    pub purchase_date: String,
    pub expiry_date: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedConsumptionPayload {
    pub feed_id: i64,
    pub consumption_date: String,
    pub quantity_used: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecordPayload {
    pub treatment_type: String,
    pub treatment_name: String,
    pub treatment_date: String,
    pub next_due_date: Option<String>,
    pub notes: Option<String>,
    pub cost: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPayload {
    pub production_date: String,
    pub eggs_collected: i64,
    pub broken_eggs: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePayload {
    pub sale_date: String,
    pub product_type: String,
    pub quantity: i64,
    pub unit_price: f64,
    /// Derived as `quantity * unit_price` when omitted.
    pub total_amount: Option<f64>,
    pub customer_name: String,
    pub customer_contact: Option<String>,
    pub payment_status: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayload {
    pub expense_date: String,
    pub category: String,
    pub description: Option<String>,
    pub amount: f64,
    pub supplier: Option<String>,
    pub receipt_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub employee_name: String,
    pub position: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub hire_date: String,
    pub salary: f64,
    pub payment_frequency: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPayload {
    pub employee_id: i64,
    pub payment_date: String,
    pub amount: f64,
    pub payment_period_start: Option<String>,
    pub payment_period_end: Option<String>,
    pub payment_method: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    pub client_name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub client_type: String,
    pub credit_limit: f64,
    pub outstanding_balance: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPayload {
    pub title: String,
    pub description: Option<String>,
    pub reminder_date: String,
    pub reminder_type: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteReminderPayload {
    pub is_completed: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_payload_defaults_mortality() {
        let payload: PoultryBatchPayload = serde_json::from_value(serde_json::json!({
            "birdType": "Chicken",
            "breed": "Leghorn",
            "currentCount": 300,
            "ageWeeks": 8,
            "purchaseDate": "2024-02-01",
            "purchasePrice": 1800.0
        }))
        .expect("parse payload");
        assert_eq!(payload.mortality_count, None);
    }

    #[test]
    fn batch_payload_rejects_missing_required_field() {
        let result: Result<PoultryBatchPayload, _> = serde_json::from_value(serde_json::json!({
            "birdType": "Chicken"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn login_payload_tolerates_missing_fields() {
        let payload: LoginPayload = serde_json::from_value(serde_json::json!({})).expect("parse");
        assert!(payload.email.is_none());
    }
}
