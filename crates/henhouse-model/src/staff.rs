// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub employee_name: String,
    pub position: String,
    pub phone: String,
    pub email: String,
    pub hire_date: String,
    pub salary: f64,
    pub payment_frequency: String,
    pub is_active: bool,
    pub created_at: String,
}

/// `employee_id` is an informal reference; `employee_name` is denormalized
/// from the employee collection at create time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub payment_date: String,
    pub amount: f64,
    pub payment_period_start: String,
    pub payment_period_end: String,
    pub payment_method: String,
    pub notes: String,
    pub created_at: String,
}
