// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: i64,
    pub sale_date: String,
    pub product_type: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_amount: f64,
    pub customer_name: String,
    pub customer_contact: String,
    pub payment_status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub expense_date: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub supplier: String,
    pub receipt_number: String,
    pub created_at: String,
}
