// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: i64,
    pub treatment_type: String,
    pub treatment_name: String,
    pub treatment_date: String,
    pub next_due_date: Option<String>,
    pub notes: String,
    pub cost: f64,
    pub created_at: String,
}
