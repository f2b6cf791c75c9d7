// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EggProduction {
    pub id: i64,
    pub production_date: String,
    pub eggs_collected: i64,
    pub broken_eggs: i64,
    pub notes: String,
    pub created_at: String,
}
