// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// A recorded group of birds of one type/breed with shared purchase and
/// mortality counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoultryBatch {
    pub id: i64,
    pub bird_type: String,
    pub breed: String,
    pub current_count: i64,
    pub age_weeks: i64,
    pub purchase_date: String,
    pub purchase_price: f64,
    pub mortality_count: i64,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_serializes_with_camel_case_wire_names() {
        let batch = PoultryBatch {
            id: 1,
            bird_type: "Chicken".to_string(),
            breed: "Leghorn".to_string(),
            current_count: 300,
            age_weeks: 8,
            purchase_date: "2024-02-01".to_string(),
            purchase_price: 1800.0,
            mortality_count: 2,
            created_at: "2024-02-01T00:00:00.000Z".to_string(),
        };
        let value = serde_json::to_value(&batch).expect("serialize batch");
        assert_eq!(value["birdType"], "Chicken");
        assert_eq!(value["currentCount"], 300);
        assert_eq!(value["mortalityCount"], 2);
    }
}
