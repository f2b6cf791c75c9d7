// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: i64,
    pub feed_type: String,
    pub quantity_kg: f64,
    pub unit_price: f64,
    pub supplier: String,
    pub purchase_date: String,
    pub expiry_date: String,
    pub created_at: String,
}

/// A consumption entry references a feed item informally via `feed_id`;
/// `feed_type` is denormalized at create time and never kept in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedConsumption {
    pub id: i64,
    pub feed_id: i64,
    pub consumption_date: String,
    pub quantity_used: f64,
    pub notes: String,
    pub feed_type: String,
    pub created_at: String,
}
