// SPDX-License-Identifier: Apache-2.0

//! In-memory mock database backing the farm service.
//!
//! Every collection lives for the process lifetime and resets on restart.
//! Handlers clone rows out and never hold a lock across an await point.

#![forbid(unsafe_code)]

pub mod collection;
mod seed;
pub mod stats;

pub use collection::{Collection, MockRecord};
pub use stats::{dashboard_stats, report_data};

use std::sync::RwLock;

use chrono::Utc;
use henhouse_model::{
    Client, EggProduction, Employee, Expense, FeedConsumption, FeedItem, HealthRecord, Payment,
    PoultryBatch, Reminder, Sale, SettingsPatch, User, UserSettings,
};
use sha2::{Digest, Sha256};

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

/// RFC 3339 with millisecond precision, matching the `createdAt` stamps the
/// dashboard already parses.
#[must_use]
pub fn now_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// SHA-256 hex digest. Stored at registration and never compared at login;
/// password verification is explicitly out of scope.
#[must_use]
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// The whole mock database. One instance per server, shared behind an `Arc`.
pub struct MockDb {
    pub batches: Collection<PoultryBatch>,
    pub feed_items: Collection<FeedItem>,
    pub feed_consumption: Collection<FeedConsumption>,
    pub health_records: Collection<HealthRecord>,
    pub productions: Collection<EggProduction>,
    pub sales: Collection<Sale>,
    pub expenses: Collection<Expense>,
    pub employees: Collection<Employee>,
    pub payments: Collection<Payment>,
    pub clients: Collection<Client>,
    pub reminders: Collection<Reminder>,
    pub users: Collection<User>,
    settings: RwLock<UserSettings>,
}

impl MockDb {
    /// Demo dataset the dashboard expects on a fresh process.
    #[must_use]
    pub fn seeded() -> Self {
        let now = now_timestamp();
        let db = Self {
            batches: Collection::seeded(seed::batches(&now)),
            feed_items: Collection::seeded(seed::feed_items(&now)),
            feed_consumption: Collection::seeded(seed::feed_consumption(&now)),
            health_records: Collection::seeded(seed::health_records(&now)),
            productions: Collection::seeded(seed::productions(&now)),
            sales: Collection::default(),
            expenses: Collection::default(),
            employees: Collection::seeded(seed::employees(&now)),
            payments: Collection::seeded(seed::payments(&now)),
            clients: Collection::seeded(seed::clients(&now)),
            reminders: Collection::seeded(seed::reminders(&now)),
            users: Collection::seeded(seed::users(&now)),
            settings: RwLock::new(seed::settings()),
        };
        tracing::debug!(
            batches = db.batches.len(),
            users = db.users.len(),
            "mock database seeded"
        );
        db
    }

    /// Empty store with only the default settings document. Used by tests
    /// that want deterministic aggregates.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            batches: Collection::default(),
            feed_items: Collection::default(),
            feed_consumption: Collection::default(),
            health_records: Collection::default(),
            productions: Collection::default(),
            sales: Collection::default(),
            expenses: Collection::default(),
            employees: Collection::default(),
            payments: Collection::default(),
            clients: Collection::default(),
            reminders: Collection::default(),
            users: Collection::default(),
            settings: RwLock::new(seed::settings()),
        }
    }

    #[must_use]
    pub fn settings(&self) -> UserSettings {
        self.settings
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Section-level merge: each section named in the patch replaces the
    /// stored section wholesale. Returns the merged document.
    pub fn update_settings(&self, patch: SettingsPatch) -> UserSettings {
        let mut guard = self.settings.write().unwrap_or_else(|e| e.into_inner());
        guard.apply(patch);
        guard.clone()
    }
}

impl Default for MockDb {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use henhouse_model::ProfileSettings;

    #[test]
    fn seeded_store_matches_demo_dataset() {
        let db = MockDb::seeded();
        assert_eq!(db.batches.len(), 2);
        assert_eq!(db.feed_items.len(), 2);
        assert_eq!(db.feed_consumption.len(), 1);
        assert_eq!(db.health_records.len(), 2);
        assert_eq!(db.productions.len(), 2);
        assert_eq!(db.employees.len(), 2);
        assert_eq!(db.payments.len(), 1);
        assert_eq!(db.clients.len(), 2);
        assert_eq!(db.reminders.len(), 2);
        assert_eq!(db.users.len(), 2);
        assert!(db.sales.is_empty());
        assert!(db.expenses.is_empty());
    }

    #[test]
    fn seeded_users_cover_both_roles() {
        let db = MockDb::seeded();
        let admin = db
            .users
            .find(|u| u.email == "admin@poultrymanager.com")
            .expect("admin seeded");
        assert_eq!(admin.role, henhouse_model::Role::Admin);
        assert!(admin.is_active);
    }

    #[test]
    fn settings_merge_replaces_only_named_sections() {
        let db = MockDb::seeded();
        let before = db.settings();
        let merged = db.update_settings(SettingsPatch {
            profile: Some(ProfileSettings {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: String::new(),
                farm_name: "Hilltop".to_string(),
                location: String::new(),
            }),
            notifications: None,
            preferences: None,
            security: None,
        });
        assert_eq!(merged.profile.first_name, "Jane");
        assert_eq!(merged.notifications, before.notifications);
        assert_eq!(merged.preferences, before.preferences);
        assert_eq!(db.settings().profile.farm_name, "Hilltop");
    }

    #[test]
    fn timestamp_has_millisecond_precision() {
        let ts = now_timestamp();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2024-01-01T00:00:00.000Z".len());
    }

    #[test]
    fn password_hash_is_hex_sha256() {
        let digest = hash_password("admin");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
