// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::sync::RwLock;

/// Store-side view of a record: the store owns id assignment and the
/// `created_at` stamp; everything else belongs to the caller.
pub trait MockRecord: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn set_created_at(&mut self, timestamp: String);
}

macro_rules! impl_mock_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl MockRecord for $ty {
                fn id(&self) -> i64 {
                    self.id
                }
                fn set_id(&mut self, id: i64) {
                    self.id = id;
                }
                fn set_created_at(&mut self, timestamp: String) {
                    self.created_at = timestamp;
                }
            }
        )+
    };
}

impl_mock_record!(
    henhouse_model::PoultryBatch,
    henhouse_model::FeedItem,
    henhouse_model::FeedConsumption,
    henhouse_model::HealthRecord,
    henhouse_model::EggProduction,
    henhouse_model::Sale,
    henhouse_model::Expense,
    henhouse_model::Employee,
    henhouse_model::Payment,
    henhouse_model::Client,
    henhouse_model::Reminder,
    henhouse_model::User,
);

/// One lock-guarded mock collection. Contents live for the process lifetime
/// and reset on restart; a single server instance owns the store.
pub struct Collection<T: MockRecord> {
    rows: RwLock<Vec<T>>,
}

impl<T: MockRecord> Default for Collection<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<T: MockRecord> Collection<T> {
    #[must_use]
    pub fn seeded(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<T>> {
        self.rows.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<T>> {
        self.rows.write().unwrap_or_else(|e| e.into_inner())
    }

    #[must_use]
    pub fn list(&self) -> Vec<T> {
        self.read().clone()
    }

    #[must_use]
    pub fn list_sorted_by(&self, cmp: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
        let mut rows = self.list();
        rows.sort_by(cmp);
        rows
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<T> {
        self.read().iter().find(|row| row.id() == id).cloned()
    }

    #[must_use]
    pub fn find(&self, predicate: impl FnMut(&&T) -> bool) -> Option<T> {
        self.read().iter().find(predicate).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Assigns `max(id) + 1` (1 for an empty collection) so ids stay unique
    /// across interleaved deletes, stamps `created_at`, and appends.
    pub fn insert(&self, mut record: T, timestamp: String) -> T {
        let mut rows = self.write();
        let next_id = rows.iter().map(MockRecord::id).max().unwrap_or(0) + 1;
        record.set_id(next_id);
        record.set_created_at(timestamp);
        rows.push(record.clone());
        record
    }

    /// Linear scan by id; applies `patch` in place and returns the updated
    /// row. Id and `created_at` are not the patch's to change.
    pub fn update(&self, id: i64, patch: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.write();
        let row = rows.iter_mut().find(|row| row.id() == id)?;
        patch(row);
        Some(row.clone())
    }

    /// Splices out the matching row; `false` when the id is absent, so a
    /// repeated delete maps to 404 instead of a crash.
    pub fn remove(&self, id: i64) -> bool {
        let mut rows = self.write();
        match rows.iter().position(|row| row.id() == id) {
            Some(index) => {
                rows.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use henhouse_model::EggProduction;

    fn production(date: &str, eggs: i64) -> EggProduction {
        EggProduction {
            id: 0,
            production_date: date.to_string(),
            eggs_collected: eggs,
            broken_eggs: 0,
            notes: String::new(),
            created_at: String::new(),
        }
    }

    fn ts() -> String {
        "2024-03-01T00:00:00.000Z".to_string()
    }

    #[test]
    fn insert_assigns_one_greater_than_previous_maximum() {
        let rows = Collection::default();
        let a = rows.insert(production("2024-01-01", 10), ts());
        let b = rows.insert(production("2024-01-02", 20), ts());
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        assert!(rows.remove(1));
        let c = rows.insert(production("2024-01-03", 30), ts());
        assert_eq!(c.id, 3, "ids never collide after a delete");
    }

    #[test]
    fn insert_stamps_created_at() {
        let rows = Collection::default();
        let row = rows.insert(production("2024-01-01", 10), ts());
        assert_eq!(row.created_at, ts());
    }

    #[test]
    fn update_missing_id_is_none_and_mutates_nothing() {
        let rows = Collection::default();
        rows.insert(production("2024-01-01", 10), ts());
        let before = rows.list();
        assert!(rows.update(99, |row| row.eggs_collected = 0).is_none());
        assert_eq!(rows.list(), before);
    }

    #[test]
    fn remove_is_idempotent_safe() {
        let rows = Collection::default();
        rows.insert(production("2024-01-01", 10), ts());
        assert!(rows.remove(1));
        assert!(!rows.remove(1));
        assert!(rows.is_empty());
    }

    #[test]
    fn list_sorted_by_orders_rows() {
        let rows = Collection::default();
        rows.insert(production("2024-01-14", 420), ts());
        rows.insert(production("2024-01-15", 450), ts());
        let sorted = rows.list_sorted_by(|a, b| b.production_date.cmp(&a.production_date));
        assert_eq!(sorted[0].production_date, "2024-01-15");
    }
}
