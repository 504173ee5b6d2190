use super::{Bucket, DataStore};
use crate::error::{Result, TasklineError};
use crate::model::Item;

/// In-memory store for testing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    active: Vec<Item>,
    archive: Vec<Item>,
    simulate_write_error: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful saves, across both buckets.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    fn bucket(&self, bucket: Bucket) -> &Vec<Item> {
        match bucket {
            Bucket::Active => &self.active,
            Bucket::Archive => &self.archive,
        }
    }
}

impl DataStore for InMemoryStore {
    fn load_items(&self, bucket: Bucket) -> Result<Vec<Item>> {
        let mut items = self.bucket(bucket).clone();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    fn save_items(&mut self, bucket: Bucket, items: &[Item]) -> Result<()> {
        if self.simulate_write_error {
            return Err(TasklineError::Store("Simulated write error".to_string()));
        }
        let target = match bucket {
            Bucket::Active => &mut self.active,
            Bucket::Archive => &mut self.archive,
        };
        *target = items.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ItemProperties, TaskStatus};

    pub const FIXTURE_DATE: &str = "Mon Sep 02 2019";
    pub const FIXTURE_TIMESTAMP: i64 = 1567434272855;

    /// Builds a store with dense ids in insertion order, one bucket at a time.
    pub struct StoreFixture {
        pub store: InMemoryStore,
        active: Vec<Item>,
        archive: Vec<Item>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                active: Vec::new(),
                archive: Vec::new(),
            }
        }

        fn props(id: usize, description: &str) -> ItemProperties {
            ItemProperties {
                id: id as u32,
                date: FIXTURE_DATE.to_string(),
                timestamp: FIXTURE_TIMESTAMP,
                description: description.to_string(),
                boards: vec!["My Board".to_string()],
                ..Default::default()
            }
        }

        pub fn with_note(mut self, description: &str) -> Self {
            let props = Self::props(self.active.len() + 1, description);
            self.active.push(Item::note(props));
            self
        }

        pub fn with_task(self, description: &str) -> Self {
            self.with_task_in(description, TaskStatus::Pending)
        }

        pub fn with_task_in(mut self, description: &str, status: TaskStatus) -> Self {
            let props = Self::props(self.active.len() + 1, description).with_status(status);
            self.active.push(Item::task(props));
            self
        }

        pub fn with_item(mut self, item: Item) -> Self {
            self.active.push(item);
            self
        }

        pub fn with_archived_task(mut self, description: &str, status: TaskStatus) -> Self {
            let props = Self::props(self.archive.len() + 1, description).with_status(status);
            self.archive.push(Item::task(props));
            self
        }

        pub fn build(mut self) -> InMemoryStore {
            self.store.active = self.active;
            self.store.archive = self.archive;
            self.store
        }
    }
}
