//! # Storage Layer
//!
//! Taskline keeps two collections of items:
//!
//! - **Active** ([`Bucket::Active`]): everything ordinary commands see.
//! - **Archive** ([`Bucket::Archive`]): items moved out by `clear`, visible only to the
//!   archive listing, `restore` and `purge`.
//!
//! The [`DataStore`] trait is deliberately narrow: load a whole bucket, save a whole
//! bucket. Commands never patch a single record; they load a snapshot, transform it and
//! write the full snapshot back. That keeps renumbering (see
//! [`crate::commands::helpers::renumber`]) a plain rewrite.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON files on disk, written atomically.
//! - [`memory::InMemoryStore`]: no persistence, used by the command tests.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.taskline/
//! ├── storage/storage.json   # Active items, keyed by id
//! └── archive/archive.json   # Archived items, keyed by id
//! ```

use std::collections::BTreeSet;

use crate::error::Result;
use crate::model::Item;

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Active,
    Archive,
}

impl Bucket {
    pub fn name(&self) -> &'static str {
        match self {
            Bucket::Active => "active",
            Bucket::Archive => "archive",
        }
    }
}

/// Abstract interface for item storage.
///
/// `load_items` returns the bucket ordered by id. `save_items` replaces the bucket
/// with exactly the given items.
pub trait DataStore {
    fn load_items(&self, bucket: Bucket) -> Result<Vec<Item>>;

    fn save_items(&mut self, bucket: Bucket, items: &[Item]) -> Result<()>;

    fn load_active(&self) -> Result<Vec<Item>> {
        self.load_items(Bucket::Active)
    }

    fn load_archive(&self) -> Result<Vec<Item>> {
        self.load_items(Bucket::Archive)
    }

    fn save_active(&mut self, items: &[Item]) -> Result<()> {
        self.save_items(Bucket::Active, items)
    }

    fn save_archive(&mut self, items: &[Item]) -> Result<()> {
        self.save_items(Bucket::Archive, items)
    }
}

pub fn id_set(items: &[Item]) -> BTreeSet<u32> {
    items.iter().map(|item| item.id).collect()
}
