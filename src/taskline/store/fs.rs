use super::{Bucket, DataStore};
use crate::error::{Result, TasklineError};
use crate::model::Item;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// File backed store rooted at the taskline directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bucket_path(&self, bucket: Bucket) -> PathBuf {
        match bucket {
            Bucket::Active => self.root.join("storage").join("storage.json"),
            Bucket::Archive => self.root.join("archive").join("archive.json"),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(TasklineError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_items(&self, bucket: Bucket) -> Result<Vec<Item>> {
        let path = self.bucket_path(bucket);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).map_err(TasklineError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: BTreeMap<u32, Item> =
            serde_json::from_str(&content).map_err(TasklineError::Serialization)?;

        let mut items: Vec<Item> = records.into_values().collect();
        items.sort_by_key(|item| item.id);
        debug!(bucket = bucket.name(), count = items.len(), "loaded items");
        Ok(items)
    }

    fn save_items(&mut self, bucket: Bucket, items: &[Item]) -> Result<()> {
        let path = self.bucket_path(bucket);
        let dir = path.parent().ok_or_else(|| {
            TasklineError::Store(format!("Invalid store path: {}", path.display()))
        })?;
        self.ensure_dir(dir)?;

        let records: BTreeMap<u32, &Item> = items.iter().map(|item| (item.id, item)).collect();
        let content =
            serde_json::to_string_pretty(&records).map_err(TasklineError::Serialization)?;

        // Atomic write: temp file, then rename over the snapshot
        let tmp_file = dir.join(format!(".{}-{}.tmp", bucket.name(), Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(TasklineError::Io)?;
        fs::rename(&tmp_file, &path).map_err(TasklineError::Io)?;

        debug!(bucket = bucket.name(), count = items.len(), "saved items");
        Ok(())
    }
}
