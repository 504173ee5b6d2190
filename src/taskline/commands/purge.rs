use crate::commands::{Change, CmdResult};
use crate::error::Result;
use crate::store::{Bucket, DataStore};

use super::helpers::{persist, renumber, resolve_in};

/// Irreversibly drops archived items, then renumbers the archive.
pub fn run<S: DataStore>(store: &mut S, expr: &str) -> Result<CmdResult> {
    let mut archive = store.load_archive()?;
    let ids = resolve_in(&archive, expr)?;

    let mut result = CmdResult::default();
    if ids.is_empty() {
        return Ok(result);
    }

    archive.retain(|item| ids.binary_search(&item.id).is_err());
    renumber(&mut archive);
    persist(store, Bucket::Archive, &archive)?;

    result.report(Change::Purged, ids);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStatus;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn purge_drops_archived_items() {
        let mut store = StoreFixture::new()
            .with_task("live")
            .with_archived_task("a", TaskStatus::Complete)
            .with_archived_task("b", TaskStatus::Complete)
            .with_archived_task("c", TaskStatus::Canceled)
            .build();

        let result = run(&mut store, "1-2").unwrap();
        assert_eq!(result.ids(Change::Purged), &[1, 2]);

        let archive = store.load_archive().unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(archive[0].id, 1);
        assert_eq!(archive[0].description, "c");
        assert_eq!(store.load_active().unwrap().len(), 1);
    }
}
