use crate::commands::{Change, CmdResult};
use crate::error::Result;
use crate::store::{Bucket, DataStore};

use super::helpers::{persist, renumber, resolve_in};

/// Removes items from the active bucket for good, then closes the gaps they leave.
pub fn run<S: DataStore>(store: &mut S, expr: &str) -> Result<CmdResult> {
    let mut items = store.load_active()?;
    let ids = resolve_in(&items, expr)?;

    let mut result = CmdResult::default();
    if ids.is_empty() {
        return Ok(result);
    }

    items.retain(|item| ids.binary_search(&item.id).is_err());
    renumber(&mut items);
    persist(store, Bucket::Active, &items)?;

    result.report(Change::Deleted, ids);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TasklineError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn delete_removes_and_renumbers() {
        let mut store = StoreFixture::new()
            .with_note("a")
            .with_task("b")
            .with_note("c")
            .with_task("d")
            .build();

        let result = run(&mut store, "1,3").unwrap();
        assert_eq!(result.ids(Change::Deleted), &[1, 3]);

        let items = store.load_active().unwrap();
        let summary: Vec<(u32, &str)> = items
            .iter()
            .map(|i| (i.id, i.description.as_str()))
            .collect();
        assert_eq!(summary, vec![(1, "b"), (2, "d")]);
    }

    #[test]
    fn delete_does_not_touch_archive() {
        let mut store = StoreFixture::new()
            .with_task("a")
            .with_archived_task("old", crate::model::TaskStatus::Complete)
            .build();

        run(&mut store, "1").unwrap();
        assert!(store.load_active().unwrap().is_empty());
        assert_eq!(store.load_archive().unwrap().len(), 1);
    }

    #[test]
    fn delete_unknown_id_fails() {
        let mut store = StoreFixture::new().with_note("a").build();
        assert!(matches!(
            run(&mut store, "1,2"),
            Err(TasklineError::InvalidIdentifiers(ids)) if ids == vec![2]
        ));
        assert_eq!(store.load_active().unwrap().len(), 1);
    }
}
