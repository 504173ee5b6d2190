use crate::error::Result;
use crate::ids::resolve_ids;
use crate::model::{Item, Task};
use crate::store::{id_set, Bucket, DataStore};
use tracing::{debug, info, warn};

/// Resolves `expr` against the IDs present in `items`.
pub fn resolve_in(items: &[Item], expr: &str) -> Result<Vec<u32>> {
    let ids = resolve_ids(expr, &id_set(items))?;
    debug!(expr, ?ids, "resolved identifiers");
    Ok(ids)
}

/// Rewrites IDs so that position `i` holds ID `i + 1`.
pub fn renumber(items: &mut [Item]) {
    for (pos, item) in items.iter_mut().enumerate() {
        item.id = pos as u32 + 1;
    }
}

pub fn persist<S: DataStore>(store: &mut S, bucket: Bucket, items: &[Item]) -> Result<()> {
    store.save_items(bucket, items)?;
    info!(bucket = bucket.name(), count = items.len(), "persisted snapshot");
    Ok(())
}

/// Loads the active bucket, resolves `expr` and hands every targeted item to `apply` in
/// ascending ID order. Nothing is saved when resolution fails or targets no item.
pub fn update_items<S, F>(store: &mut S, expr: &str, mut apply: F) -> Result<()>
where
    S: DataStore,
    F: FnMut(&mut Item),
{
    let mut items = store.load_active()?;
    let ids = resolve_in(&items, expr)?;
    if ids.is_empty() {
        return Ok(());
    }

    for item in items.iter_mut() {
        if ids.binary_search(&item.id).is_ok() {
            apply(item);
        }
    }
    persist(store, Bucket::Active, &items)
}

/// Like [`update_items`], but only tasks reach `apply`. Targeted notes are skipped.
pub fn update_tasks<S, F>(store: &mut S, expr: &str, mut apply: F) -> Result<()>
where
    S: DataStore,
    F: FnMut(u32, &mut Task),
{
    update_items(store, expr, |item| {
        let id = item.id;
        match item.as_task_mut() {
            Some(task) => apply(id, task),
            None => warn!(id, "skipping note in task-only operation"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TasklineError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn renumber_is_dense_from_one() {
        let mut items = StoreFixture::new()
            .with_note("a")
            .with_note("b")
            .with_note("c")
            .build()
            .load_active()
            .unwrap();
        items.remove(0);
        renumber(&mut items);

        let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(items[0].description, "b");
    }

    #[test]
    fn failed_resolution_does_not_save() {
        let mut store = StoreFixture::new().with_task("a").build();
        let result = update_items(&mut store, "4", |_| {});
        assert!(matches!(result, Err(TasklineError::InvalidIdentifiers(_))));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn empty_expression_does_not_save() {
        let mut store = StoreFixture::new().with_task("a").build();
        update_items(&mut store, "", |_| panic!("nothing is targeted")).unwrap();
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn notes_never_reach_task_updates() {
        let mut store = StoreFixture::new().with_note("n").with_task("t").build();
        let mut seen = Vec::new();
        update_tasks(&mut store, "1-2", |id, _| seen.push(id)).unwrap();
        assert_eq!(seen, vec![2]);
    }
}
