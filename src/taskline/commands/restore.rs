use crate::commands::{Change, CmdResult};
use crate::error::Result;
use crate::model::Item;
use crate::store::{Bucket, DataStore};

use super::helpers::{persist, renumber, resolve_in};

/// Moves archived items back to the end of the active bucket. `expr` is resolved
/// against archive IDs.
pub fn run<S: DataStore>(store: &mut S, expr: &str) -> Result<CmdResult> {
    let archive = store.load_archive()?;
    let ids = resolve_in(&archive, expr)?;

    let mut result = CmdResult::default();
    if ids.is_empty() {
        return Ok(result);
    }

    let mut active = store.load_active()?;
    let (restored, mut kept): (Vec<Item>, Vec<Item>) = archive
        .into_iter()
        .partition(|item| ids.binary_search(&item.id).is_ok());
    active.extend(restored);

    renumber(&mut active);
    renumber(&mut kept);

    persist(store, Bucket::Active, &active)?;
    persist(store, Bucket::Archive, &kept)?;

    result.report(Change::Restored, ids);
    Ok(result)
}
