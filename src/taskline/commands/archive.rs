use crate::commands::{Change, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Item;
use crate::store::{Bucket, DataStore};
use tracing::debug;

use super::helpers::{persist, renumber};

/// Moves every complete or canceled task to the archive.
///
/// Archived items are appended after the existing archive, keeping their relative
/// order, and both buckets are renumbered densely from 1.
pub fn clear<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let active = store.load_active()?;
    let mut archive = store.load_archive()?;

    let (closed, mut remaining): (Vec<Item>, Vec<Item>) = active
        .into_iter()
        .partition(|item| item.status().is_some_and(|s| s.is_closed()));

    let mut result = CmdResult::default();
    if closed.is_empty() {
        return Ok(result);
    }

    let archived_ids: Vec<u32> = closed.iter().map(|item| item.id).collect();
    archive.extend(closed);

    renumber(&mut remaining);
    renumber(&mut archive);
    debug!(
        archived = archived_ids.len(),
        active = remaining.len(),
        "renumbered after clear"
    );

    persist(store, Bucket::Archive, &archive)?;
    persist(store, Bucket::Active, &remaining)?;

    result.report(Change::Archived, archived_ids);
    Ok(result)
}

/// Renumbers the active bucket so IDs are 1..=n again.
pub fn rearrange<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut items = store.load_active()?;
    renumber(&mut items);
    persist(store, Bucket::Active, &items)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Rearranged ids of all items"));
    Ok(result)
}
