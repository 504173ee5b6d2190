use crate::commands::{Change, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::update_items;

/// Flips the star of every targeted item, notes included.
pub fn toggle<S: DataStore>(store: &mut S, expr: &str) -> Result<CmdResult> {
    let mut starred = Vec::new();
    let mut unstarred = Vec::new();

    update_items(store, expr, |item| {
        if item.toggle_star() {
            starred.push(item.id);
        } else {
            unstarred.push(item.id);
        }
    })?;

    let mut result = CmdResult::default();
    result.report(Change::Starred, starred);
    result.report(Change::Unstarred, unstarred);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn star_then_toggle_pair() {
        let mut store = StoreFixture::new()
            .with_note("Test Note")
            .with_task("Test Task")
            .build();

        let result = toggle(&mut store, "1").unwrap();
        assert_eq!(result.ids(Change::Starred), &[1]);
        assert!(store.load_active().unwrap()[0].is_starred);

        let result = toggle(&mut store, "1,2").unwrap();
        assert_eq!(result.ids(Change::Unstarred), &[1]);
        assert_eq!(result.ids(Change::Starred), &[2]);

        let items = store.load_active().unwrap();
        assert!(!items[0].is_starred);
        assert!(items[1].is_starred);
    }

    #[test]
    fn star_leaves_lifecycle_alone() {
        let mut store = StoreFixture::new().with_task("t").build();
        let before = store.load_active().unwrap()[0].status();
        toggle(&mut store, "1").unwrap();
        assert_eq!(store.load_active().unwrap()[0].status(), before);
    }
}
