//! Copies item descriptions to the clipboard. Nothing is saved.
//!
//! The clipboard is passed in as a function. A clipboard failure becomes an error
//! message in the result; invalid identifiers still fail the command.

use crate::clipboard::format_descriptions;
use crate::commands::{Change, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::warn;

use super::helpers::resolve_in;

pub fn run<S, F>(store: &S, expr: &str, copy: F) -> Result<CmdResult>
where
    S: DataStore,
    F: FnOnce(&str) -> Result<()>,
{
    let items = store.load_active()?;
    let ids = resolve_in(&items, expr)?;

    let mut result = CmdResult::default();
    if ids.is_empty() {
        return Ok(result);
    }

    let descriptions: Vec<&str> = items
        .iter()
        .filter(|item| ids.binary_search(&item.id).is_ok())
        .map(|item| item.description.as_str())
        .collect();

    match copy(&format_descriptions(&descriptions)) {
        Ok(()) => result.report(Change::Copied, ids),
        Err(err) => {
            warn!(%err, "clipboard copy failed");
            result.add_message(CmdMessage::error(format!(
                "Could not copy to clipboard: {}",
                err
            )));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::TasklineError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn copies_descriptions_in_id_order() {
        let store = StoreFixture::new()
            .with_task("Write report")
            .with_note("Buy milk")
            .with_task("Call plumber")
            .build();

        let mut copied = String::new();
        let result = run(&store, "3,1", |text| {
            copied = text.to_string();
            Ok(())
        })
        .unwrap();

        assert_eq!(copied, "Write report\nCall plumber");
        assert_eq!(result.ids(Change::Copied), &[1, 3]);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn notes_are_copied_too() {
        let store = StoreFixture::new().with_note("Idea").build();
        let mut copied = String::new();
        run(&store, "1", |text| {
            copied = text.to_string();
            Ok(())
        })
        .unwrap();
        assert_eq!(copied, "Idea");
    }

    #[test]
    fn invalid_ids_never_reach_the_clipboard() {
        let store = StoreFixture::new().with_task("a").build();
        let result = run(&store, "1,9", |_| panic!("nothing should be copied"));
        assert!(matches!(result, Err(TasklineError::InvalidIdentifiers(_))));
    }

    #[test]
    fn empty_expression_copies_nothing() {
        let store = StoreFixture::new().with_task("a").build();
        let result = run(&store, "", |_| panic!("nothing should be copied")).unwrap();
        assert!(result.affected.is_empty());
    }

    #[test]
    fn clipboard_failure_becomes_an_error_message() {
        let store = StoreFixture::new().with_task("a").build();
        let result = run(&store, "1", |_| {
            Err(TasklineError::Clipboard("no clipboard".into()))
        })
        .unwrap();

        assert!(result.ids(Change::Copied).is_empty());
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.messages[0].content.contains("no clipboard"));
    }
}
