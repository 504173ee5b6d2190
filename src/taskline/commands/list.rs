//! Read-only listings. None of these save anything.
//!
//! Board and timeline views carry the [`Overview`](crate::stats::Overview) of the
//! active bucket; searches and filtered lists only carry their groups.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Item, TaskStatus};
use crate::stats::{group_by_board, group_by_date, overview};
use crate::store::DataStore;

pub fn by_board<S: DataStore>(store: &S, default_board: &str) -> Result<CmdResult> {
    let items = store.load_active()?;
    Ok(CmdResult::default()
        .with_groups(group_by_board(&items, default_board))
        .with_overview(overview(&items)))
}

pub fn by_date<S: DataStore>(store: &S) -> Result<CmdResult> {
    let items = store.load_active()?;
    Ok(CmdResult::default()
        .with_groups(group_by_date(&items))
        .with_overview(overview(&items)))
}

pub fn archive<S: DataStore>(store: &S) -> Result<CmdResult> {
    let items = store.load_archive()?;
    Ok(CmdResult::default().with_groups(group_by_date(&items)))
}

/// Active items whose description contains any of `terms`, ignoring case.
pub fn find<S: DataStore, T: AsRef<str>>(
    store: &S,
    terms: &[T],
    default_board: &str,
) -> Result<CmdResult> {
    let needles: Vec<String> = terms
        .iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    let matches: Vec<Item> = store
        .load_active()?
        .into_iter()
        .filter(|item| {
            let haystack = item.description.to_lowercase();
            needles.iter().any(|needle| haystack.contains(needle))
        })
        .collect();

    Ok(matched(&matches, default_board))
}

fn matched(items: &[Item], default_board: &str) -> CmdResult {
    let mut result = CmdResult::default().with_groups(group_by_board(items, default_board));
    if items.is_empty() {
        result.add_message(CmdMessage::info("No items matched"));
    }
    result
}

/// A single `list` filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Starred,
    Status(TaskStatus),
    Tasks,
    Notes,
    Board(String),
}

impl Filter {
    /// Attribute names and their aliases map to attribute filters; anything else names
    /// a board.
    pub fn parse(term: &str) -> Self {
        let term = term.trim();
        match term.to_lowercase().as_str() {
            "star" | "starred" => Filter::Starred,
            "done" | "checked" | "complete" => Filter::Status(TaskStatus::Complete),
            "progress" | "started" | "begun" => Filter::Status(TaskStatus::InProgress),
            "pending" | "unchecked" | "incomplete" => Filter::Status(TaskStatus::Pending),
            "canceled" | "cancelled" => Filter::Status(TaskStatus::Canceled),
            "task" | "tasks" | "todo" => Filter::Tasks,
            "note" | "notes" => Filter::Notes,
            _ => Filter::Board(term.strip_prefix('@').unwrap_or(term).to_string()),
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::Starred => item.is_starred,
            Filter::Status(status) => item.status() == Some(*status),
            Filter::Tasks => item.is_task(),
            Filter::Notes => !item.is_task(),
            Filter::Board(board) => item.on_board(board),
        }
    }
}

/// Active items matching every filter in `terms`.
pub fn by_attributes<S: DataStore, T: AsRef<str>>(
    store: &S,
    terms: &[T],
    default_board: &str,
) -> Result<CmdResult> {
    let filters: Vec<Filter> = terms
        .iter()
        .filter(|t| !t.as_ref().trim().is_empty())
        .map(|t| Filter::parse(t.as_ref()))
        .collect();

    let matches: Vec<Item> = store
        .load_active()?
        .into_iter()
        .filter(|item| filters.iter().all(|f| f.matches(item)))
        .collect();

    Ok(matched(&matches, default_board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{boards, star};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn sample() -> InMemoryStore {
        let mut store = StoreFixture::new()
            .with_note("Buy milk")
            .with_task("Write report")
            .with_task_in("Review report", TaskStatus::Complete)
            .with_task_in("Call plumber", TaskStatus::Canceled)
            .build();
        boards::move_items(&mut store, "2-3", &["work".to_string()], "My Board").unwrap();
        star::toggle(&mut store, "2").unwrap();
        store
    }

    fn ids(result: &CmdResult) -> Vec<Vec<u32>> {
        result
            .groups
            .iter()
            .map(|g| g.items.iter().map(|i| i.id).collect())
            .collect()
    }

    #[test]
    fn board_view_has_groups_and_overview() {
        let result = by_board(&sample(), "My Board").unwrap();
        let titles: Vec<&str> = result.groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["My Board", "work"]);
        assert_eq!(ids(&result), vec![vec![1, 4], vec![2, 3]]);

        let o = result.overview.unwrap();
        assert_eq!((o.complete, o.pending, o.notes, o.percent), (1, 1, 1, 50));
    }

    #[test]
    fn timeline_groups_by_date() {
        let result = by_date(&sample()).unwrap();
        assert_eq!(result.groups.len(), 1);
        assert_eq!(result.groups[0].items.len(), 4);
        assert!(result.overview.is_some());
    }

    #[test]
    fn archive_view_reads_archive_only() {
        let store = StoreFixture::new()
            .with_task("live")
            .with_archived_task("old", TaskStatus::Complete)
            .build();
        let result = archive(&store).unwrap();
        assert_eq!(result.groups[0].items[0].description, "old");
        assert!(result.overview.is_none());
    }

    #[test]
    fn find_is_case_insensitive_any_term() {
        let result = find(&sample(), &["REPORT", "milk"], "My Board").unwrap();
        assert_eq!(ids(&result), vec![vec![1], vec![2, 3]]);

        let result = find(&sample(), &["nothing"], "My Board").unwrap();
        assert!(result.groups.is_empty());
        assert_eq!(result.messages[0].content, "No items matched");
    }

    #[test]
    fn attribute_filters_combine() {
        let store = sample();
        assert_eq!(
            ids(&by_attributes(&store, &["pending"], "My Board").unwrap()),
            vec![vec![2]]
        );
        assert_eq!(
            ids(&by_attributes(&store, &["tasks", "@work"], "My Board").unwrap()),
            vec![vec![2, 3]]
        );
        assert_eq!(
            ids(&by_attributes(&store, &["star", "done"], "My Board").unwrap()),
            Vec::<Vec<u32>>::new()
        );
        assert_eq!(
            ids(&by_attributes(&store, &["notes"], "My Board").unwrap()),
            vec![vec![1]]
        );
    }

    #[test]
    fn filter_aliases() {
        assert_eq!(Filter::parse("checked"), Filter::Status(TaskStatus::Complete));
        assert_eq!(Filter::parse("begun"), Filter::Status(TaskStatus::InProgress));
        assert_eq!(Filter::parse("@home"), Filter::Board("home".into()));
        assert_eq!(Filter::parse("Groceries"), Filter::Board("Groceries".into()));
    }
}
