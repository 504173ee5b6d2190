use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TasklineError};
use crate::model::{normalize_boards, Item, ItemProperties, Priority};
use crate::store::{Bucket, DataStore};
use chrono::{DateTime, Local};

use super::helpers::persist;

/// Everything needed to create an item, before it has an ID.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub description: String,
    pub boards: Vec<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<i64>,
}

impl Draft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    /// Splits command line words into boards (`@name`) and description.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut boards = Vec::new();
        let mut description = Vec::new();
        for word in words {
            for part in word.as_ref().split_whitespace() {
                if part.len() > 1 && part.starts_with('@') {
                    boards.push(part.to_string());
                } else {
                    description.push(part.to_string());
                }
            }
        }
        Self {
            description: description.join(" "),
            boards,
            ..Default::default()
        }
    }

    pub fn with_boards(mut self, boards: Vec<String>) -> Self {
        self.boards.extend(boards);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_due_date(mut self, due_date: i64) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

pub fn task<S: DataStore>(
    store: &mut S,
    draft: Draft,
    at: DateTime<Local>,
    default_board: &str,
) -> Result<CmdResult> {
    let mut props = properties(store, &draft, at, default_board)?;
    props.priority = draft.priority.map(|p| i64::from(p.level()));
    props.due_date = draft.due_date;
    insert(store, Item::task(props))
}

pub fn note<S: DataStore>(
    store: &mut S,
    draft: Draft,
    at: DateTime<Local>,
    default_board: &str,
) -> Result<CmdResult> {
    let props = properties(store, &draft, at, default_board)?;
    insert(store, Item::note(props))
}

fn properties<S: DataStore>(
    store: &S,
    draft: &Draft,
    at: DateTime<Local>,
    default_board: &str,
) -> Result<ItemProperties> {
    let description = draft.description.trim();
    if description.is_empty() {
        return Err(TasklineError::EmptyDescription);
    }

    let next_id = store
        .load_active()?
        .iter()
        .map(|item| item.id)
        .max()
        .unwrap_or(0)
        + 1;

    Ok(ItemProperties::new(next_id, description)
        .stamped(at)
        .with_boards(normalize_boards(&draft.boards, default_board)))
}

fn insert<S: DataStore>(store: &mut S, item: Item) -> Result<CmdResult> {
    let mut items = store.load_active()?;
    items.push(item.clone());
    persist(store, Bucket::Active, &items)?;

    let kind = if item.is_task() { "task" } else { "note" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Created {}: {}", kind, item.id)));
    Ok(result.with_created(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStatus;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2019, 9, 2, 16, 24, 32).unwrap()
    }

    #[test]
    fn task_gets_next_id_and_defaults() {
        let mut store = StoreFixture::new().with_note("a").with_note("b").build();
        let result = task(&mut store, Draft::new("Write docs"), at(), "My Board").unwrap();

        let created = result.created.unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(created.date, "Mon Sep 02 2019");
        assert_eq!(created.timestamp, at().timestamp_millis());
        assert_eq!(created.boards, vec!["My Board".to_string()]);
        assert_eq!(created.status(), Some(TaskStatus::Pending));
        assert_eq!(created.as_task().unwrap().priority, Priority::Normal);

        assert_eq!(store.load_active().unwrap().len(), 3);
        assert_eq!(result.messages[0].content, "Created task: 3");
    }

    #[test]
    fn new_id_follows_highest_after_a_gap() {
        let mut store = StoreFixture::new()
            .with_note("a")
            .with_item(Item::note(ItemProperties::new(3, "c")))
            .build();
        let created = task(&mut store, Draft::new("d"), at(), "My Board")
            .unwrap()
            .created
            .unwrap();
        assert_eq!(created.id, 4);
    }

    #[test]
    fn task_keeps_priority_due_date_and_boards() {
        let mut store = InMemoryStore::new();
        let draft = Draft::from_words(["@coding Review", "PR @reviews"])
            .with_priority(Priority::Medium)
            .with_due_date(1567500000000);
        let created = task(&mut store, draft, at(), "My Board")
            .unwrap()
            .created
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.description, "Review PR");
        assert_eq!(
            created.boards,
            vec!["coding".to_string(), "reviews".to_string()]
        );
        let t = created.as_task().unwrap();
        assert_eq!(t.priority, Priority::Medium);
        assert_eq!(t.due_date, Some(1567500000000));
    }

    #[test]
    fn note_uses_configured_default_board() {
        let mut store = InMemoryStore::new();
        let created = note(&mut store, Draft::new("idea"), at(), "Inbox")
            .unwrap()
            .created
            .unwrap();
        assert!(!created.is_task());
        assert_eq!(created.boards, vec!["Inbox".to_string()]);
        assert_eq!(store.load_active().unwrap()[0], created);
    }

    #[test]
    fn empty_description_is_rejected() {
        let mut store = InMemoryStore::new();
        let draft = Draft::from_words(["@work"]);
        assert!(matches!(
            note(&mut store, draft, at(), "My Board"),
            Err(TasklineError::EmptyDescription)
        ));
        assert!(store.load_active().unwrap().is_empty());
    }
}
