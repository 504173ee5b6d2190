//! # Domain Model: Notes and Tasks
//!
//! Every entry in taskline is an [`Item`]. Items share an identity (`id`), a creation
//! stamp (`date` + `timestamp`), a description, a star flag and a list of boards. What
//! differs is the [`ItemKind`]:
//!
//! - [`ItemKind::Note`]: plain text, no lifecycle.
//! - [`ItemKind::Task`]: carries a [`Task`] with lifecycle [`TaskStatus`], [`Priority`]
//!   and an optional due date.
//!
//! ## Lifecycle
//!
//! A task is in exactly one of four states: `Pending` (initial), `InProgress`,
//! `Complete` or `Canceled`. Transitions are driven by the commands in
//! [`crate::commands::lifecycle`]:
//!
//! | Operation | From | To |
//! |-----------|------|----|
//! | check     | Complete / any other | Pending / Complete |
//! | begin     | InProgress / any other | Pending / InProgress |
//! | cancel    | Canceled / any other | Pending / Canceled |
//! | uncheck   | Complete | Pending |
//! | pause     | InProgress | Pending |
//!
//! On disk the state is spread over three flags (`isComplete`, `inProgress`,
//! `isCanceled`); in memory it is the single [`TaskStatus`] enum so that two flags can
//! never be set at once.
//!
//! ## Boards
//!
//! `boards` is never empty. Items created without a board land on the default board
//! ([`DEFAULT_BOARD`] unless the configuration names another one).
//!
//! ## Storage Record
//!
//! [`Item`] (de)serializes through a flat record keyed the way the store files have
//! always looked (`_id`, `_date`, `_timestamp`, `_isTask`, camelCase flags). Loading is
//! lenient: missing flags are false, a zero due date is no due date, and unknown
//! priorities fall back to normal.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TasklineError};

pub const DEFAULT_BOARD: &str = "My Board";

/// Format of the `date` field, e.g. `Mon Sep 02 2019`.
pub const DATE_DISPLAY_FORMAT: &str = "%a %b %d %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Complete,
    Canceled,
}

impl TaskStatus {
    pub fn name(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Complete => "complete",
            TaskStatus::Canceled => "canceled",
        }
    }

    /// Complete and canceled tasks are the ones `clear` moves to the archive.
    pub fn is_closed(&self) -> bool {
        matches!(self, TaskStatus::Complete | TaskStatus::Canceled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    #[default]
    Normal = 1,
    Medium = 2,
    High = 3,
}

impl Priority {
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Lenient conversion used when building items: anything outside 1..=3 is normal.
    pub fn from_level(level: i64) -> Self {
        Self::try_from(level).unwrap_or_default()
    }

    /// Strict parsing of user input.
    pub fn parse(raw: &str) -> Result<Self> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(|n| Self::try_from(n).ok())
            .ok_or_else(|| TasklineError::InvalidPriority(raw.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl TryFrom<i64> for Priority {
    type Error = TasklineError;

    fn try_from(level: i64) -> Result<Self> {
        match level {
            1 => Ok(Priority::Normal),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            other => Err(TasklineError::InvalidPriority(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Task {
    /// Epoch milliseconds.
    pub due_date: Option<i64>,
    pub status: TaskStatus,
    pub priority: Priority,
}

impl Task {
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn set_due_date(&mut self, due_date: Option<i64>) {
        self.due_date = due_date.filter(|d| *d != 0);
    }

    pub fn is_complete(&self) -> bool {
        self.status == TaskStatus::Complete
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Note,
    Task(Task),
}

/// Property bag from which notes and tasks are built.
#[derive(Debug, Clone, Default)]
pub struct ItemProperties {
    pub id: u32,
    pub date: String,
    pub timestamp: i64,
    pub description: String,
    pub is_starred: bool,
    pub boards: Vec<String>,
    pub due_date: Option<i64>,
    pub status: Option<TaskStatus>,
    pub priority: Option<i64>,
}

impl ItemProperties {
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            ..Default::default()
        }
        .stamped(Local::now())
    }

    /// Sets `date` and `timestamp` from a single instant.
    pub fn stamped(mut self, at: DateTime<Local>) -> Self {
        self.date = at.format(DATE_DISPLAY_FORMAT).to_string();
        self.timestamp = at.timestamp_millis();
        self
    }

    pub fn with_boards(mut self, boards: Vec<String>) -> Self {
        self.boards = boards;
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_due_date(mut self, due_date: i64) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn starred(mut self) -> Self {
        self.is_starred = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ItemRecord", from = "ItemRecord")]
pub struct Item {
    pub id: u32,
    pub date: String,
    /// Creation instant in epoch milliseconds.
    pub timestamp: i64,
    pub description: String,
    pub is_starred: bool,
    pub boards: Vec<String>,
    pub kind: ItemKind,
}

impl Item {
    pub fn note(props: ItemProperties) -> Self {
        Self::build(props, ItemKind::Note)
    }

    pub fn task(props: ItemProperties) -> Self {
        let task = Task {
            due_date: props.due_date.filter(|d| *d != 0),
            status: props.status.unwrap_or_default(),
            priority: props.priority.map(Priority::from_level).unwrap_or_default(),
        };
        Self::build(props, ItemKind::Task(task))
    }

    fn build(props: ItemProperties, kind: ItemKind) -> Self {
        Self {
            id: props.id,
            date: props.date,
            timestamp: props.timestamp,
            description: props.description,
            is_starred: props.is_starred,
            boards: normalize_boards(props.boards, DEFAULT_BOARD),
            kind,
        }
    }

    pub fn is_task(&self) -> bool {
        matches!(self.kind, ItemKind::Task(_))
    }

    pub fn as_task(&self) -> Option<&Task> {
        match &self.kind {
            ItemKind::Task(task) => Some(task),
            ItemKind::Note => None,
        }
    }

    pub fn as_task_mut(&mut self) -> Option<&mut Task> {
        match &mut self.kind {
            ItemKind::Task(task) => Some(task),
            ItemKind::Note => None,
        }
    }

    pub fn status(&self) -> Option<TaskStatus> {
        self.as_task().map(|t| t.status)
    }

    pub fn is_complete(&self) -> bool {
        self.as_task().is_some_and(Task::is_complete)
    }

    /// Flips the star and returns the new value.
    pub fn toggle_star(&mut self) -> bool {
        self.is_starred = !self.is_starred;
        self.is_starred
    }

    pub fn set_boards(&mut self, boards: Vec<String>) {
        self.boards = normalize_boards(boards, DEFAULT_BOARD);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn on_board(&self, board: &str) -> bool {
        self.boards.iter().any(|b| b == board)
    }
}

/// Cleans user supplied board names: trims, strips a leading `@`, drops blanks and
/// duplicates. Falls back to `default_board` when nothing is left.
pub fn normalize_boards<I, S>(boards: I, default_board: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cleaned: Vec<String> = Vec::new();
    for board in boards {
        let name = board.as_ref().trim();
        let name = name.strip_prefix('@').unwrap_or(name).trim();
        if !name.is_empty() && !cleaned.iter().any(|b| b == name) {
            cleaned.push(name.to_string());
        }
    }
    if cleaned.is_empty() {
        cleaned.push(default_board.to_string());
    }
    cleaned
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecord {
    #[serde(rename = "_id")]
    id: u32,
    #[serde(rename = "_date", default)]
    date: String,
    #[serde(rename = "_timestamp", default)]
    timestamp: i64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    is_starred: bool,
    #[serde(default)]
    boards: Vec<String>,
    #[serde(rename = "_isTask", default)]
    is_task: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_complete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    in_progress: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_canceled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<i64>,
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        let mut record = ItemRecord {
            id: item.id,
            date: item.date,
            timestamp: item.timestamp,
            description: item.description,
            is_starred: item.is_starred,
            boards: item.boards,
            is_task: false,
            due_date: None,
            is_complete: None,
            in_progress: None,
            is_canceled: None,
            priority: None,
        };
        if let ItemKind::Task(task) = item.kind {
            record.is_task = true;
            record.due_date = Some(task.due_date.unwrap_or(0));
            record.is_complete = Some(task.status == TaskStatus::Complete);
            record.in_progress = Some(task.status == TaskStatus::InProgress);
            record.is_canceled = Some(task.status == TaskStatus::Canceled);
            record.priority = Some(i64::from(task.priority.level()));
        }
        record
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        let props = ItemProperties {
            id: record.id,
            date: record.date,
            timestamp: record.timestamp,
            description: record.description,
            is_starred: record.is_starred,
            boards: record.boards,
            due_date: record.due_date,
            status: None,
            priority: record.priority,
        };
        if !record.is_task {
            return Item::note(props);
        }

        // Legacy files may carry more than one flag; the strongest one wins.
        let status = if record.is_complete.unwrap_or(false) {
            TaskStatus::Complete
        } else if record.in_progress.unwrap_or(false) {
            TaskStatus::InProgress
        } else if record.is_canceled.unwrap_or(false) {
            TaskStatus::Canceled
        } else {
            TaskStatus::Pending
        };
        Item::task(props.with_status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(id: u32) -> ItemProperties {
        ItemProperties {
            id,
            date: "Mon Sep 02 2019".into(),
            timestamp: 1567434272855,
            description: "Test".into(),
            boards: vec!["My Board".into()],
            ..Default::default()
        }
    }

    #[test]
    fn note_is_not_a_task() {
        let note = Item::note(props(1));
        assert!(!note.is_task());
        assert_eq!(note.status(), None);
    }

    #[test]
    fn task_defaults_to_pending_normal() {
        let task = Item::task(props(2));
        let t = task.as_task().unwrap();
        assert_eq!(t.status, TaskStatus::Pending);
        assert_eq!(t.priority, Priority::Normal);
        assert_eq!(t.due_date, None);
    }

    #[test]
    fn out_of_range_priority_falls_back_to_normal() {
        let task = Item::task(props(1).with_priority(7));
        assert_eq!(task.as_task().unwrap().priority, Priority::Normal);

        let task = Item::task(props(1).with_priority(3));
        assert_eq!(task.as_task().unwrap().priority, Priority::High);
    }

    #[test]
    fn zero_due_date_means_none() {
        let task = Item::task(props(1).with_due_date(0));
        assert_eq!(task.as_task().unwrap().due_date, None);
    }

    #[test]
    fn empty_boards_become_default_board() {
        let note = Item::note(props(1).with_boards(vec![]));
        assert_eq!(note.boards, vec![DEFAULT_BOARD.to_string()]);
    }

    #[test]
    fn normalize_boards_strips_at_and_duplicates() {
        let boards = normalize_boards(["@work", " work ", "", "@home"], DEFAULT_BOARD);
        assert_eq!(boards, vec!["work".to_string(), "home".to_string()]);
    }

    #[test]
    fn strict_priority_parsing() {
        assert_eq!(Priority::parse("2").unwrap(), Priority::Medium);
        assert_eq!(Priority::parse(" 3 ").unwrap(), Priority::High);
        assert!(matches!(
            Priority::parse("4"),
            Err(TasklineError::InvalidPriority(_))
        ));
        assert!(matches!(
            Priority::parse("high"),
            Err(TasklineError::InvalidPriority(_))
        ));
    }

    #[test]
    fn toggle_star_flips() {
        let mut note = Item::note(props(1));
        assert!(note.toggle_star());
        assert!(!note.toggle_star());
    }

    #[test]
    fn task_record_keeps_every_attribute() {
        let task = Item::task(
            props(4)
                .with_priority(2)
                .with_due_date(1567500000000)
                .with_status(TaskStatus::Canceled)
                .starred(),
        );

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["_id"], 4);
        assert_eq!(json["_isTask"], true);
        assert_eq!(json["isCanceled"], true);
        assert_eq!(json["isComplete"], false);
        assert_eq!(json["priority"], 2);

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn note_record_has_no_task_fields() {
        let json = serde_json::to_value(Item::note(props(1))).unwrap();
        assert_eq!(json["_isTask"], false);
        assert!(json.get("isComplete").is_none());
        assert!(json.get("priority").is_none());
    }

    #[test]
    fn legacy_record_without_flags_loads_as_pending() {
        let raw = r#"{
            "_id": 2,
            "_date": "Mon Sep 02 2019",
            "_timestamp": 1567434272855,
            "description": "Test Task",
            "isStarred": false,
            "boards": ["My Board"],
            "_isTask": true,
            "isComplete": false,
            "inProgress": false,
            "priority": 1
        }"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert_eq!(item.status(), Some(TaskStatus::Pending));
        assert_eq!(item.as_task().unwrap().due_date, None);
    }
}
