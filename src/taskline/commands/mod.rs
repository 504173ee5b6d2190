use crate::model::Item;
use crate::stats::{Group, Overview};

pub mod archive;
pub mod boards;
pub mod copy;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod lifecycle;
pub mod list;
pub mod purge;
pub mod restore;
pub mod star;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What happened to a set of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Checked,
    Unchecked,
    Started,
    Paused,
    Canceled,
    Revived,
    Starred,
    Unstarred,
    Moved,
    Edited,
    Prioritized,
    Scheduled,
    Deleted,
    Archived,
    Restored,
    Purged,
    Copied,
}

impl Change {
    /// Whether the change only ever applies to tasks.
    pub fn tasks_only(&self) -> bool {
        matches!(
            self,
            Change::Checked
                | Change::Unchecked
                | Change::Started
                | Change::Paused
                | Change::Canceled
                | Change::Revived
                | Change::Prioritized
                | Change::Scheduled
                | Change::Archived
        )
    }
}

/// IDs touched by one kind of change. `ids` are the IDs the items had when the command
/// resolved them. `detail` carries the new value for changes that set one (boards,
/// priority, due date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdReport {
    pub label: Change,
    pub ids: Vec<u32>,
    pub detail: Option<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<IdReport>,
    pub groups: Vec<Group>,
    pub overview: Option<Overview>,
    pub created: Option<Item>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Records a change. Empty ID lists are dropped.
    pub fn report(&mut self, label: Change, ids: Vec<u32>) {
        self.report_with(label, ids, None);
    }

    pub fn report_with(&mut self, label: Change, ids: Vec<u32>, detail: Option<String>) {
        if ids.is_empty() {
            return;
        }
        self.affected.push(IdReport { label, ids, detail });
    }

    /// IDs recorded under `label`, empty when there are none.
    pub fn ids(&self, label: Change) -> &[u32] {
        self.affected
            .iter()
            .find(|report| report.label == label)
            .map(|report| report.ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn with_groups(mut self, groups: Vec<Group>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_overview(mut self, overview: Overview) -> Self {
        self.overview = Some(overview);
        self
    }

    pub fn with_created(mut self, item: Item) -> Self {
        self.created = Some(item);
        self
    }
}
