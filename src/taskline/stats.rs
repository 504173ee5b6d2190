//! # Statistics and Grouping
//!
//! Listings are built from [`Group`]s: a title plus the items filed under it. Two
//! groupings exist:
//!
//! - [`group_by_board`]: one group per board. An item on several boards shows up in
//!   each of them.
//! - [`group_by_date`]: one group per creation day (`date` string).
//!
//! Group order is the order in which keys are first seen while walking the items in
//! store order. Items keep their relative order inside each group.
//!
//! [`item_stats`] and [`overview`] compute the counters the renderer shows next to
//! group titles and in the closing progress line.

use crate::model::{normalize_boards, Item, TaskStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemStats {
    pub tasks: usize,
    pub complete: usize,
    pub notes: usize,
}

impl ItemStats {
    /// A collection is complete when it holds no notes and every task is done.
    pub fn is_complete(&self) -> bool {
        self.tasks == self.complete && self.notes == 0
    }
}

pub fn item_stats(items: &[Item]) -> ItemStats {
    items.iter().fold(ItemStats::default(), |mut stats, item| {
        if item.is_task() {
            stats.tasks += 1;
            if item.is_complete() {
                stats.complete += 1;
            }
        } else {
            stats.notes += 1;
        }
        stats
    })
}

/// Progress counters across a whole store. Canceled tasks count nowhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overview {
    pub percent: u32,
    pub complete: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub notes: usize,
}

impl Overview {
    /// Something was completed and nothing else is left, notes included.
    pub fn is_all_done(&self) -> bool {
        self.complete > 0 && self.in_progress == 0 && self.pending == 0 && self.notes == 0
    }

    pub fn is_empty(&self) -> bool {
        self.complete + self.in_progress + self.pending + self.notes == 0
    }
}

pub fn overview(items: &[Item]) -> Overview {
    let mut overview = Overview::default();
    for item in items {
        match item.status() {
            None => overview.notes += 1,
            Some(TaskStatus::Complete) => overview.complete += 1,
            Some(TaskStatus::InProgress) => overview.in_progress += 1,
            Some(TaskStatus::Pending) => overview.pending += 1,
            Some(TaskStatus::Canceled) => {}
        }
    }

    let total = overview.complete + overview.in_progress + overview.pending;
    if total > 0 {
        overview.percent = (overview.complete * 100 / total) as u32;
    }
    overview
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub title: String,
    pub items: Vec<Item>,
}

impl Group {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn stats(&self) -> ItemStats {
        item_stats(&self.items)
    }

    pub fn is_complete(&self) -> bool {
        self.stats().is_complete()
    }
}

pub fn group_by_board(items: &[Item], default_board: &str) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    for item in items {
        for board in normalize_boards(&item.boards, default_board) {
            group_entry(&mut groups, &board).items.push(item.clone());
        }
    }
    groups
}

pub fn group_by_date(items: &[Item]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    for item in items {
        group_entry(&mut groups, &item.date).items.push(item.clone());
    }
    groups
}

fn group_entry<'a>(groups: &'a mut Vec<Group>, title: &str) -> &'a mut Group {
    let pos = match groups.iter().position(|g| g.title == title) {
        Some(pos) => pos,
        None => {
            groups.push(Group::new(title));
            groups.len() - 1
        }
    };
    &mut groups[pos]
}
