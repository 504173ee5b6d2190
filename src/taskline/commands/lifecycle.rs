//! Task lifecycle transitions.
//!
//! `check`, `begin` and `cancel` are toggles: a task already in the target state goes
//! back to pending, any other task moves to the target state. Because the status is a
//! single enum, entering one state always leaves the others.
//!
//! `complete`, `uncheck` and `pause` are one-way and leave tasks in other states alone.

use crate::commands::{Change, CmdResult};
use crate::error::Result;
use crate::model::TaskStatus;
use crate::store::DataStore;
use tracing::debug;

use super::helpers::update_tasks;

pub fn check<S: DataStore>(store: &mut S, expr: &str) -> Result<CmdResult> {
    toggle(
        store,
        expr,
        TaskStatus::Complete,
        Change::Checked,
        Change::Unchecked,
    )
}

pub fn begin<S: DataStore>(store: &mut S, expr: &str) -> Result<CmdResult> {
    toggle(
        store,
        expr,
        TaskStatus::InProgress,
        Change::Started,
        Change::Paused,
    )
}

pub fn cancel<S: DataStore>(store: &mut S, expr: &str) -> Result<CmdResult> {
    toggle(
        store,
        expr,
        TaskStatus::Canceled,
        Change::Canceled,
        Change::Revived,
    )
}

pub fn complete<S: DataStore>(store: &mut S, expr: &str) -> Result<CmdResult> {
    transition(store, expr, None, TaskStatus::Complete, Change::Checked)
}

pub fn uncheck<S: DataStore>(store: &mut S, expr: &str) -> Result<CmdResult> {
    transition(
        store,
        expr,
        Some(TaskStatus::Complete),
        TaskStatus::Pending,
        Change::Unchecked,
    )
}

pub fn pause<S: DataStore>(store: &mut S, expr: &str) -> Result<CmdResult> {
    transition(
        store,
        expr,
        Some(TaskStatus::InProgress),
        TaskStatus::Pending,
        Change::Paused,
    )
}

fn toggle<S: DataStore>(
    store: &mut S,
    expr: &str,
    target: TaskStatus,
    entered: Change,
    left: Change,
) -> Result<CmdResult> {
    let mut entered_ids = Vec::new();
    let mut left_ids = Vec::new();

    update_tasks(store, expr, |id, task| {
        let next = if task.status == target {
            left_ids.push(id);
            TaskStatus::Pending
        } else {
            entered_ids.push(id);
            target
        };
        debug!(id, from = task.status.name(), to = next.name(), "toggled task");
        task.set_status(next);
    })?;

    let mut result = CmdResult::default();
    result.report(entered, entered_ids);
    result.report(left, left_ids);
    Ok(result)
}

/// Moves tasks in `from` (any state other than `to` when `None`) to `to`.
fn transition<S: DataStore>(
    store: &mut S,
    expr: &str,
    from: Option<TaskStatus>,
    to: TaskStatus,
    label: Change,
) -> Result<CmdResult> {
    let mut moved = Vec::new();

    update_tasks(store, expr, |id, task| {
        let applies = match from {
            Some(from) => task.status == from,
            None => task.status != to,
        };
        if applies {
            task.set_status(to);
            moved.push(id);
        }
    })?;

    let mut result = CmdResult::default();
    result.report(label, moved);
    Ok(result)
}
