use crate::commands::{Change, CmdResult};
use crate::error::{Result, TasklineError};
use crate::model::Priority;
use crate::store::DataStore;
use chrono::{Local, NaiveDate, TimeZone};

use super::helpers::{update_items, update_tasks};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn edit_description<S: DataStore>(
    store: &mut S,
    expr: &str,
    description: &str,
) -> Result<CmdResult> {
    let description = description.trim();
    if description.is_empty() {
        return Err(TasklineError::EmptyDescription);
    }

    let mut edited = Vec::new();
    update_items(store, expr, |item| {
        item.set_description(description);
        edited.push(item.id);
    })?;

    let mut result = CmdResult::default();
    result.report(Change::Edited, edited);
    Ok(result)
}

/// Sets the priority of the targeted tasks. `raw` is validated before the IDs.
pub fn priority<S: DataStore>(store: &mut S, expr: &str, raw: &str) -> Result<CmdResult> {
    let priority = Priority::parse(raw)?;

    let mut updated = Vec::new();
    update_tasks(store, expr, |id, task| {
        task.set_priority(priority);
        updated.push(id);
    })?;

    let mut result = CmdResult::default();
    result.report_with(
        Change::Prioritized,
        updated,
        Some(priority.name().to_string()),
    );
    Ok(result)
}

/// Sets the due date of the targeted tasks to the end of the given local day.
pub fn due_date<S: DataStore>(
    store: &mut S,
    expr: &str,
    raw: &str,
    date_format: &str,
) -> Result<CmdResult> {
    let due = parse_due_date(raw, date_format)?;

    let mut updated = Vec::new();
    update_tasks(store, expr, |id, task| {
        task.set_due_date(Some(due));
        updated.push(id);
    })?;

    let shown = Local
        .timestamp_millis_opt(due)
        .single()
        .map(|d| d.format(date_format).to_string());

    let mut result = CmdResult::default();
    result.report_with(Change::Scheduled, updated, shown);
    Ok(result)
}

/// Parses `raw` with `date_format`, falling back to ISO dates, and returns the last
/// millisecond of that day in local time.
pub fn parse_due_date(raw: &str, date_format: &str) -> Result<i64> {
    let raw = raw.trim();
    let day = NaiveDate::parse_from_str(raw, date_format)
        .or_else(|_| NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT))
        .map_err(|_| TasklineError::InvalidDate(raw.to_string()))?;

    let end_of_day = day
        .and_hms_milli_opt(23, 59, 59, 999)
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .ok_or_else(|| TasklineError::InvalidDate(raw.to_string()))?;
    Ok(end_of_day.timestamp_millis())
}
