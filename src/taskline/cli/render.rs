//! # Rendering Module
//!
//! Turns command results into terminal text. Every `render_*` function returns a
//! `String`; printing happens in `commands.rs`. The public functions detect color
//! support and read the clock, then delegate to an `_internal` variant that takes both
//! as arguments so tests get stable output.
//!
//! An item line looks like:
//!
//! ```text
//!   12. ☐ Review pull request (!)  (Due in 2 days) ★
//! ```
//!
//! The id is right-aligned, followed by a status symbol and the description (styled by
//! priority). The suffix shows the due date or age in the board view and the boards in
//! the timeline.

use super::styles::{
    PALETTE, STAR, SYMBOL_CANCELED, SYMBOL_COMPLETE, SYMBOL_IN_PROGRESS, SYMBOL_NOTE,
    SYMBOL_PENDING,
};
use chrono::{DateTime, Duration, Local, TimeZone};
use colored::Colorize;
use console::Style;
use taskline::api::{Change, CmdMessage, IdReport, MessageLevel};
use taskline::model::{Item, Priority, TaskStatus, DATE_DISPLAY_FORMAT};
use taskline::stats::{Group, Overview};
use unicode_width::UnicodeWidthChar;

pub const DESCRIPTION_WIDTH: usize = 80;

const SECOND_MS: i64 = 1000;
const DAY_MS: i64 = 24 * 60 * 60 * SECOND_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Grouped by board, suffix shows due date or age.
    Board,
    /// Grouped by creation day, suffix shows boards.
    Date,
}

#[derive(Debug, Clone, Copy)]
pub struct ListView<'a> {
    pub layout: Layout,
    pub show_complete: bool,
    pub default_board: &'a str,
}

pub fn render_groups(groups: &[Group], view: &ListView) -> String {
    render_groups_internal(groups, view, Local::now(), console::colors_enabled())
}

fn render_groups_internal(
    groups: &[Group],
    view: &ListView,
    now: DateTime<Local>,
    use_color: bool,
) -> String {
    let today = now.format(DATE_DISPLAY_FORMAT).to_string();
    let mut out = String::new();

    for group in groups {
        if group.is_complete() && !view.show_complete {
            continue;
        }

        out.push('\n');
        out.push_str(&render_title(group, &today, use_color));
        out.push('\n');

        for item in &group.items {
            if item.is_complete() && !view.show_complete {
                continue;
            }
            out.push_str(&render_item(item, view, now, use_color));
            out.push('\n');
        }
    }
    out
}

fn render_title(group: &Group, today: &str, use_color: bool) -> String {
    let p = &*PALETTE;
    let stats = group.stats();
    let mut title = format!("  {}", paint(&p.title, &group.title, use_color));
    if group.title == today {
        title.push(' ');
        title.push_str(&paint(&p.muted, "[Today]", use_color));
    }
    title.push(' ');
    title.push_str(&paint(
        &p.muted,
        &format!("[{}/{}]", stats.complete, stats.tasks),
        use_color,
    ));
    title
}

fn render_item(item: &Item, view: &ListView, now: DateTime<Local>, use_color: bool) -> String {
    let p = &*PALETTE;
    let id = format!("{}.", item.id);
    let mut line = format!(
        "{}{} {} {}",
        " ".repeat(5usize.saturating_sub(id.len())),
        paint(&p.muted, &id, use_color),
        status_symbol(item, use_color),
        build_message(item, use_color)
    );

    let mut suffix: Vec<String> = Vec::new();
    match view.layout {
        Layout::Board => {
            let due = item
                .as_task()
                .filter(|task| !task.is_complete())
                .and_then(|task| task.due_date);
            match due {
                Some(due) => suffix.push(format_due(due, now, use_color)),
                None => {
                    let age = format_age(item.timestamp, now);
                    if !age.is_empty() {
                        suffix.push(paint(&p.muted, &age, use_color));
                    }
                }
            }
        }
        Layout::Date => {
            suffix.extend(
                item.boards
                    .iter()
                    .filter(|board| board.as_str() != view.default_board)
                    .map(|board| paint(&p.muted, board, use_color)),
            );
        }
    }
    if item.is_starred {
        suffix.push(paint(&p.star, STAR, use_color));
    }

    if !suffix.is_empty() {
        line.push_str("  ");
        line.push_str(&suffix.join(" "));
    }
    line
}

fn status_symbol(item: &Item, use_color: bool) -> String {
    let p = &*PALETTE;
    let (style, symbol) = match item.status() {
        None => (&p.note, SYMBOL_NOTE),
        Some(TaskStatus::Complete) => (&p.complete, SYMBOL_COMPLETE),
        Some(TaskStatus::InProgress) => (&p.in_progress, SYMBOL_IN_PROGRESS),
        Some(TaskStatus::Canceled) => (&p.canceled, SYMBOL_CANCELED),
        Some(TaskStatus::Pending) => (&p.pending, SYMBOL_PENDING),
    };
    paint(style, symbol, use_color)
}

fn build_message(item: &Item, use_color: bool) -> String {
    let p = &*PALETTE;
    let description = truncate_to_width(&item.description, DESCRIPTION_WIDTH);

    let Some(task) = item.as_task() else {
        return description;
    };
    if task.is_complete() {
        return paint(&p.muted, &description, use_color);
    }
    match task.priority {
        Priority::Normal => description,
        Priority::Medium => format!(
            "{} {}",
            paint(&p.priority_medium, &description, use_color),
            paint(&p.due_soon, "(!)", use_color)
        ),
        Priority::High => format!(
            "{} {}",
            paint(&p.priority_high, &description, use_color),
            paint(&p.canceled, "(!!)", use_color)
        ),
    }
}

/// `(Due in 3 days)`, red before the end of today, yellow within a week.
fn format_due(due: i64, now: DateTime<Local>, use_color: bool) -> String {
    let p = &*PALETTE;
    let text = format!("(Due {})", humanize(due - now.timestamp_millis()));

    let end_of_today = now
        .date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .and_then(|naive| Local.from_local_datetime(&naive).latest())
        .map(|end| end.timestamp_millis())
        .unwrap_or(i64::MAX);
    let in_a_week = (now + Duration::weeks(1)).timestamp_millis();

    let style = if due < end_of_today {
        &p.overdue
    } else if due < in_a_week {
        &p.due_soon
    } else {
        &p.muted
    };
    paint(style, &text, use_color)
}

/// Relative distance such as `in 2 hours` or `3 days ago`.
fn humanize(diff_ms: i64) -> String {
    // Each unit is used until the distance reaches the size of the next one.
    const UNITS: [(f64, &str); 6] = [
        (1.0, "seconds"),
        (60.0, "minutes"),
        (3_600.0, "hours"),
        (86_400.0, "days"),
        (604_800.0, "weeks"),
        (2_592_000.0, "months"),
    ];

    let seconds = (diff_ms as f64 / SECOND_MS as f64).ceil();
    let idx = (0..UNITS.len() - 1)
        .find(|&i| seconds.abs() < UNITS[i + 1].0)
        .unwrap_or(UNITS.len() - 1);
    let (size, plural) = UNITS[idx];
    let value = (seconds / size).round() as i64;

    let unit = if value.abs() == 1 {
        &plural[..plural.len() - 1]
    } else {
        plural
    };
    if value >= 1 {
        format!("in {} {}", value, unit)
    } else {
        format!("{} {} ago", value.abs(), unit)
    }
}

/// Whole days since creation, empty for items created today.
fn format_age(timestamp: i64, now: DateTime<Local>) -> String {
    let days = ((now.timestamp_millis() - timestamp).abs() as f64 / DAY_MS as f64).round() as i64;
    if days == 0 {
        String::new()
    } else {
        format!("{}d", days)
    }
}

pub fn render_overview(overview: &Overview) -> String {
    render_overview_internal(overview, console::colors_enabled())
}

fn render_overview_internal(overview: &Overview, use_color: bool) -> String {
    let p = &*PALETTE;
    let mut out = String::new();

    if overview.is_all_done() {
        out.push_str(&format!("\n  All done! {}\n", paint(&p.star, STAR, use_color)));
    }
    if overview.is_empty() {
        out.push_str(&format!(
            "\n  Type `tl --help` to get started! {}\n",
            paint(&p.star, STAR, use_color)
        ));
    }

    let percent = format!("{}%", overview.percent);
    let percent = if overview.percent >= 75 {
        paint(&p.percent_good, &percent, use_color)
    } else if overview.percent >= 50 {
        paint(&p.percent_fair, &percent, use_color)
    } else {
        percent
    };
    out.push_str(&format!(
        "\n  {}{}\n",
        percent,
        paint(&p.muted, " of all tasks complete.", use_color)
    ));

    let counter = |style: &Style, n: usize, label: &str| {
        format!(
            "{} {}",
            paint(style, &n.to_string(), use_color),
            paint(&p.muted, label, use_color)
        )
    };
    let notes_label = if overview.notes == 1 { "note" } else { "notes" };
    let status = [
        counter(&p.complete, overview.complete, "done"),
        counter(&p.in_progress, overview.in_progress, "in-progress"),
        counter(&p.pending, overview.pending, "pending"),
        counter(&p.note, overview.notes, notes_label),
    ];
    out.push_str(&format!(
        "  {}\n",
        status.join(&paint(&p.muted, " · ", use_color))
    ));
    out
}

/// One line per report, e.g. `✔ Checked tasks: 2, 3`.
pub fn render_changes(reports: &[IdReport]) -> String {
    render_changes_internal(reports, console::colors_enabled())
}

fn render_changes_internal(reports: &[IdReport], use_color: bool) -> String {
    let p = &*PALETTE;
    let mut out = String::new();
    for report in reports.iter().filter(|r| !r.ids.is_empty()) {
        let ids = report
            .ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let mut line = format!(
            "{} {} {}",
            paint(&p.complete, SYMBOL_COMPLETE, use_color),
            change_message(report),
            paint(&p.muted, &ids, use_color)
        );
        if let Some(detail) = &report.detail {
            line.push_str(&format!(" to {}", detail));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn change_message(report: &IdReport) -> String {
    let plural = report.ids.len() > 1;
    let noun = match (report.label.tasks_only(), plural) {
        (true, false) => "task",
        (true, true) => "tasks",
        (false, false) => "item",
        (false, true) => "items",
    };
    match report.label {
        Change::Checked => format!("Checked {}:", noun),
        Change::Unchecked => format!("Unchecked {}:", noun),
        Change::Started => format!("Started {}:", noun),
        Change::Paused => format!("Paused {}:", noun),
        Change::Canceled => format!("Canceled {}:", noun),
        Change::Revived => format!("Revived {}:", noun),
        Change::Starred => format!("Starred {}:", noun),
        Change::Unstarred => format!("Unstarred {}:", noun),
        Change::Moved => format!("Moved {}:", noun),
        Change::Edited => format!("Updated description of {}:", noun),
        Change::Prioritized => format!("Updated priority of {}:", noun),
        Change::Scheduled => format!("Updated due date of {}:", noun),
        Change::Deleted => format!("Deleted {}:", noun),
        Change::Archived => format!("Archived {}:", noun),
        Change::Restored => format!("Restored {}:", noun),
        Change::Purged => format!("Purged {}:", noun),
        Change::Copied if plural => "Copied the descriptions of items:".to_string(),
        Change::Copied => "Copied the description of item:".to_string(),
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, console::colors_enabled())
}

fn render_messages_internal(messages: &[CmdMessage], use_color: bool) -> String {
    let mut out = String::new();
    for message in messages {
        let line = if use_color {
            match message.level {
                MessageLevel::Info => message.content.dimmed().to_string(),
                MessageLevel::Success => message.content.green().to_string(),
                MessageLevel::Warning => message.content.yellow().to_string(),
                MessageLevel::Error => message.content.red().to_string(),
            }
        } else {
            message.content.clone()
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn paint(style: &Style, text: &str, use_color: bool) -> String {
    if use_color {
        style.apply_to(text).force_styling(true).to_string()
    } else {
        text.to_string()
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
