//! Styles for the taskline CLI.
//!
//! Rendering code asks for styles by what they mean (`id`, `muted`, `overdue`), never
//! by color, so the palette can change in one place.

use console::Style;
use once_cell::sync::Lazy;

pub struct Palette {
    pub title: Style,
    pub muted: Style,
    pub star: Style,
    pub complete: Style,
    pub in_progress: Style,
    pub pending: Style,
    pub canceled: Style,
    pub note: Style,
    pub overdue: Style,
    pub due_soon: Style,
    pub priority_medium: Style,
    pub priority_high: Style,
    pub percent_good: Style,
    pub percent_fair: Style,
}

pub static PALETTE: Lazy<Palette> = Lazy::new(|| Palette {
    title: Style::new().underlined(),
    muted: Style::new().color256(245),
    star: Style::new().yellow(),
    complete: Style::new().green(),
    in_progress: Style::new().blue(),
    pending: Style::new().magenta(),
    canceled: Style::new().red(),
    note: Style::new().blue(),
    overdue: Style::new().red().underlined(),
    due_soon: Style::new().yellow(),
    priority_medium: Style::new().yellow().underlined(),
    priority_high: Style::new().red().underlined(),
    percent_good: Style::new().green(),
    percent_fair: Style::new().yellow(),
});

pub const STAR: &str = "★";
pub const SYMBOL_COMPLETE: &str = "✔";
pub const SYMBOL_IN_PROGRESS: &str = "⋯";
pub const SYMBOL_PENDING: &str = "☐";
pub const SYMBOL_CANCELED: &str = "✖";
pub const SYMBOL_NOTE: &str = "●";
