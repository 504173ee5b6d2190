use crate::commands::{Change, CmdResult};
use crate::error::Result;
use crate::model::normalize_boards;
use crate::store::DataStore;

use super::helpers::update_items;

/// Replaces the boards of every targeted item.
///
/// Board names are cleaned with [`normalize_boards`]; an empty list puts the items on
/// `default_board`.
pub fn move_items<S: DataStore>(
    store: &mut S,
    expr: &str,
    boards: &[String],
    default_board: &str,
) -> Result<CmdResult> {
    let boards = normalize_boards(boards, default_board);
    let mut moved = Vec::new();

    update_items(store, expr, |item| {
        item.set_boards(boards.clone());
        moved.push(item.id);
    })?;

    let detail = boards
        .iter()
        .map(|b| format!("@{b}"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut result = CmdResult::default();
    result.report_with(Change::Moved, moved, Some(detail));
    Ok(result)
}
