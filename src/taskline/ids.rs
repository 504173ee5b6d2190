//! # Identifier Expressions
//!
//! Every command that targets items takes an identifier expression: a comma separated
//! list of single IDs and inclusive ranges.
//!
//! ```text
//! "2"        -> [2]
//! "2,3-4"    -> [2, 3, 4]
//! " 4 , 1 "  -> [1, 4]
//! "3-5,4"    -> [3, 4, 5]
//! ""         -> []
//! ```
//!
//! Resolution runs in two passes so callers can tell the failures apart:
//!
//! 1. **Syntax**: each term must be `N` or `A-B` with `A <= B`. A failing term yields
//!    [`TasklineError::IdentifierSyntax`].
//! 2. **Membership**: every ID must exist in the universe supplied by the caller.
//!    Unknown IDs yield [`TasklineError::InvalidIdentifiers`], listing at most
//!    [`MAX_REPORTED_IDS`] of them.
//!
//! Ranges are never expanded: each term is checked against the universe directly, so
//! `1-4294967295` costs no more than `1-4`. Literals too large for an ID are well formed
//! and simply unknown.
//!
//! The result is always sorted ascending and free of duplicates.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::error::{Result, TasklineError};

/// Upper bound on the unknown IDs carried by [`TasklineError::InvalidIdentifiers`].
pub const MAX_REPORTED_IDS: usize = 20;

/// Parses an expression into its terms without checking that the IDs exist. A single
/// ID `N` becomes `N..=N`. Literals beyond `u64::MAX` saturate.
pub fn parse_id_expression(raw: &str) -> Result<Vec<RangeInclusive<u64>>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',').map(parse_term).collect()
}

/// Resolves an expression against the IDs that currently exist.
pub fn resolve_ids(raw: &str, universe: &BTreeSet<u32>) -> Result<Vec<u32>> {
    let terms = parse_id_expression(raw)?;

    let mut ids = BTreeSet::new();
    let mut unknown = BTreeSet::new();
    for term in terms {
        let (start, end) = (*term.start(), *term.end());
        let known = known_in(universe, start, end);
        let width = (end - start).saturating_add(1);
        if (known.len() as u64) < width {
            collect_unknown(universe, start, end, &mut unknown);
        }
        ids.extend(known);
    }

    if !unknown.is_empty() {
        return Err(TasklineError::InvalidIdentifiers(unknown.into_iter().collect()));
    }
    Ok(ids.into_iter().collect())
}

/// Members of `universe` inside `start..=end`.
fn known_in(universe: &BTreeSet<u32>, start: u64, end: u64) -> Vec<u32> {
    let Ok(low) = u32::try_from(start) else {
        return Vec::new();
    };
    let high = u32::try_from(end).unwrap_or(u32::MAX);
    universe.range(low..=high).copied().collect()
}

/// Walks `start..=end` adding IDs missing from `universe` until the report is full.
/// Each step records an ID, revisits one an earlier term recorded, or skips a member,
/// so the walk stays within twice the report size plus the universe size.
fn collect_unknown(
    universe: &BTreeSet<u32>,
    start: u64,
    end: u64,
    unknown: &mut BTreeSet<u64>,
) {
    let mut id = start;
    while unknown.len() < MAX_REPORTED_IDS {
        let exists = u32::try_from(id).is_ok_and(|id| universe.contains(&id));
        if !exists {
            unknown.insert(id);
        }
        if id == end {
            break;
        }
        id += 1;
    }
}

fn parse_term(term: &str) -> Result<RangeInclusive<u64>> {
    let trimmed = term.trim();
    let syntax_error = || TasklineError::IdentifierSyntax(trimmed.to_string());

    match trimmed.split_once('-') {
        Some((start, end)) => {
            let start = parse_literal(start).ok_or_else(syntax_error)?;
            let end = parse_literal(end).ok_or_else(syntax_error)?;
            if start > end {
                return Err(syntax_error());
            }
            Ok(start..=end)
        }
        None => {
            let id = parse_literal(trimmed).ok_or_else(syntax_error)?;
            Ok(id..=id)
        }
    }
}

fn parse_literal(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // All digits, so overflow is the only failure left.
    Some(s.parse().unwrap_or(u64::MAX))
}
