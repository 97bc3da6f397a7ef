use super::header::FieldIndex;
use super::normalize::normalize_row;
use crate::core_types::Cell;
use crate::fields::{self, CanonicalField};
use crate::shot::Shot;
use tracing::debug;

/// A CSV read line-by-line, for exports the header resolver cannot cope with.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackTable {
    pub header: Vec<String>,
    pub units_row: bool,
    pub data_rows: Vec<Vec<String>>,
}

/// Splits raw CSV text without any quoting rules.
///
/// Tabs and quote characters are dropped, lines are split on commas and a
/// units row directly under the header (`[mph]`, `(yds)` ...) is skipped.
/// Returns `None` unless the header names a club or club type column.
pub fn parse_fallback(text: &str) -> Option<FallbackTable> {
    let mut lines = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(split_line);

    let header = lines.next()?;
    let has_club_column = header
        .iter()
        .filter_map(|h| fields::lookup(h))
        .any(CanonicalField::is_club);
    if !has_club_column {
        debug!("Fallback parser: no club column in header {:?}", header);
        return None;
    }

    let mut rest: Vec<Vec<String>> = lines.collect();
    let units_row = rest.first().is_some_and(|r| is_units_row(r.as_slice()));
    if units_row {
        rest.remove(0);
    }

    Some(FallbackTable {
        header,
        units_row,
        data_rows: rest,
    })
}

/// Maps the table's rows onto shots using the shared alias table.
pub fn fallback_shots(table: &FallbackTable, batch_session: &str) -> Vec<Shot> {
    let index = FieldIndex::from_labels(&table.header);
    table
        .data_rows
        .iter()
        .filter_map(|raw| {
            let row: Vec<Cell> = raw.iter().map(|s| Cell::Text(s.clone())).collect();
            normalize_row(&row, &index, batch_session)
        })
        .collect()
}

fn split_line(line: &str) -> Vec<String> {
    let cleaned: String = line
        .chars()
        .filter(|&c| c != '\t' && c != '"')
        .collect();
    cleaned.split(',').map(|s| s.trim().to_string()).collect()
}

/// A row where some token is a bracketed unit and no token carries a number.
pub(crate) fn is_units_row<S: AsRef<str>>(row: &[S]) -> bool {
    let bracketed = row.iter().any(|t| looks_like_unit(t.as_ref()));
    let numeric = row.iter().any(|t| {
        let t = t.as_ref();
        t.chars().any(|c| c.is_ascii_digit()) && !looks_like_unit(t)
    });
    bracketed && !numeric
}

fn looks_like_unit(token: &str) -> bool {
    let t = token.trim();
    t.len() >= 2
        && ((t.starts_with('[') && t.ends_with(']')) || (t.starts_with('(') && t.ends_with(')')))
}
