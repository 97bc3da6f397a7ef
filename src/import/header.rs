use crate::core_types::Cell;
use crate::fields::{self, CanonicalField};
use std::collections::HashMap;
use tracing::debug;

/// Extra score for a candidate that identified the club column.
const CLUB_BONUS: usize = 2;

/// Where the header lives and what each column means.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMatch {
    pub row_index: usize,
    pub used_two_rows: bool,
    pub columns: Vec<Option<CanonicalField>>,
    pub score: usize,
}

impl HeaderMatch {
    fn none() -> Self {
        Self {
            row_index: 0,
            used_two_rows: false,
            columns: Vec::new(),
            score: 0,
        }
    }

    /// First data row after the header (and its units row, if any).
    pub fn data_start(&self) -> usize {
        self.row_index + if self.used_two_rows { 2 } else { 1 }
    }

    pub fn is_usable(&self) -> bool {
        self.score > 0 && self.has_club()
    }

    pub fn has_club(&self) -> bool {
        self.columns.iter().flatten().any(|f| f.is_club())
    }

    /// Field -> column index. When a field appears twice the leftmost wins.
    pub fn field_index(&self) -> FieldIndex {
        FieldIndex::from_columns(&self.columns)
    }

    /// Distinct canonical fields found.
    pub fn matched_fields(&self) -> usize {
        self.field_index().len()
    }
}

/// Column lookup by canonical field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldIndex(HashMap<CanonicalField, usize>);

impl FieldIndex {
    pub fn from_columns(columns: &[Option<CanonicalField>]) -> Self {
        let mut map = HashMap::new();
        for (i, field) in columns.iter().enumerate() {
            if let Some(f) = field {
                map.entry(*f).or_insert(i);
            }
        }
        Self(map)
    }

    /// Maps raw labels through the alias table.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let columns: Vec<Option<CanonicalField>> =
            labels.iter().map(|l| fields::lookup(l.as_ref())).collect();
        Self::from_columns(&columns)
    }

    pub fn get(&self, field: CanonicalField) -> Option<usize> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: CanonicalField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Finds the header row in the first `scan_rows` rows of a sheet.
///
/// Every row is scored on its own and joined cell-by-cell with the row
/// below it (label row + units row). The best score wins; on a tie the
/// earlier candidate is kept, and a single row is tried before the join.
/// Returns row 0 with no columns when nothing scores.
pub fn resolve_header(grid: &[Vec<Cell>], scan_rows: usize) -> HeaderMatch {
    let mut best = HeaderMatch::none();
    let limit = grid.len().min(scan_rows);

    for i in 0..limit {
        let single: Vec<String> = grid[i].iter().map(Cell::as_text).collect();
        consider(&mut best, i, false, &single);

        // A blank row contributes nothing to a join and would only shadow
        // the real header one row further down.
        if let Some(next) = grid.get(i + 1) {
            if !is_blank_row(&grid[i]) && !is_blank_row(next) {
                let joined = join_rows(&grid[i], next);
                consider(&mut best, i, true, &joined);
            }
        }
    }

    debug!(
        "Header resolved: row={}, two_rows={}, score={}",
        best.row_index, best.used_two_rows, best.score
    );
    best
}

fn consider(best: &mut HeaderMatch, row_index: usize, used_two_rows: bool, labels: &[String]) {
    let columns: Vec<Option<CanonicalField>> =
        labels.iter().map(|l| fields::lookup(l)).collect();
    let score = score_columns(&columns);
    if score > best.score {
        *best = HeaderMatch {
            row_index,
            used_two_rows,
            columns,
            score,
        };
    }
}

/// Mapped cells, plus a bonus when one of them is the club.
pub fn score_columns(columns: &[Option<CanonicalField>]) -> usize {
    let mapped = columns.iter().filter(|c| c.is_some()).count();
    let has_club = columns.iter().flatten().any(|f| f.is_club());
    if has_club {
        mapped + CLUB_BONUS
    } else {
        mapped
    }
}

pub fn is_blank_row(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_blank)
}

fn join_rows(top: &[Cell], bottom: &[Cell]) -> Vec<String> {
    let width = top.len().max(bottom.len());
    (0..width)
        .map(|c| {
            let a = top.get(c).map(Cell::as_text).unwrap_or_default();
            let b = bottom.get(c).map(Cell::as_text).unwrap_or_default();
            format!("{} {}", a.trim(), b.trim()).trim().to_string()
        })
        .collect()
}
