//! Sheet import: header resolution, row normalization and the CSV fallback.
//!
//! The header path always runs first. When its mapping is weak the
//! fallback parser gets a turn on the raw text, and whichever path yields
//! more rows with a carry value is kept. Ties go to the header path.

pub mod coerce;
pub mod fallback;
pub mod header;
pub mod normalize;

use crate::config::ImportParams;
use crate::core_types::{Cell, Grid};
use crate::error::{LaunchLabError, LlResult};
use crate::fields;
use crate::shot::Shot;
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::{debug, info, warn};

use self::fallback::{fallback_shots, is_units_row, parse_fallback};
use self::header::{is_blank_row, resolve_header, HeaderMatch};
use self::normalize::normalize_row;

/// The file being imported and when.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSource {
    pub name: String,
    pub imported_at: DateTime<Utc>,
}

impl ImportSource {
    pub fn new(name: impl Into<String>, imported_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            imported_at,
        }
    }

    /// Session id given to every row of this import that lacks its own.
    pub fn batch_session_id(&self) -> String {
        let stem = Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("import");
        format!("{}@{}", stem, self.imported_at.format("%Y-%m-%dT%H:%M:%S"))
    }
}

/// Which path produced the shots.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsePath {
    HeaderMapped {
        header_row: usize,
        used_two_rows: bool,
        matched_fields: usize,
    },
    Fallback {
        units_row: bool,
    },
}

#[derive(Debug, Clone)]
pub struct ParsedSheet {
    pub path: ParsePath,
    pub shots: Vec<Shot>,
    pub rows_considered: usize,
}

impl ParsedSheet {
    pub fn carry_rows(&self) -> usize {
        count_carry(&self.shots)
    }
}

/// Parses one sheet into shots.
///
/// `csv_text` is the raw file text when the source was a CSV; without it the
/// fallback parser is unavailable.
pub fn parse_sheet(
    grid: &Grid,
    csv_text: Option<&str>,
    source: &ImportSource,
    params: &ImportParams,
) -> LlResult<ParsedSheet> {
    let has_text = csv_text.is_some_and(|t| !t.trim().is_empty());
    if grid.iter().all(|r| is_blank_row(r)) && !has_text {
        return Err(LaunchLabError::EmptySheet(source.name.clone()));
    }

    let batch_session = source.batch_session_id();
    let header = resolve_header(grid, params.header_scan_rows);
    let header_attempt = header
        .is_usable()
        .then(|| parse_with_header(grid, &header, &batch_session));

    let weak = match &header_attempt {
        Some(parsed) => is_weak(parsed, params),
        None => true,
    };

    let chosen = if weak {
        if let Some(parsed) = &header_attempt {
            info!(
                "Weak header mapping in '{}' ({} fields, {} carry rows of {}), trying fallback",
                source.name,
                header.matched_fields(),
                parsed.carry_rows(),
                parsed.rows_considered
            );
        }
        let fallback_attempt = csv_text.and_then(|t| parse_with_fallback(t, &batch_session));
        pick(header_attempt, fallback_attempt)
    } else {
        header_attempt
    };

    match chosen {
        Some(parsed) if !parsed.shots.is_empty() => {
            info!(
                "Parsed '{}' via {:?}: {} shots from {} rows",
                source.name,
                parsed.path,
                parsed.shots.len(),
                parsed.rows_considered
            );
            Ok(parsed)
        }
        Some(parsed) if parsed.rows_considered == 0 => {
            Err(LaunchLabError::EmptySheet(source.name.clone()))
        }
        _ => {
            warn!("No usable rows in '{}'", source.name);
            Err(LaunchLabError::NoUsableRows {
                name: source.name.clone(),
                expected: fields::expected_columns(),
            })
        }
    }
}

fn parse_with_header(grid: &Grid, header: &HeaderMatch, batch_session: &str) -> ParsedSheet {
    let index = header.field_index();
    let mut data: Vec<&Vec<Cell>> = grid
        .iter()
        .skip(header.data_start())
        .filter(|r| !is_blank_row(r))
        .collect();

    // a units row left under a single-row header
    let units: Option<Vec<String>> = data.first().map(|r| r.iter().map(Cell::as_text).collect());
    if units.is_some_and(|u| is_units_row(u.as_slice())) {
        debug!("Skipping units row under header row {}", header.row_index + 1);
        data.remove(0);
    }

    let shots: Vec<Shot> = data
        .iter()
        .filter_map(|row| normalize_row(row, &index, batch_session))
        .collect();

    ParsedSheet {
        path: ParsePath::HeaderMapped {
            header_row: header.row_index,
            used_two_rows: header.used_two_rows,
            matched_fields: index.len(),
        },
        shots,
        rows_considered: data.len(),
    }
}

fn parse_with_fallback(text: &str, batch_session: &str) -> Option<ParsedSheet> {
    let table = parse_fallback(text)?;
    let shots = fallback_shots(&table, batch_session);
    debug!(
        "Fallback parser: {} shots from {} rows (units row: {})",
        shots.len(),
        table.data_rows.len(),
        table.units_row
    );
    Some(ParsedSheet {
        path: ParsePath::Fallback {
            units_row: table.units_row,
        },
        shots,
        rows_considered: table.data_rows.len(),
    })
}

fn is_weak(parsed: &ParsedSheet, params: &ImportParams) -> bool {
    let matched = match parsed.path {
        ParsePath::HeaderMapped { matched_fields, .. } => matched_fields,
        ParsePath::Fallback { .. } => return false,
    };
    let needed = (params.min_carry_rows as f64)
        .max(params.min_carry_fraction * parsed.rows_considered as f64);
    matched < params.min_matched_columns || (parsed.carry_rows() as f64) < needed
}

/// Keeps the header result unless the fallback found strictly more carries.
fn pick(header: Option<ParsedSheet>, fallback: Option<ParsedSheet>) -> Option<ParsedSheet> {
    match (header, fallback) {
        (Some(h), Some(f)) => {
            if f.carry_rows() > h.carry_rows() {
                Some(f)
            } else {
                Some(h)
            }
        }
        (Some(h), None) => Some(h),
        (None, Some(f)) => Some(f),
        (None, None) => None,
    }
}

fn count_carry(shots: &[Shot]) -> usize {
    shots.iter().filter(|s| s.carry_distance.is_some()).count()
}
