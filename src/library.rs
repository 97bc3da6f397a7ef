use crate::analysis::{analyze, Analysis};
use crate::bag::compare_clubs;
use crate::config::AnalysisConfig;
use crate::core_types::{grid_from_csv, Grid};
use crate::dedup::dedupe;
use crate::error::{LaunchLabError, LlResult};
use crate::filter::FilterCriteria;
use crate::import::{parse_sheet, ImportSource, ParsePath, ParsedSheet};
use crate::shot::Shot;
use crate::store::ShotStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::info;

/// What the user is told after an import.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub source: String,
    pub path: String,
    pub imported: usize,
    pub duplicates_skipped: usize,
    pub total_rows_considered: usize,
}

/// Appends the new, unseen shots to `existing` and returns the replacement
/// collection. `existing` itself is left alone.
pub fn merge_import(existing: &[Shot], parsed: ParsedSheet, source: &str) -> (Vec<Shot>, ImportReport) {
    let rows = parsed.rows_considered;
    let path = describe_path(&parsed.path);
    let outcome = dedupe(existing, parsed.shots);

    let report = ImportReport {
        source: source.to_string(),
        path,
        imported: outcome.accepted.len(),
        duplicates_skipped: outcome.duplicates,
        total_rows_considered: rows,
    };

    let mut next = Vec::with_capacity(existing.len() + outcome.accepted.len());
    next.extend_from_slice(existing);
    next.extend(outcome.accepted);
    (next, report)
}

fn describe_path(path: &ParsePath) -> String {
    match path {
        ParsePath::HeaderMapped {
            header_row,
            used_two_rows,
            ..
        } => {
            if *used_two_rows {
                format!("header rows {}-{}", header_row + 1, header_row + 2)
            } else {
                format!("header row {}", header_row + 1)
            }
        }
        ParsePath::Fallback { .. } => "fallback".to_string(),
    }
}

/// One session as listed to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: String,
    pub shots: usize,
    pub clubs: Vec<String>,
    pub first: Option<DateTime<Utc>>,
    pub last: Option<DateTime<Utc>>,
}

/// Sessions ordered by their first shot; undated sessions go last.
pub fn session_summaries(shots: &[Shot]) -> Vec<SessionSummary> {
    let mut by_id: BTreeMap<&str, Vec<&Shot>> = BTreeMap::new();
    for s in shots {
        by_id.entry(s.session_id.as_str()).or_default().push(s);
    }

    let mut out: Vec<SessionSummary> = by_id
        .into_iter()
        .map(|(id, group)| {
            let clubs: BTreeSet<&str> = group.iter().map(|s| s.club.as_str()).collect();
            let mut clubs: Vec<String> = clubs.into_iter().map(String::from).collect();
            clubs.sort_by(|a, b| compare_clubs(a, b));
            SessionSummary {
                session_id: id.to_string(),
                shots: group.len(),
                clubs,
                first: group.iter().filter_map(|s| s.timestamp).min(),
                last: group.iter().filter_map(|s| s.timestamp).max(),
            }
        })
        .collect();

    out.sort_by(|a, b| match (a.first, b.first) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.session_id.cmp(&b.session_id)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.session_id.cmp(&b.session_id),
    });
    out
}

/// The shot collection behind a store, plus the config used to read it.
///
/// Every mutation loads the current snapshot, builds a new one and saves it
/// whole.
pub struct ShotLibrary<S: ShotStore> {
    store: S,
    config: AnalysisConfig,
}

impl<S: ShotStore> ShotLibrary<S> {
    pub fn new(store: S, config: AnalysisConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn shots(&self) -> LlResult<Vec<Shot>> {
        self.store.load()
    }

    /// Imports one sheet. Nothing is saved unless parsing succeeds.
    pub fn import_sheet(
        &mut self,
        grid: &Grid,
        csv_text: Option<&str>,
        source: &ImportSource,
    ) -> LlResult<ImportReport> {
        let parsed = parse_sheet(grid, csv_text, source, &self.config.import)?;
        let existing = self.store.load()?;
        let (next, report) = merge_import(&existing, parsed, &source.name);
        if report.imported > 0 {
            self.store.save(&next)?;
        }
        info!(
            "Imported '{}': {} new, {} duplicates, {} rows",
            source.name, report.imported, report.duplicates_skipped, report.total_rows_considered
        );
        Ok(report)
    }

    pub fn import_csv_text(&mut self, text: &str, source: &ImportSource) -> LlResult<ImportReport> {
        let grid = grid_from_csv(text).map_err(|e| LaunchLabError::Unreadable {
            name: source.name.clone(),
            reason: e.to_string(),
        })?;
        self.import_sheet(&grid, Some(text), source)
    }

    /// Reads a CSV export from disk. Binary workbooks are refused: they need
    /// a sheet reader to turn them into a grid first.
    pub fn import_csv_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        imported_at: DateTime<Utc>,
    ) -> LlResult<ImportReport> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let unreadable = |reason: String| LaunchLabError::Unreadable {
            name: name.clone(),
            reason,
        };

        let bytes = fs::read(path).map_err(|e| unreadable(e.to_string()))?;
        let text = String::from_utf8(bytes)
            .map_err(|_| unreadable("not a text CSV file (binary workbooks must be exported as CSV)".to_string()))?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

        let source = ImportSource::new(name.clone(), imported_at);
        self.import_csv_text(text, &source)
    }

    /// Adds already-normalized shots, skipping ones the collection holds.
    pub fn import_shots(&mut self, shots: Vec<Shot>, source: &str) -> LlResult<ImportReport> {
        let existing = self.store.load()?;
        let rows = shots.len();
        let outcome = dedupe(&existing, shots);
        let report = ImportReport {
            source: source.to_string(),
            path: "direct".to_string(),
            imported: outcome.accepted.len(),
            duplicates_skipped: outcome.duplicates,
            total_rows_considered: rows,
        };
        if report.imported > 0 {
            let mut next = existing;
            next.extend(outcome.accepted);
            self.store.save(&next)?;
        }
        Ok(report)
    }

    /// Removes one session. Returns how many shots went with it.
    pub fn delete_session(&mut self, session_id: &str) -> LlResult<usize> {
        let existing = self.store.load()?;
        let next: Vec<Shot> = existing
            .iter()
            .filter(|s| s.session_id != session_id)
            .cloned()
            .collect();
        let removed = existing.len() - next.len();
        if removed > 0 {
            self.store.save(&next)?;
        }
        info!("Deleted session '{}' ({} shots)", session_id, removed);
        Ok(removed)
    }

    pub fn delete_all(&mut self) -> LlResult<usize> {
        let removed = self.store.load()?.len();
        self.store.save(&[])?;
        info!("Deleted all {} shots", removed);
        Ok(removed)
    }

    pub fn sessions(&self) -> LlResult<Vec<SessionSummary>> {
        Ok(session_summaries(&self.store.load()?))
    }

    pub fn analyze(&self, criteria: &FilterCriteria) -> LlResult<Analysis> {
        let shots = self.store.load()?;
        Ok(analyze(&shots, criteria, &self.config))
    }
}
