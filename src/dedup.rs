use crate::consts::{FINGERPRINT_DECIMALS, FINGERPRINT_SEPARATOR};
use crate::shot::Shot;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Identity of a physical swing across repeated imports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Joins club, the headline measurements and the timestamp (epoch ms).
///
/// Each number is rounded on its own, so two readings equal up to the
/// rounding precision collapse to the same key. Missing values are empty.
pub fn fingerprint(shot: &Shot) -> Fingerprint {
    let numbers = [
        shot.carry_distance,
        shot.total_distance,
        shot.ball_speed,
        shot.club_speed,
        shot.launch_angle,
        shot.spin_rate,
        shot.launch_direction,
        shot.apex_height,
    ];

    let mut parts: Vec<String> = Vec::with_capacity(numbers.len() + 2);
    parts.push(shot.club.trim().to_string());
    parts.extend(numbers.iter().map(|v| v.map(round_component).unwrap_or_default()));
    parts.push(
        shot.timestamp
            .map(|t| t.timestamp_millis().to_string())
            .unwrap_or_default(),
    );

    Fingerprint(parts.join(&FINGERPRINT_SEPARATOR.to_string()))
}

fn round_component(v: f64) -> String {
    let scale = 10f64.powi(FINGERPRINT_DECIMALS);
    let mut r = (v * scale).round() / scale;
    if r == 0.0 {
        // folds -0.0 into 0.0
        r = 0.0;
    }
    format!("{:.*}", FINGERPRINT_DECIMALS as usize, r)
}

#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
    pub accepted: Vec<Shot>,
    pub duplicates: usize,
}

/// Drops shots already in `existing` or seen earlier in `batch`.
pub fn dedupe(existing: &[Shot], batch: Vec<Shot>) -> DedupOutcome {
    let mut seen: HashSet<Fingerprint> = existing.iter().map(fingerprint).collect();
    let mut outcome = DedupOutcome::default();

    for shot in batch {
        if seen.insert(fingerprint(&shot)) {
            outcome.accepted.push(shot);
        } else {
            outcome.duplicates += 1;
        }
    }

    debug!(
        "Dedup: {} accepted, {} duplicates",
        outcome.accepted.len(),
        outcome.duplicates
    );
    outcome
}
