use crate::analysis::stats::{mean_sd, present};
use crate::config::OutlierParams;
use crate::shot::Shot;
use chrono::{Days, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What the user narrowed the shot list to. The default passes everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// `None` means every session.
    pub session: Option<String>,
    /// Empty means every club.
    pub clubs: BTreeSet<String>,
    pub date_from: Option<NaiveDate>,
    /// Inclusive: the whole of this day passes.
    pub date_to: Option<NaiveDate>,
    pub carry_min: Option<f64>,
    pub carry_max: Option<f64>,
    pub exclude_outliers: bool,
}

impl FilterCriteria {
    /// Same criteria with the club restriction lifted (gapping is whole-bag).
    pub fn without_club_filter(&self) -> Self {
        Self {
            clubs: BTreeSet::new(),
            ..self.clone()
        }
    }

    fn carry_bound_active(&self) -> bool {
        self.carry_min.is_some() || self.carry_max.is_some()
    }
}

/// Applies every predicate, then (when asked) outlier exclusion over what is left.
pub fn apply_filters(shots: &[Shot], criteria: &FilterCriteria, params: &OutlierParams) -> Vec<Shot> {
    let pool: Vec<Shot> = shots
        .iter()
        .filter(|s| passes_predicates(s, criteria))
        .cloned()
        .collect();

    if criteria.exclude_outliers {
        exclude_outliers(pool, params)
    } else {
        pool
    }
}

pub fn passes_predicates(shot: &Shot, criteria: &FilterCriteria) -> bool {
    passes_session(shot, criteria)
        && passes_club(shot, criteria)
        && passes_dates(shot, criteria)
        && passes_carry(shot, criteria)
}

fn passes_session(shot: &Shot, criteria: &FilterCriteria) -> bool {
    match &criteria.session {
        Some(id) => &shot.session_id == id,
        None => true,
    }
}

fn passes_club(shot: &Shot, criteria: &FilterCriteria) -> bool {
    criteria.clubs.is_empty() || criteria.clubs.contains(&shot.club)
}

/// Undated shots always pass.
fn passes_dates(shot: &Shot, criteria: &FilterCriteria) -> bool {
    let Some(ts) = shot.timestamp else {
        return true;
    };
    if let Some(from) = criteria.date_from {
        let start = Utc.from_utc_datetime(&from.and_time(NaiveTime::MIN));
        if ts < start {
            return false;
        }
    }
    if let Some(to) = criteria.date_to {
        // exclusive bound at the start of the following day
        if let Some(next) = to.checked_add_days(Days::new(1)) {
            let end = Utc.from_utc_datetime(&next.and_time(NaiveTime::MIN));
            if ts >= end {
                return false;
            }
        }
    }
    true
}

/// A shot without carry counts as `-inf`: any minimum drops it, a maximum never does.
fn passes_carry(shot: &Shot, criteria: &FilterCriteria) -> bool {
    if !criteria.carry_bound_active() {
        return true;
    }
    let carry = shot.carry_distance.unwrap_or(f64::NEG_INFINITY);
    if criteria.carry_min.is_some_and(|min| carry < min) {
        return false;
    }
    if criteria.carry_max.is_some_and(|max| carry > max) {
        return false;
    }
    true
}

/// Closed interval a metric must fall in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub lo: f64,
    pub hi: f64,
}

impl Bound {
    pub fn contains(&self, v: f64) -> bool {
        v >= self.lo && v <= self.hi
    }
}

/// `mean ± sigma·sd` over the values present, or `None` below `min_points`.
pub fn sigma_bound(values: &[f64], params: &OutlierParams) -> Option<Bound> {
    if values.len() < params.outlier_min_points {
        return None;
    }
    let stats = mean_sd(values)?;
    let half = params.outlier_sigma * stats.sd;
    Some(Bound {
        lo: stats.mean - half,
        hi: stats.mean + half,
    })
}

/// Global z-score exclusion on carry and smash factor.
///
/// Each metric gets a bound only with enough points; a shot must sit inside
/// every bound that exists, and a shot missing a metric is not judged on it.
pub fn exclude_outliers(pool: Vec<Shot>, params: &OutlierParams) -> Vec<Shot> {
    let carry_bound = sigma_bound(&present(&pool, |s| s.carry_distance), params);
    let smash_bound = sigma_bound(&present(&pool, |s| s.smash_factor), params);

    let within = |value: Option<f64>, bound: Option<Bound>| match (value, bound) {
        (Some(v), Some(b)) => b.contains(v),
        _ => true,
    };

    pool.into_iter()
        .filter(|s| within(s.carry_distance, carry_bound) && within(s.smash_factor, smash_bound))
        .collect()
}
