use super::clubs::group_by_club;
use super::stats::{mean_sd, MeanSd};
use crate::bag::sort_by_bag_order;
use crate::shot::Shot;
use serde::{Deserialize, Serialize};

/// One landing spot: carry forward, lateral offset (right positive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispersionPoint {
    pub club: String,
    pub carry: f64,
    pub lateral: f64,
    /// True when the offset was projected from an angle rather than measured.
    pub derived: bool,
}

pub fn dispersion_points(pool: &[Shot]) -> Vec<DispersionPoint> {
    pool.iter()
        .filter_map(|s| {
            let carry = s.carry_distance?;
            let lateral = s.lateral_offset()?;
            Some(DispersionPoint {
                club: s.club.clone(),
                carry,
                lateral,
                derived: s.carry_deviation_distance.is_none(),
            })
        })
        .collect()
}

/// Spread of one club's landing pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispersionSummary {
    pub club: String,
    pub points: usize,
    pub mean_carry: f64,
    pub sd_carry: f64,
    pub mean_lateral: f64,
    pub sd_lateral: f64,
}

pub fn dispersion_by_club(pool: &[Shot]) -> Vec<DispersionSummary> {
    let points = dispersion_points(pool);
    let mut out: Vec<DispersionSummary> = group_by_club(pool)
        .into_iter()
        .filter_map(|(club, _)| {
            let mine: Vec<&DispersionPoint> = points.iter().filter(|p| p.club == club).collect();
            let carry: Vec<f64> = mine.iter().map(|p| p.carry).collect();
            let lateral: Vec<f64> = mine.iter().map(|p| p.lateral).collect();
            let c: MeanSd = mean_sd(&carry)?;
            let l: MeanSd = mean_sd(&lateral)?;
            Some(DispersionSummary {
                club,
                points: c.n,
                mean_carry: c.mean,
                sd_carry: c.sd,
                mean_lateral: l.mean,
                sd_lateral: l.sd,
            })
        })
        .collect();
    sort_by_bag_order(&mut out, |d| d.club.as_str());
    out
}
