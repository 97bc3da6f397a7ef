use super::stats::{mean, present, quantile, std_dev};
use crate::bag::sort_by_bag_order;
use crate::shot::Shot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-club summary over a filtered pool. Derived on demand, never stored.
///
/// Each average only covers the shots that reported that metric, so two
/// fields of the same row can rest on different sample sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClubRow {
    pub club: String,
    pub count: usize,
    pub avg_carry: Option<f64>,
    pub sd_carry: Option<f64>,
    pub carry_p10: Option<f64>,
    pub carry_median: Option<f64>,
    pub carry_p90: Option<f64>,
    pub avg_total: Option<f64>,
    pub sd_total: Option<f64>,
    pub avg_smash: Option<f64>,
    pub sd_smash: Option<f64>,
    pub avg_spin: Option<f64>,
    pub sd_spin: Option<f64>,
    pub avg_club_speed: Option<f64>,
    pub sd_club_speed: Option<f64>,
    pub avg_ball_speed: Option<f64>,
    pub sd_ball_speed: Option<f64>,
    pub avg_launch_angle: Option<f64>,
    pub sd_launch_angle: Option<f64>,
    pub avg_face_to_path: Option<f64>,
    pub sd_face_to_path: Option<f64>,
}

/// Groups shots by their exact club label, in first-seen order.
pub fn group_by_club(pool: &[Shot]) -> Vec<(String, Vec<&Shot>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Shot>> = HashMap::new();
    for shot in pool {
        let entry = groups.entry(shot.club.as_str()).or_default();
        if entry.is_empty() {
            order.push(shot.club.clone());
        }
        entry.push(shot);
    }
    order
        .into_iter()
        .map(|club| {
            let shots = groups.remove(club.as_str()).unwrap_or_default();
            (club, shots)
        })
        .collect()
}

/// One row per club, in bag order.
pub fn club_rows(pool: &[Shot]) -> Vec<ClubRow> {
    let mut rows: Vec<ClubRow> = group_by_club(pool)
        .into_iter()
        .map(|(club, shots)| build_row(club, &shots))
        .collect();
    sort_by_bag_order(&mut rows, |r| r.club.as_str());
    rows
}

fn build_row(club: String, shots: &[&Shot]) -> ClubRow {
    let carry = present(shots, |s| s.carry_distance);
    let total = present(shots, |s| s.total_distance);
    let smash = present(shots, |s| s.smash_factor);
    let spin = present(shots, |s| s.spin_rate);
    let club_speed = present(shots, |s| s.club_speed);
    let ball_speed = present(shots, |s| s.ball_speed);
    let launch = present(shots, |s| s.launch_angle);
    let ftp = present(shots, |s| s.face_to_path);

    ClubRow {
        club,
        count: shots.len(),
        avg_carry: mean(&carry),
        sd_carry: std_dev(&carry),
        carry_p10: quantile(&carry, 0.1),
        carry_median: quantile(&carry, 0.5),
        carry_p90: quantile(&carry, 0.9),
        avg_total: mean(&total),
        sd_total: std_dev(&total),
        avg_smash: mean(&smash),
        sd_smash: std_dev(&smash),
        avg_spin: mean(&spin),
        sd_spin: std_dev(&spin),
        avg_club_speed: mean(&club_speed),
        sd_club_speed: std_dev(&club_speed),
        avg_ball_speed: mean(&ball_speed),
        sd_ball_speed: std_dev(&ball_speed),
        avg_launch_angle: mean(&launch),
        sd_launch_angle: std_dev(&launch),
        avg_face_to_path: mean(&ftp),
        sd_face_to_path: std_dev(&ftp),
    }
}
