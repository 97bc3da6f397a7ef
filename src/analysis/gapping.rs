use super::clubs::ClubRow;
use crate::config::GappingParams;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GapFlag {
    Tight,
    Ok,
    Wide,
}

/// Carry spacing between two clubs that sit next to each other in the bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gap {
    pub longer: String,
    pub shorter: String,
    pub longer_carry: f64,
    pub shorter_carry: f64,
    pub gap: f64,
    pub flag: GapFlag,
}

/// Walks the rows (already in bag order) and measures each adjacent pair.
///
/// Clubs without any carry reading are skipped, so their neighbours are
/// compared directly. The rows should come from the whole bag, not a
/// club-filtered subset.
pub fn gapping(rows: &[ClubRow], params: &GappingParams) -> Vec<Gap> {
    let carried: Vec<(&str, f64)> = rows
        .iter()
        .filter_map(|r| r.avg_carry.map(|c| (r.club.as_str(), c)))
        .collect();

    carried
        .windows(2)
        .map(|pair| {
            let (a, ca) = pair[0];
            let (b, cb) = pair[1];
            let gap = (ca - cb).abs();
            Gap {
                longer: a.to_string(),
                shorter: b.to_string(),
                longer_carry: ca,
                shorter_carry: cb,
                gap,
                flag: flag_for(gap, params),
            }
        })
        .collect()
}

pub fn flag_for(gap: f64, params: &GappingParams) -> GapFlag {
    if gap < params.tight_gap {
        GapFlag::Tight
    } else if gap > params.wide_gap {
        GapFlag::Wide
    } else {
        GapFlag::Ok
    }
}
