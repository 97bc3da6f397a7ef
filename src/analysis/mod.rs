pub mod clubs;
pub mod dispersion;
pub mod gapping;
pub mod shape;
pub mod stats;

pub use self::clubs::{club_rows, ClubRow};
pub use self::dispersion::{dispersion_by_club, dispersion_points, DispersionPoint, DispersionSummary};
pub use self::gapping::{gapping, Gap, GapFlag};
pub use self::shape::{shape_breakdown, ShapeBreakdown, ShotShape};

use crate::config::AnalysisConfig;
use crate::filter::{apply_filters, FilterCriteria};
use crate::shot::Shot;
use serde::Serialize;

/// Everything a view needs for one filter state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub shots: Vec<Shot>,
    pub clubs: Vec<ClubRow>,
    pub shape: ShapeBreakdown,
    pub gaps: Vec<Gap>,
    pub dispersion: Vec<DispersionPoint>,
    pub dispersion_by_club: Vec<DispersionSummary>,
}

/// Filters, then aggregates. Pure: the same inputs always give the same output.
///
/// Gapping is computed over the same criteria minus the club restriction,
/// since spacing only makes sense across the whole bag.
pub fn analyze(shots: &[Shot], criteria: &FilterCriteria, config: &AnalysisConfig) -> Analysis {
    let pool = apply_filters(shots, criteria, &config.outliers);
    let clubs = club_rows(&pool);

    let gaps = if criteria.clubs.is_empty() {
        gapping(&clubs, &config.gapping)
    } else {
        let bag_pool = apply_filters(shots, &criteria.without_club_filter(), &config.outliers);
        gapping(&club_rows(&bag_pool), &config.gapping)
    };

    Analysis {
        shape: shape_breakdown(&pool, &config.shape),
        dispersion: dispersion_points(&pool),
        dispersion_by_club: dispersion_by_club(&pool),
        clubs,
        gaps,
        shots: pool,
    }
}
