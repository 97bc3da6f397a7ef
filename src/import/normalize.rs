use super::coerce::{parse_integer, parse_number, parse_text, parse_timestamp};
use super::header::FieldIndex;
use crate::core_types::Cell;
use crate::fields::CanonicalField as F;
use crate::shot::Shot;

/// Turns one raw row into a [`Shot`].
///
/// Returns `None` when the row has no club: without it the row cannot be
/// grouped or ordered and is not a shot. Every other field that is absent
/// or fails coercion is simply left empty.
pub fn normalize_row(row: &[Cell], index: &FieldIndex, batch_session: &str) -> Option<Shot> {
    let cell = |f: F| index.get(f).and_then(|i| row.get(i));
    let num = |f: F| cell(f).and_then(parse_number);
    let text = |f: F| cell(f).and_then(parse_text);

    let club = compose_club(text(F::ClubType), text(F::Club))?;

    let shot = Shot {
        session_id: text(F::SessionId).unwrap_or_else(|| batch_session.to_string()),
        timestamp: cell(F::Timestamp).and_then(parse_timestamp),
        club,
        swing_count: cell(F::SwingCount).and_then(parse_integer),

        club_speed: num(F::ClubSpeed),
        attack_angle: num(F::AttackAngle),
        club_path: num(F::ClubPath),
        face_angle: num(F::FaceAngle),
        face_to_path: num(F::FaceToPath),
        dynamic_loft: num(F::DynamicLoft),
        spin_loft: num(F::SpinLoft),

        ball_speed: num(F::BallSpeed),
        smash_factor: num(F::SmashFactor),

        launch_angle: num(F::LaunchAngle),
        launch_direction: num(F::LaunchDirection),
        backspin: num(F::Backspin),
        sidespin: num(F::Sidespin),
        spin_rate: num(F::SpinRate),
        spin_rate_type: text(F::SpinRateType),
        spin_axis: num(F::SpinAxis),
        apex_height: num(F::ApexHeight),
        descent_angle: num(F::DescentAngle),
        hang_time: num(F::HangTime),

        carry_distance: num(F::CarryDistance),
        carry_deviation_angle: num(F::CarryDeviationAngle),
        carry_deviation_distance: num(F::CarryDeviationDistance),
        total_distance: num(F::TotalDistance),
        total_deviation_angle: num(F::TotalDeviationAngle),
        total_deviation_distance: num(F::TotalDeviationDistance),
    };

    Some(shot.with_derived())
}

/// Builds the club label from the type and name columns.
///
/// Both are kept only when neither already contains the other, so
/// `("Driver", "Driver")` stays `"Driver"` while `("7 Iron", "Blue")`
/// becomes `"7 Iron (Blue)"`. The type leads so bag ordering can read it.
pub fn compose_club(club_type: Option<String>, club_name: Option<String>) -> Option<String> {
    match (club_type, club_name) {
        (Some(t), Some(n)) => {
            let (tl, nl) = (t.to_lowercase(), n.to_lowercase());
            if nl.contains(&tl) {
                Some(n)
            } else if tl.contains(&nl) {
                Some(t)
            } else {
                Some(format!("{} ({})", t, n))
            }
        }
        (Some(t), None) => Some(t),
        (None, Some(n)) => Some(n),
        (None, None) => None,
    }
}
