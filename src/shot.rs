use crate::consts::{SMASH_MAX, SMASH_MIN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded swing and its ball flight.
///
/// Every measurement is optional. A missing value means "not measured" and
/// is left out of aggregates; it is never read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Shot {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub club: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swing_count: Option<i64>,

    // Swing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_path: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_to_path: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_loft: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spin_loft: Option<f64>,

    // Ball
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smash_factor: Option<f64>,

    // Launch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_direction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backspin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidespin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spin_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spin_rate_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spin_axis: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apex_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descent_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hang_time: Option<f64>,

    // Distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carry_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carry_deviation_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carry_deviation_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_deviation_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_deviation_distance: Option<f64>,
}

impl Shot {
    /// Fills smash factor and face-to-path when the source did not report them.
    /// Values the monitor measured itself are kept untouched.
    pub fn with_derived(mut self) -> Self {
        if self.smash_factor.is_none() {
            self.smash_factor = derive_smash(self.ball_speed, self.club_speed);
        }
        if self.face_to_path.is_none() {
            if let (Some(face), Some(path)) = (self.face_angle, self.club_path) {
                self.face_to_path = Some(face - path);
            }
        }
        self
    }

    /// Lateral offset at landing, in the same unit as carry.
    ///
    /// Uses the measured deviation distance when present, otherwise projects
    /// carry through launch direction. The carry deviation angle is not used.
    pub fn lateral_offset(&self) -> Option<f64> {
        if let Some(d) = self.carry_deviation_distance {
            return Some(d);
        }
        let carry = self.carry_distance?;
        let direction = self.launch_direction?;
        Some(carry * direction.to_radians().sin())
    }
}

/// `ball / club`, clamped to the plausible strike range.
pub fn derive_smash(ball_speed: Option<f64>, club_speed: Option<f64>) -> Option<f64> {
    match (ball_speed, club_speed) {
        (Some(b), Some(c)) if c > 0.0 => {
            let ratio = b / c;
            if ratio.is_finite() {
                Some(ratio.clamp(SMASH_MIN, SMASH_MAX))
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_smash_is_clamped() {
        assert_eq!(derive_smash(Some(300.0), Some(100.0)), Some(SMASH_MAX));
        assert_eq!(derive_smash(Some(10.0), Some(100.0)), Some(SMASH_MIN));
        assert_eq!(derive_smash(Some(150.0), Some(0.0)), None);
        assert_eq!(derive_smash(None, Some(100.0)), None);
    }

    #[test]
    fn native_smash_is_not_rederived() {
        let shot = Shot {
            ball_speed: Some(150.0),
            club_speed: Some(100.0),
            smash_factor: Some(2.4),
            ..Default::default()
        }
        .with_derived();
        assert_eq!(shot.smash_factor, Some(2.4));
    }

    #[test]
    fn lateral_offset_prefers_measured_distance() {
        let shot = Shot {
            carry_distance: Some(150.0),
            carry_deviation_distance: Some(-4.0),
            launch_direction: Some(10.0),
            ..Default::default()
        };
        assert_eq!(shot.lateral_offset(), Some(-4.0));
    }

    #[test]
    fn lateral_offset_projects_launch_direction_not_deviation_angle() {
        let shot = Shot {
            carry_distance: Some(150.0),
            launch_direction: Some(2.0),
            carry_deviation_angle: Some(6.0),
            ..Default::default()
        };
        let lateral = shot.lateral_offset().unwrap();
        assert!((lateral - 150.0 * 2.0_f64.to_radians().sin()).abs() < 1e-9);
        assert!((lateral - 5.235).abs() < 1e-3);
    }

    #[test]
    fn deviation_angle_alone_gives_no_offset() {
        let shot = Shot {
            carry_distance: Some(150.0),
            carry_deviation_angle: Some(6.0),
            ..Default::default()
        };
        assert_eq!(shot.lateral_offset(), None);
    }
}
