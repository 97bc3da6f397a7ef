use crate::config::ShapeParams;
use crate::shot::Shot;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Three-bucket shape scheme; negative angles are left of target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShotShape {
    Draw,
    Straight,
    Fade,
}

/// The directional reading a shape is judged on: launch direction,
/// else spin axis, else face angle.
pub fn direction_signal(shot: &Shot) -> Option<f64> {
    shot.launch_direction
        .or(shot.spin_axis)
        .or(shot.face_angle)
        .filter(|v| v.is_finite())
}

pub fn classify_shape(shot: &Shot, params: &ShapeParams) -> Option<ShotShape> {
    let signal = direction_signal(shot)?;
    let window = params.straight_window_deg;
    Some(if signal < -window {
        ShotShape::Draw
    } else if signal > window {
        ShotShape::Fade
    } else {
        ShotShape::Straight
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeBreakdown {
    pub draw: usize,
    pub straight: usize,
    pub fade: usize,
    /// Shots with no directional reading at all.
    pub unclassified: usize,
    pub total: usize,
}

impl ShapeBreakdown {
    pub fn count(&self, shape: ShotShape) -> usize {
        match shape {
            ShotShape::Draw => self.draw,
            ShotShape::Straight => self.straight,
            ShotShape::Fade => self.fade,
        }
    }

    /// Share of the whole filtered pool, in percent.
    pub fn percent(&self, shape: ShotShape) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(shape) as f64 * 100.0 / self.total as f64
        }
    }
}

pub fn shape_breakdown(pool: &[Shot], params: &ShapeParams) -> ShapeBreakdown {
    let mut out = ShapeBreakdown {
        total: pool.len(),
        ..Default::default()
    };
    for shot in pool {
        match classify_shape(shot, params) {
            Some(ShotShape::Draw) => out.draw += 1,
            Some(ShotShape::Straight) => out.straight += 1,
            Some(ShotShape::Fade) => out.fade += 1,
            None => out.unclassified += 1,
        }
    }
    out
}
