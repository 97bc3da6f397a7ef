#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use launchlab::core_types::{Cell, Grid};
use launchlab::Shot;

/// Fluent builder for shot fixtures.
pub struct ShotBuilder {
    shot: Shot,
}

impl ShotBuilder {
    pub fn new(club: &str) -> Self {
        Self {
            shot: Shot {
                session_id: "test-session".to_string(),
                club: club.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn session(mut self, id: &str) -> Self {
        self.shot.session_id = id.to_string();
        self
    }

    pub fn at(mut self, y: i32, m: u32, d: u32, h: u32, min: u32) -> Self {
        self.shot.timestamp = Some(utc(y, m, d, h, min));
        self
    }

    pub fn carry(mut self, v: f64) -> Self {
        self.shot.carry_distance = Some(v);
        self
    }

    pub fn total(mut self, v: f64) -> Self {
        self.shot.total_distance = Some(v);
        self
    }

    pub fn speeds(mut self, club: f64, ball: f64) -> Self {
        self.shot.club_speed = Some(club);
        self.shot.ball_speed = Some(ball);
        self
    }

    pub fn smash(mut self, v: f64) -> Self {
        self.shot.smash_factor = Some(v);
        self
    }

    pub fn direction(mut self, v: f64) -> Self {
        self.shot.launch_direction = Some(v);
        self
    }

    pub fn spin_axis(mut self, v: f64) -> Self {
        self.shot.spin_axis = Some(v);
        self
    }

    pub fn lateral(mut self, v: f64) -> Self {
        self.shot.carry_deviation_distance = Some(v);
        self
    }

    pub fn spin(mut self, v: f64) -> Self {
        self.shot.spin_rate = Some(v);
        self
    }

    pub fn build(self) -> Shot {
        self.shot
    }
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// Builds a grid from string rows, inferring numbers like a sheet reader.
pub fn grid(rows: &[&[&str]]) -> Grid {
    rows.iter()
        .map(|r| r.iter().map(|c| Cell::from_raw(c)).collect())
        .collect()
}

/// `n` shots of one club with carries spread evenly around `center`.
pub fn spread(club: &str, center: f64, n: usize) -> Vec<Shot> {
    (0..n)
        .map(|i| {
            ShotBuilder::new(club)
                .carry(center + i as f64 - (n as f64 - 1.0) / 2.0)
                .build()
        })
        .collect()
}
