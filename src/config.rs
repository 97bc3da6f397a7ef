use crate::error::{LaunchLabError, LlResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    #[command(flatten)]
    pub import: ImportParams,
    #[command(flatten)]
    pub outliers: OutlierParams,
    #[command(flatten)]
    pub gapping: GappingParams,
    #[command(flatten)]
    pub shape: ShapeParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImportParams {
    /// Rows searched for a header before giving up.
    #[arg(long, default_value_t = 20)]
    pub header_scan_rows: usize,

    // === WEAK MAPPING ===
    #[arg(long, default_value_t = 6)]
    pub min_matched_columns: usize,
    #[arg(long, default_value_t = 3)]
    pub min_carry_rows: usize,
    #[arg(long, default_value_t = 0.25)]
    pub min_carry_fraction: f64,
}

impl Default for ImportParams {
    fn default() -> Self {
        Self {
            header_scan_rows: 20,
            min_matched_columns: 6,
            min_carry_rows: 3,
            min_carry_fraction: 0.25,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutlierParams {
    #[arg(long, default_value_t = 2.5)]
    pub outlier_sigma: f64,
    #[arg(long, default_value_t = 5)]
    pub outlier_min_points: usize,
}

impl Default for OutlierParams {
    fn default() -> Self {
        Self {
            outlier_sigma: 2.5,
            outlier_min_points: 5,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GappingParams {
    /// Adjacent clubs closer than this (yards) overlap.
    #[arg(long, default_value_t = 12.0)]
    pub tight_gap: f64,
    /// Adjacent clubs further apart than this leave a hole in the bag.
    #[arg(long, default_value_t = 25.0)]
    pub wide_gap: f64,
}

impl Default for GappingParams {
    fn default() -> Self {
        Self {
            tight_gap: 12.0,
            wide_gap: 25.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShapeParams {
    /// Half-width (degrees) of the straight bucket.
    #[arg(long, default_value_t = 2.0)]
    pub straight_window_deg: f64,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            straight_window_deg: 2.0,
        }
    }
}

impl AnalysisConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LlResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LaunchLabError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            LaunchLabError::Config(format!("Failed to parse config '{}': {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LlResult<()> {
        if !(0.0..=1.0).contains(&self.import.min_carry_fraction) {
            return Err(LaunchLabError::Config(format!(
                "min_carry_fraction must be within 0..=1, got {}",
                self.import.min_carry_fraction
            )));
        }
        if self.outliers.outlier_sigma <= 0.0 {
            return Err(LaunchLabError::Config(
                "outlier_sigma must be positive".to_string(),
            ));
        }
        if self.gapping.tight_gap > self.gapping.wide_gap {
            return Err(LaunchLabError::Config(format!(
                "tight_gap ({}) exceeds wide_gap ({})",
                self.gapping.tight_gap, self.gapping.wide_gap
            )));
        }
        Ok(())
    }

    /// Copies over only the values the user actually typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &AnalysisConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(import.header_scan_rows);
        update_if_present!(import.min_matched_columns);
        update_if_present!(import.min_carry_rows);
        update_if_present!(import.min_carry_fraction);

        update_if_present!(outliers.outlier_sigma);
        update_if_present!(outliers.outlier_min_points);

        update_if_present!(gapping.tight_gap);
        update_if_present!(gapping.wide_gap);

        update_if_present!(shape.straight_window_deg);
    }
}
