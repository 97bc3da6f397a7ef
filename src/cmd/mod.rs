pub mod export;
pub mod import;
pub mod purge;
pub mod report;
pub mod sample;
pub mod sessions;

use chrono::NaiveDate;
use clap::Args;
use launchlab::filter::FilterCriteria;

/// Shot filters shared by `report` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub session: Option<String>,

    /// Repeat to select several clubs.
    #[arg(long = "club")]
    pub clubs: Vec<String>,

    /// First day included (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day included (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<NaiveDate>,

    #[arg(long)]
    pub min_carry: Option<f64>,

    #[arg(long)]
    pub max_carry: Option<f64>,

    #[arg(long, default_value_t = false)]
    pub exclude_outliers: bool,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            session: self.session.clone(),
            clubs: self.clubs.iter().cloned().collect(),
            date_from: self.from,
            date_to: self.to,
            carry_min: self.min_carry,
            carry_max: self.max_carry,
            exclude_outliers: self.exclude_outliers,
        }
    }
}
