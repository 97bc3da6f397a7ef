use super::FilterArgs;
use crate::reports;
use clap::Args;
use launchlab::config::AnalysisConfig;
use launchlab::library::ShotLibrary;
use launchlab::store::ShotStore;
use launchlab::LlResult;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Print the analysis as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub config: AnalysisConfig,
}

pub fn run<S: ShotStore>(args: ReportArgs, library: &ShotLibrary<S>) -> LlResult<()> {
    let analysis = library.analyze(&args.filters.criteria())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    if analysis.shots.is_empty() {
        println!("\n⚠️  No shots match the current filters.");
        return Ok(());
    }

    println!("\n📊 === CLUB REPORT ({} shots) === 📊", analysis.shots.len());
    reports::print_club_table(&analysis.clubs);
    reports::print_gapping_table(&analysis.gaps);
    reports::print_shape_breakdown(&analysis.shape);
    reports::print_dispersion_table(&analysis.dispersion_by_club);
    Ok(())
}
