use crate::reports;
use chrono::Utc;
use clap::Args;
use launchlab::config::AnalysisConfig;
use launchlab::library::ShotLibrary;
use launchlab::store::ShotStore;
use launchlab::{LaunchLabError, LlResult};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// CSV exports to import, in order.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub config: AnalysisConfig,
}

/// Imports each file on its own. A failing file is reported and leaves the
/// collection as it was; the others still go through.
pub fn run<S: ShotStore>(args: ImportArgs, library: &mut ShotLibrary<S>) -> LlResult<()> {
    let imported_at = Utc::now();
    let mut failed = 0usize;
    let mut reports_ok = Vec::new();

    println!("\n📥 Importing {} file(s)...", args.files.len());
    for file in &args.files {
        match library.import_csv_file(file, imported_at) {
            Ok(report) => reports_ok.push(report),
            Err(e) => {
                failed += 1;
                eprintln!("❌ {}: {}", file.display(), e);
            }
        }
    }

    if !reports_ok.is_empty() {
        reports::print_import_summary(&reports_ok);
    }

    if failed > 0 {
        return Err(LaunchLabError::Validation(format!(
            "{} of {} file(s) could not be imported",
            failed,
            args.files.len()
        )));
    }
    Ok(())
}
