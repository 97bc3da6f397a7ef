use crate::reports;
use chrono::Utc;
use clap::Args;
use launchlab::library::ShotLibrary;
use launchlab::sample::import_sample;
use launchlab::store::ShotStore;
use launchlab::LlResult;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    /// Sample CSV to load; falls back to the built-in session when unusable.
    #[arg(long, default_value = "data/sample_session.csv")]
    pub file: PathBuf,
}

pub fn run<S: ShotStore>(args: SampleArgs, library: &mut ShotLibrary<S>) -> LlResult<()> {
    let path = args.file.exists().then_some(args.file.as_path());
    let report = import_sample(library, path, Utc::now())?;
    reports::print_import_summary(&[report]);
    Ok(())
}
