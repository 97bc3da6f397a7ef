use super::FilterArgs;
use clap::Args;
use launchlab::config::AnalysisConfig;
use launchlab::export::write_csv;
use launchlab::library::ShotLibrary;
use launchlab::store::ShotStore;
use launchlab::LlResult;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Destination CSV file.
    #[arg(short, long)]
    pub out: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,

    #[command(flatten)]
    pub config: AnalysisConfig,
}

pub fn run<S: ShotStore>(args: ExportArgs, library: &ShotLibrary<S>) -> LlResult<()> {
    let shots = library.analyze(&args.filters.criteria())?.shots;

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(&args.out)?;
    write_csv(&shots, BufWriter::new(file))?;

    println!("💾 Exported {} shots to {}", shots.len(), args.out.display());
    Ok(())
}
