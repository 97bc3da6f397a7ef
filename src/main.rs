use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use launchlab::config::AnalysisConfig;
use launchlab::library::ShotLibrary;
use launchlab::store::JsonFileStore;
use launchlab::LlResult;
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file holding the shot collection.
    #[arg(global = true, short, long, default_value = "data/shots.json")]
    store: String,

    /// Optional JSON analysis config; command-line flags override it.
    #[arg(global = true, short, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Import launch monitor CSV exports.
    Import(cmd::import::ImportArgs),
    /// Per-club averages, gapping, shot shape and dispersion.
    Report(cmd::report::ReportArgs),
    /// List stored sessions.
    Sessions,
    /// Write (filtered) shots as CSV.
    Export(cmd::export::ExportArgs),
    /// Delete one session, or every shot.
    Purge(cmd::purge::PurgeArgs),
    /// Import the bundled sample session.
    Sample(cmd::sample::SampleArgs),
}

fn main() {
    // 1. Parse raw matches (to tell typed flags from defaults)
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // 2. Logging
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    // 3. Config: file first, then explicit CLI flags on top
    let config = resolve_config(&cli, &matches).unwrap_or_else(|e| fail(e));

    // 4. Execute
    let mut library = ShotLibrary::new(JsonFileStore::new(&cli.store), config);
    let result = match cli.command {
        Commands::Import(args) => cmd::import::run(args, &mut library),
        Commands::Report(args) => cmd::report::run(args, &library),
        Commands::Sessions => cmd::sessions::run(&library),
        Commands::Export(args) => cmd::export::run(args, &library),
        Commands::Purge(args) => cmd::purge::run(args, &mut library),
        Commands::Sample(args) => cmd::sample::run(args, &mut library),
    };

    if let Err(e) = result {
        fail(e);
    }
}

fn resolve_config(cli: &Cli, matches: &ArgMatches) -> LlResult<AnalysisConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::load_from_file(path)?,
        None => AnalysisConfig::default(),
    };

    // Analysis flags live inside the subcommand's matches, not the root.
    let typed = match &cli.command {
        Commands::Import(args) => Some(&args.config),
        Commands::Report(args) => Some(&args.config),
        Commands::Export(args) => Some(&args.config),
        Commands::Sessions | Commands::Purge(_) | Commands::Sample(_) => None,
    };
    if let (Some(typed), Some((_, sub_matches))) = (typed, matches.subcommand()) {
        config.merge_from_cli(typed, sub_matches);
    }

    config.validate()?;
    Ok(config)
}

fn fail(e: launchlab::LaunchLabError) -> ! {
    eprintln!("\n❌ {}", e);
    process::exit(1);
}
