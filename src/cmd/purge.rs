use clap::Args;
use launchlab::library::ShotLibrary;
use launchlab::store::ShotStore;
use launchlab::LlResult;

#[derive(Args, Debug, Clone)]
pub struct PurgeArgs {
    /// Only delete this session. Without it every shot goes.
    #[arg(long)]
    pub session: Option<String>,
}

pub fn run<S: ShotStore>(args: PurgeArgs, library: &mut ShotLibrary<S>) -> LlResult<()> {
    match args.session {
        Some(id) => {
            let removed = library.delete_session(&id)?;
            if removed == 0 {
                println!("⚠️  No session named '{}'", id);
            } else {
                println!("🗑️  Deleted session '{}' ({} shots)", id, removed);
            }
        }
        None => {
            let removed = library.delete_all()?;
            println!("🗑️  Deleted all shots ({})", removed);
        }
    }
    Ok(())
}
