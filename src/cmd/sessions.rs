use crate::reports;
use launchlab::library::ShotLibrary;
use launchlab::store::ShotStore;
use launchlab::LlResult;

pub fn run<S: ShotStore>(library: &ShotLibrary<S>) -> LlResult<()> {
    let sessions = library.sessions()?;
    if sessions.is_empty() {
        println!("\n📭 No sessions stored.");
        return Ok(());
    }
    reports::print_sessions_table(&sessions);
    Ok(())
}
