//! Interactive entry point: terminal setup, input actor, dispatch loop.

use crossbeam_channel::bounded;
use std::io;
use termcube::render::TermGuard;
use termcube::{App, AppConfig, ChannelSource, InputActor, TermRenderer};

fn main() -> io::Result<()> {
    let config = AppConfig::from_env();

    // Raw mode and the alternate screen stay active for the lifetime of
    // the guard; dropping it restores the terminal even on error paths.
    let _guard = TermGuard::enter()?;

    let (tx, rx) = bounded(64);
    let actor = InputActor::spawn(tx);

    let renderer = TermRenderer::stdout()?;
    let result = App::new(ChannelSource::new(rx), renderer, config).run();

    actor.join();
    result
}
