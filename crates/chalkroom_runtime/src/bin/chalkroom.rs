//! Chalkroom CLI entry point.

use chalkroom_runtime::cli::{CliConfig, USAGE};
use chalkroom_runtime::{Repl, Session};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse(args)?;

    let default_level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if config.show_help {
        println!("{USAGE}");
        return Ok(());
    }

    if config.show_version {
        println!("chalkroom {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let session = Session::with_config(config.game_config()?);
    let mut repl = Repl::new()?.with_session(session);

    if !config.scripts.is_empty() {
        print!("{}", repl.session().current_output());
    }
    for script in &config.scripts {
        repl.play_file(script)?;
    }

    if config.batch_mode {
        return Ok(());
    }

    // Scripts already showed where the player stands.
    if !config.scripts.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}
