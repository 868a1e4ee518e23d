//! Command-line argument handling for the `chalkroom` binary.

use chalkroom_engine::{GameConfig, PressTarget};
use chalkroom_foundation::{Error, Limits, Result, RoomId};
use std::path::PathBuf;
use std::str::FromStr;

/// Help text printed by `--help`.
pub const USAGE: &str = "\x1b[1mChalkroom\x1b[0m - A self-referential text adventure

\x1b[1mUSAGE:\x1b[0m
    chalkroom [OPTIONS] [SCRIPTS...]

\x1b[1mARGUMENTS:\x1b[0m
    [SCRIPTS...]    Command scripts to play before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -b, --batch            Play scripts and exit (no REPL, needs a script)
    -v, --verbose          Debug logging (RUST_LOG overrides)

\x1b[1mGAME OPTIONS:\x1b[0m
    --max-commands N       Commands before starvation (default 1000000)
    --max-depth N          Nested reads before passing out (default and maximum 1000)
    --max-blackboard N     Board length that topples it (default 50000)
    --target LETTERS       Win by pressing exactly these buttons
    --start KEY            Start in another room (default H)

\x1b[1mEXAMPLES:\x1b[0m
    chalkroom                              Start interactive REPL
    chalkroom -b demos/solution.txt        Replay the winning script
    chalkroom --max-depth 10 notes.txt     Play notes.txt, then the REPL

\x1b[1mREPL COMMANDS:\x1b[0m
    :help                Show the command letters
    :status              Show counters and state
    :save PATH           Save the game to a file
    :load PATH           Load a saved game
    :reset               Start over
    :quit                Exit REPL
    Ctrl+D               Exit REPL

For more information, visit https://github.com/ndouglas/chalkroom";

/// CLI configuration parsed from arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Scripts to play, in order.
    pub scripts: Vec<PathBuf>,
    /// Exit after the scripts instead of starting the REPL.
    pub batch_mode: bool,
    /// `--help` was given.
    pub show_help: bool,
    /// `--version` was given.
    pub show_version: bool,
    /// Raise the default log level to `debug`.
    pub verbose: bool,
    /// `--max-commands` override.
    pub max_commands: Option<u64>,
    /// `--max-depth` override.
    pub max_depth: Option<u32>,
    /// `--max-blackboard` override.
    pub max_blackboard: Option<usize>,
    /// `--target` letters.
    pub target: Option<String>,
    /// `--start` room key.
    pub start: Option<char>,
}

impl CliConfig {
    /// Parses `args`, where `args[0]` is the program name.
    ///
    /// # Errors
    ///
    /// Returns an invalid configuration error for unknown options, missing
    /// or malformed values, and `--batch` without a script.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut config = Self::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "-b" | "--batch" => config.batch_mode = true,
                "-v" | "--verbose" => config.verbose = true,
                "--max-commands" => {
                    config.max_commands = Some(option_value(args, &mut i, "--max-commands")?);
                }
                "--max-depth" => {
                    config.max_depth = Some(option_value(args, &mut i, "--max-depth")?);
                }
                "--max-blackboard" => {
                    config.max_blackboard = Some(option_value(args, &mut i, "--max-blackboard")?);
                }
                "--target" => {
                    config.target = Some(option_value(args, &mut i, "--target")?);
                }
                "--start" => {
                    config.start = Some(option_value(args, &mut i, "--start")?);
                }
                arg if arg.starts_with('-') => {
                    return Err(Error::invalid_config(format!("unknown option: {arg}")));
                }
                path => config.scripts.push(PathBuf::from(path)),
            }
            i += 1;
        }

        if config.batch_mode
            && config.scripts.is_empty()
            && !config.show_help
            && !config.show_version
        {
            return Err(Error::invalid_config("--batch needs at least one script"));
        }

        Ok(config)
    }

    /// Builds the game configuration the flags describe.
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is out of range or the start key is not
    /// a room.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut limits = Limits::default();
        if let Some(max) = self.max_commands {
            limits = limits.with_max_commands(max);
        }
        if let Some(max) = self.max_depth {
            limits = limits.with_max_depth(max);
        }
        if let Some(max) = self.max_blackboard {
            limits = limits.with_max_blackboard_length(max);
        }
        limits.validate()?;

        let mut config = GameConfig::default().with_limits(limits);
        if let Some(target) = &self.target {
            config = config.with_target(PressTarget::fixed(target));
        }
        if let Some(key) = self.start {
            let room = RoomId::from_key(key).ok_or_else(|| Error::unknown_room(key))?;
            config = config.with_start(room);
        }
        Ok(config)
    }
}

fn option_value<T: FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    *i += 1;
    let Some(raw) = args.get(*i) else {
        return Err(Error::invalid_config(format!("{flag} requires a value")));
    };
    raw.parse()
        .map_err(|_| Error::invalid_config(format!("invalid {flag} value: {raw}")))
}
