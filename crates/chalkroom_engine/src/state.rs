//! Mutable execution context of a session.

use std::fmt;

use chalkroom_foundation::{RoomId, SemanticLimit};
use chalkroom_storage::Blackboards;

use crate::config::GameConfig;
use crate::narration::Narration;

/// Why a session stopped running.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The player typed `q`.
    Quit,
    /// A resource ceiling was crossed.
    LimitExceeded(SemanticLimit),
    /// A button press diverged from the target.
    Mistake,
    /// The presses reproduced the target.
    Victory,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit => f.write_str("quit"),
            Self::LimitExceeded(limit) => write!(f, "{limit}"),
            Self::Mistake => f.write_str("wrong button"),
            Self::Victory => f.write_str("victory"),
        }
    }
}

/// The state one interpreter mutates.
///
/// There is exactly one per session; recursive reads share it.
#[derive(Clone, Debug)]
pub struct InterpreterState {
    /// Current room.
    pub location: RoomId,
    /// Every room's board.
    pub blackboards: Blackboards,
    /// Every normalized letter submitted to the session.
    pub input_log: String,
    /// One lowercase room key per button press.
    pub press_log: String,
    /// Steps executed so far, at any depth.
    pub commands_executed: u64,
    /// Current read nesting.
    pub depth: u32,
    /// Whether narration inside reads is shown.
    pub verbose: bool,
    /// Narration for the current submission.
    pub output: Narration,
    running: bool,
    won: bool,
    termination: Option<Termination>,
}

impl InterpreterState {
    /// Creates the initial state for a configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            location: config.start,
            blackboards: Blackboards::new(),
            input_log: String::new(),
            press_log: String::new(),
            commands_executed: 0,
            depth: 0,
            verbose: config.verbose,
            output: Narration::new(),
            running: true,
            won: false,
            termination: None,
        }
    }

    /// Rebuilds a state from saved parts.
    ///
    /// `termination` decides the running and won flags.
    #[must_use]
    pub fn restore(
        location: RoomId,
        blackboards: Blackboards,
        input_log: String,
        press_log: String,
        commands_executed: u64,
        verbose: bool,
        termination: Option<Termination>,
    ) -> Self {
        Self {
            location,
            blackboards,
            input_log,
            press_log,
            commands_executed,
            depth: 0,
            verbose,
            output: Narration::new(),
            running: termination.is_none(),
            won: termination == Some(Termination::Victory),
            termination,
        }
    }

    /// Whether commands still execute.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the game was won.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Why the session stopped, if it has.
    #[must_use]
    pub const fn termination(&self) -> Option<&Termination> {
        self.termination.as_ref()
    }

    /// Stops the session. Only the first termination is recorded.
    pub fn halt(&mut self, reason: Termination) {
        if self.termination.is_some() {
            return;
        }
        log::debug!(
            "session halted after {} steps: {reason}",
            self.commands_executed
        );
        self.running = false;
        self.won = reason == Termination::Victory;
        self.termination = Some(reason);
    }

    /// Narrates a line, hidden inside reads unless verbose.
    pub fn log(&mut self, message: &str) {
        self.output.log(message, self.depth, self.verbose);
    }

    /// Narrates a line regardless of depth.
    pub fn print(&mut self, message: &str) {
        self.output.print(message);
    }

    /// The current room's board.
    #[must_use]
    pub fn board(&self) -> &str {
        self.blackboards.get(self.location)
    }
}
