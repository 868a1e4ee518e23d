//! Game sessions.
//!
//! A session owns one interpreter state and the narration produced by the
//! latest submission. Sessions share nothing, so any number can coexist.

use chalkroom_engine::narration::VICTORY;
use chalkroom_engine::{GameConfig, Interpreter, InterpreterState, Termination};
use chalkroom_foundation::RoomId;
use chalkroom_parser::InputNormalizer;
use chalkroom_storage::Blackboards;

use crate::describe::describe_room;
use crate::serialize::Snapshot;

/// One isolated play-through.
pub struct Session {
    /// Executes submitted lines.
    interpreter: Interpreter,

    /// Position, boards, logs, counters, and the output buffer.
    state: InterpreterState,
}

impl Session {
    /// Creates a session with the default configuration.
    ///
    /// The output already holds the description of the start room.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates a session with the given configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        let interpreter = Interpreter::new(config);
        let state = interpreter.initial_state();
        let mut session = Self { interpreter, state };
        session.describe_room();
        session
    }

    /// Submits a raw line of player input.
    ///
    /// Never fails: anything unrecognized becomes narration. After the
    /// session has ended the line is still logged but nothing executes.
    pub fn submit(&mut self, input: &str) {
        self.state.output.clear();

        let line = InputNormalizer::normalize(input);
        self.state.input_log.push_str(&line);
        let before = self.state.location;

        log::debug!("submit {:?} in room {}", line, before);
        self.interpreter.execute(&mut self.state, &line);

        if self.state.is_won() {
            self.state.print(VICTORY);
        } else if self.state.location != before {
            self.describe_room();
        }
    }

    /// Narration produced by the latest submission.
    #[must_use]
    pub fn current_output(&self) -> &str {
        self.state.output.as_str()
    }

    /// Appends a description of the current room to the output.
    pub fn describe_room(&mut self) {
        let lines = describe_room(
            self.interpreter.graph(),
            &self.state.blackboards,
            self.state.location,
        );
        for line in &lines {
            self.state.log(line);
        }
    }

    /// Starts over with the same configuration.
    pub fn reset(&mut self) {
        self.state = self.interpreter.initial_state();
        self.describe_room();
    }

    /// The configuration this session was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.interpreter.config()
    }

    /// The full interpreter state.
    #[must_use]
    pub const fn state(&self) -> &InterpreterState {
        &self.state
    }

    /// Current room.
    #[must_use]
    pub const fn location(&self) -> RoomId {
        self.state.location
    }

    /// Every room's board.
    #[must_use]
    pub const fn blackboards(&self) -> &Blackboards {
        &self.state.blackboards
    }

    /// Every normalized letter submitted so far.
    #[must_use]
    pub fn input_log(&self) -> &str {
        &self.state.input_log
    }

    /// Every button pressed so far.
    #[must_use]
    pub fn press_log(&self) -> &str {
        &self.state.press_log
    }

    /// Whether the session still accepts commands.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Whether the game was won.
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// Why the session ended, if it has.
    #[must_use]
    pub const fn termination(&self) -> Option<&Termination> {
        self.state.termination()
    }

    /// Captures the persistent part of the state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Replaces the state with a snapshot and describes where it left off.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.state = snapshot.into_state();
        self.describe_room();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
