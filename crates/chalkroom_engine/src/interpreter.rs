//! The command interpreter.
//!
//! Executes a normalized line against an [`InterpreterState`], one decoded
//! step at a time. Reading a blackboard re-enters [`Interpreter::execute`]
//! with the board's text one level deeper.

use chalkroom_foundation::{Direction, SemanticLimit};
use chalkroom_parser::{Command, CommandReader, Decoded};
use chalkroom_storage::RoomGraph;

use crate::config::GameConfig;
use crate::narration;
use crate::press::PressVerdict;
use crate::state::{InterpreterState, Termination};

/// Whether the current line keeps going after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Executes command lines.
///
/// The interpreter itself is immutable; all progress lives in the state.
#[derive(Clone, Debug)]
pub struct Interpreter {
    graph: &'static RoomGraph,
    config: GameConfig,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Interpreter {
    /// Creates an interpreter over the standard dungeon.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            graph: RoomGraph::standard(),
            config,
        }
    }

    /// The configuration this interpreter enforces.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The room graph moves are resolved against.
    #[must_use]
    pub const fn graph(&self) -> &'static RoomGraph {
        self.graph
    }

    /// Creates a fresh state for this interpreter's configuration.
    #[must_use]
    pub fn initial_state(&self) -> InterpreterState {
        InterpreterState::new(&self.config)
    }

    /// Executes a normalized line at the state's current depth.
    ///
    /// Returns when the line is exhausted, a step stops it, or the session
    /// halts. Never fails: bad input becomes narration.
    pub fn execute(&self, state: &mut InterpreterState, line: &str) {
        let limits = &self.config.limits;
        let max_depth = limits.depth_cap();
        if state.depth > max_depth {
            state.print(narration::UNCONSCIOUS);
            state.halt(Termination::LimitExceeded(SemanticLimit::MaxDepth {
                limit: max_depth,
            }));
            return;
        }

        let mut rest = line;
        while !rest.is_empty() {
            if !state.is_running() {
                return;
            }

            state.commands_executed += 1;
            if state.commands_executed > limits.max_commands {
                state.print(narration::STARVATION);
                state.halt(Termination::LimitExceeded(SemanticLimit::MaxCommands {
                    limit: limits.max_commands,
                }));
                return;
            }

            let Some((decoded, remaining)) = CommandReader::next(rest) else {
                return;
            };
            if self.step(state, decoded) == Flow::Stop {
                return;
            }
            rest = remaining;
        }
    }

    fn step(&self, state: &mut InterpreterState, decoded: Decoded<'_>) -> Flow {
        let command = match decoded {
            Decoded::Command(command) => command,
            Decoded::MissingDirection => {
                state.log(narration::MISSING_DIRECTION);
                return Flow::Continue;
            }
            Decoded::InvalidDirection(token) => {
                state.log(&format!("{token} is not a valid direction."));
                return Flow::Stop;
            }
            Decoded::Unknown(_) => {
                state.print(narration::INVALID_COMMAND);
                return Flow::Stop;
            }
        };

        match command {
            Command::Move(direction) => self.move_to(state, direction),
            Command::Press => self.press(state),
            Command::Write(text) => {
                state.blackboards.write(state.location, text);
                self.after_write(state, "You write on the blackboard.")
            }
            Command::Append(text) => {
                state.blackboards.append(state.location, text);
                self.after_write(state, "You add some text to the blackboard.")
            }
            Command::Read => self.read(state),
            Command::Erase => {
                if state.blackboards.erase_last(state.location).is_some() {
                    let message = format!(
                        "You erase the last letter from the text on the blackboard. The blackboard now says: {}",
                        state.board()
                    );
                    state.log(&message);
                } else {
                    state.log(narration::BOARD_EMPTY);
                }
                Flow::Continue
            }
            Command::StopIfWritten => {
                if state.board().is_empty() {
                    Flow::Continue
                } else {
                    Flow::Stop
                }
            }
            Command::StopIfBlank => {
                if state.board().is_empty() {
                    Flow::Stop
                } else {
                    Flow::Continue
                }
            }
            Command::ShowInputLog => {
                let log = state.input_log.clone();
                state.log(&log);
                Flow::Continue
            }
            Command::ShowPressLog => {
                let log = state.press_log.clone();
                state.log(&log);
                Flow::Continue
            }
            Command::Quit => {
                state.halt(Termination::Quit);
                Flow::Stop
            }
            Command::ToggleVerbose => {
                if state.verbose {
                    state.log(narration::VERBOSE_OFF);
                    state.verbose = false;
                } else {
                    state.log(narration::VERBOSE_ON);
                    state.verbose = true;
                }
                Flow::Continue
            }
        }
    }

    fn move_to(&self, state: &mut InterpreterState, direction: Direction) -> Flow {
        match self.graph.neighbor(state.location, direction) {
            Some(next) => state.location = next,
            None => state.log(narration::CANNOT_MOVE),
        }
        Flow::Continue
    }

    fn press(&self, state: &mut InterpreterState) -> Flow {
        state.log(narration::PRESS);
        state.press_log.push(state.location.button());

        let reference = self.config.target.reference(&state.input_log);
        match PressVerdict::judge(reference, &state.press_log) {
            PressVerdict::Victory => {
                state.halt(Termination::Victory);
                Flow::Stop
            }
            PressVerdict::Mistake => {
                state.log(narration::MISTAKE);
                state.halt(Termination::Mistake);
                Flow::Stop
            }
            PressVerdict::Pending => Flow::Continue,
        }
    }

    fn after_write(&self, state: &mut InterpreterState, action: &str) -> Flow {
        let limit = self.config.limits.max_blackboard_length;
        if state.blackboards.char_len(state.location) >= limit {
            state.print(narration::COLLAPSE);
            state.halt(Termination::LimitExceeded(
                SemanticLimit::MaxBlackboardLength { limit },
            ));
            return Flow::Stop;
        }

        let message = format!("{action} The blackboard now says: {}", state.board());
        state.log(&message);
        Flow::Stop
    }

    fn read(&self, state: &mut InterpreterState) -> Flow {
        if state.board().is_empty() {
            state.log(narration::BOARD_EMPTY);
            return Flow::Continue;
        }

        state.log(narration::READ);
        let program = state.board().to_owned();
        state.depth += 1;
        log::trace!(
            "reading board {} at depth {} ({} chars)",
            state.location,
            state.depth,
            program.len()
        );
        self.execute(state, &program);
        state.depth -= 1;
        Flow::Continue
    }
}
