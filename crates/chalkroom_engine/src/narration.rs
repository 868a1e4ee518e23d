//! Output narration.
//!
//! Narration produced inside a blackboard read is normally hidden; the
//! player sees it only with verbosity on. System messages (limits, invalid
//! commands) are always shown.

/// Ran out of step budget.
pub const STARVATION: &str = "You have been wandering around for too long. You die of starvation.";
/// Nested reads too deep.
pub const UNCONSCIOUS: &str = "You are in too deep! The air around you becomes difficult to breathe. You slowly fall unconscious...";
/// Blackboard grew too long.
pub const COLLAPSE: &str = "While struggling to fit all this text on the blackboard, the blackboard topples over, flattening you.";
/// Pressed the wrong button.
pub const MISTAKE: &str = "Uh oh. You feel like pressing that button was a mistake. Everything slowly fades out of existence...";
/// Unrecognized command letter.
pub const INVALID_COMMAND: &str = "Invalid command.";
/// No exit that way.
pub const CANNOT_MOVE: &str = "You cannot move in that direction.";
/// Trailing `n`/`s`.
pub const MISSING_DIRECTION: &str = "You must specify a valid direction to move in.";
/// Read or erase on an empty board.
pub const BOARD_EMPTY: &str = "The blackboard is empty.";
/// Press.
pub const PRESS: &str = "You press the button.";
/// Read of a non-empty board.
pub const READ: &str = "You read the text on the blackboard. You suddenly feel compelled to obey its instructions...";
/// Verbosity turned on.
pub const VERBOSE_ON: &str = "You pay closer attention to your actions.";
/// Verbosity turned off.
pub const VERBOSE_OFF: &str = "You pay less attention to your actions.";
/// Appended to the output when the game is won.
pub const VICTORY: &str = "Congratulations, you played yourself. The answer to this puzzle is PASIPHAE.";

/// Accumulated narration for one submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Narration {
    text: String,
}

impl Narration {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line if narration is visible at this depth.
    pub fn log(&mut self, message: &str, depth: u32, verbose: bool) {
        if depth == 0 || verbose {
            self.print(message);
        }
    }

    /// Appends a line unconditionally.
    pub fn print(&mut self, message: &str) {
        self.text.push_str(message);
        self.text.push('\n');
    }

    /// The buffered text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Returns the buffered text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// Returns true if nothing has been narrated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
