//! The command set and the one-step decoder.
//!
//! Every command is a single letter except movement, where `n` and `s`
//! must be followed by `e` or `w`. Writing commands (`t`, `a`) swallow the
//! remainder of the line as their payload.

use chalkroom_foundation::Direction;

/// A decoded command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// `nw`, `ne`, `e`, `se`, `sw`, `w` - move to a neighboring room.
    Move(Direction),
    /// `p` - press the room's button.
    Press,
    /// `t` - replace the board with the rest of the line.
    Write(&'a str),
    /// `a` - append the rest of the line to the board.
    Append(&'a str),
    /// `r` - execute the board's text as a command line.
    Read,
    /// `d` - erase the last character on the board.
    Erase,
    /// `i` - stop the line if the board has text on it.
    StopIfWritten,
    /// `j` - stop the line if the board is empty.
    StopIfBlank,
    /// `l` - show everything typed so far.
    ShowInputLog,
    /// `k` - show every button pressed so far.
    ShowPressLog,
    /// `q` - end the session.
    Quit,
    /// `v` - toggle whether actions taken while reading are shown.
    ToggleVerbose,
}

impl Command<'_> {
    /// The letter that introduces this command.
    #[must_use]
    pub const fn letter(&self) -> char {
        match self {
            Self::Move(Direction::Northwest | Direction::Northeast) => 'n',
            Self::Move(Direction::Southwest | Direction::Southeast) => 's',
            Self::Move(Direction::East) => 'e',
            Self::Move(Direction::West) => 'w',
            Self::Press => 'p',
            Self::Write(_) => 't',
            Self::Append(_) => 'a',
            Self::Read => 'r',
            Self::Erase => 'd',
            Self::StopIfWritten => 'i',
            Self::StopIfBlank => 'j',
            Self::ShowInputLog => 'l',
            Self::ShowPressLog => 'k',
            Self::Quit => 'q',
            Self::ToggleVerbose => 'v',
        }
    }
}

/// Result of decoding one step of a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded<'a> {
    /// A well-formed command.
    Command(Command<'a>),
    /// `n` or `s` with nothing after it. Consumes the one letter.
    MissingDirection,
    /// `n` or `s` followed by something other than `e`/`w`.
    InvalidDirection(String),
    /// A letter that starts no command.
    Unknown(char),
}

/// Decodes command lines one step at a time.
pub struct CommandReader;

impl CommandReader {
    /// Decodes the first step of `line`.
    ///
    /// Returns the decoded step and the text left to execute, or `None` when
    /// the line is exhausted. Payload-taking commands leave nothing behind.
    #[must_use]
    pub fn next(line: &str) -> Option<(Decoded<'_>, &str)> {
        let mut chars = line.chars();
        let first = chars.next()?;
        let rest = chars.as_str();

        let decoded = match first {
            'n' | 's' => {
                let mut after = rest.chars();
                let Some(second) = after.next() else {
                    return Some((Decoded::MissingDirection, rest));
                };
                let token = &line[..first.len_utf8() + second.len_utf8()];
                return Some(match Direction::from_token(token) {
                    Some(dir) => (Decoded::Command(Command::Move(dir)), after.as_str()),
                    None => (Decoded::InvalidDirection(token.to_owned()), after.as_str()),
                });
            }
            'e' => Command::Move(Direction::East),
            'w' => Command::Move(Direction::West),
            'p' => Command::Press,
            't' => return Some((Decoded::Command(Command::Write(rest)), "")),
            'a' => return Some((Decoded::Command(Command::Append(rest)), "")),
            'r' => Command::Read,
            'd' => Command::Erase,
            'i' => Command::StopIfWritten,
            'j' => Command::StopIfBlank,
            'l' => Command::ShowInputLog,
            'k' => Command::ShowPressLog,
            'q' => Command::Quit,
            'v' => Command::ToggleVerbose,
            other => return Some((Decoded::Unknown(other), rest)),
        };

        Some((Decoded::Command(decoded), rest))
    }

    /// Decodes a whole line, ignoring control flow.
    ///
    /// Useful for inspecting a board; execution must go through
    /// [`CommandReader::next`] because `i`/`j` and fatal steps stop early.
    #[must_use]
    pub fn decode_all(line: &str) -> Vec<Decoded<'_>> {
        let mut steps = Vec::new();
        let mut rest = line;
        while let Some((decoded, remaining)) = Self::next(rest) {
            steps.push(decoded);
            rest = remaining;
        }
        steps
    }
}
