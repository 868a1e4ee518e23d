//! Judging button presses.
//!
//! The press log must reproduce a reference sequence exactly. Each press is
//! judged immediately: matching the whole reference wins, leaving the
//! reference's prefix loses, anything else keeps the game going.

use chalkroom_parser::InputNormalizer;

/// What the press log is compared against.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressTarget {
    /// Everything the player has typed this session (normalized).
    #[default]
    InputLog,
    /// A fixed solution sequence.
    Fixed(String),
}

impl PressTarget {
    /// Creates a fixed target, normalizing the given letters.
    #[must_use]
    pub fn fixed(letters: &str) -> Self {
        Self::Fixed(InputNormalizer::normalize(letters))
    }

    /// Returns the reference sequence given the current input log.
    #[must_use]
    pub fn reference<'a>(&'a self, input_log: &'a str) -> &'a str {
        match self {
            Self::InputLog => input_log,
            Self::Fixed(letters) => letters,
        }
    }
}

/// Outcome of judging the press log after a press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressVerdict {
    /// The presses reproduce the reference exactly.
    Victory,
    /// The presses diverged from the reference.
    Mistake,
    /// The presses are a proper prefix of the reference.
    Pending,
}

impl PressVerdict {
    /// Judges `presses` against `reference`.
    #[must_use]
    pub fn judge(reference: &str, presses: &str) -> Self {
        if reference == presses {
            Self::Victory
        } else if reference.starts_with(presses) {
            Self::Pending
        } else {
            Self::Mistake
        }
    }
}
