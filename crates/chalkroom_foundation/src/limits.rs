//! Resource ceilings for a session.

use crate::{Error, Result};

/// Default ceiling on executed command steps per session.
pub const DEFAULT_MAX_COMMANDS: u64 = 1_000_000;

/// Default ceiling on blackboard read nesting.
pub const DEFAULT_MAX_DEPTH: u32 = 1_000;

/// Highest accepted read nesting ceiling.
///
/// Reads recurse on the host stack, so deeper nesting is refused rather
/// than risking a stack overflow.
pub const MAX_DEPTH_CEILING: u32 = 1_000;

/// Default length (in characters) a blackboard may never reach.
pub const DEFAULT_MAX_BLACKBOARD_LENGTH: usize = 50_000;

/// Resource ceilings (kill switches) enforced by the interpreter.
///
/// Crossing any of them ends the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Executing step number `max_commands + 1` is fatal.
    pub max_commands: u64,

    /// Entering a read at depth `max_depth + 1` is fatal.
    pub max_depth: u32,

    /// A blackboard reaching this many characters is fatal.
    pub max_blackboard_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_commands: DEFAULT_MAX_COMMANDS,
            max_depth: DEFAULT_MAX_DEPTH,
            max_blackboard_length: DEFAULT_MAX_BLACKBOARD_LENGTH,
        }
    }
}

impl Limits {
    /// Builder method to set the step ceiling.
    #[must_use]
    pub fn with_max_commands(mut self, max: u64) -> Self {
        self.max_commands = max;
        self
    }

    /// Builder method to set the nesting ceiling.
    #[must_use]
    pub fn with_max_depth(mut self, max: u32) -> Self {
        self.max_depth = max;
        self
    }

    /// Builder method to set the blackboard length ceiling.
    #[must_use]
    pub fn with_max_blackboard_length(mut self, max: usize) -> Self {
        self.max_blackboard_length = max;
        self
    }

    /// The nesting ceiling actually enforced, never above [`MAX_DEPTH_CEILING`].
    #[must_use]
    pub const fn depth_cap(&self) -> u32 {
        if self.max_depth > MAX_DEPTH_CEILING {
            MAX_DEPTH_CEILING
        } else {
            self.max_depth
        }
    }

    /// Checks that every ceiling is enforceable.
    ///
    /// # Errors
    ///
    /// Returns an invalid configuration error if `max_depth` exceeds
    /// [`MAX_DEPTH_CEILING`].
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_DEPTH_CEILING {
            return Err(Error::invalid_config(format!(
                "max depth {} exceeds the ceiling of {MAX_DEPTH_CEILING}",
                self.max_depth
            )));
        }
        Ok(())
    }
}
