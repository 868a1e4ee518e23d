//! Configuration for a game session.

use chalkroom_foundation::{Limits, RoomId};
use chalkroom_storage::RoomGraph;

use crate::press::PressTarget;

/// Configuration for a game session.
///
/// Controls resource limits, where play starts, and what the button
/// presses must reproduce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Resource ceilings.
    pub limits: Limits,

    /// Sequence the press log is judged against.
    pub target: PressTarget,

    /// Room the player starts in.
    pub start: RoomId,

    /// Whether narration from inside blackboard reads is shown initially.
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            target: PressTarget::InputLog,
            start: RoomGraph::standard().start(),
            verbose: false,
        }
    }
}

impl GameConfig {
    /// Builder method to set the resource limits.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Builder method to set the press target.
    #[must_use]
    pub fn with_target(mut self, target: PressTarget) -> Self {
        self.target = target;
        self
    }

    /// Builder method to set the start room.
    #[must_use]
    pub fn with_start(mut self, start: RoomId) -> Self {
        self.start = start;
        self
    }

    /// Builder method to set initial verbosity.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
