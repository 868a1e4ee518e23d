//! Movement directions on the hexagonal keyboard grid.

use std::fmt;

/// One of the six directions a room may have an exit in.
///
/// The discriminant is the neighbor slot index used by the room table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// `nw`
    Northwest = 0,
    /// `ne`
    Northeast = 1,
    /// `e`
    East = 2,
    /// `se`
    Southeast = 3,
    /// `sw`
    Southwest = 4,
    /// `w`
    West = 5,
}

impl Direction {
    /// All directions in neighbor slot order.
    pub const ALL: [Self; 6] = [
        Self::Northwest,
        Self::Northeast,
        Self::East,
        Self::Southeast,
        Self::Southwest,
        Self::West,
    ];

    /// Parses a direction token (`nw`, `ne`, `e`, `se`, `sw`, `w`).
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "nw" => Some(Self::Northwest),
            "ne" => Some(Self::Northeast),
            "e" => Some(Self::East),
            "se" => Some(Self::Southeast),
            "sw" => Some(Self::Southwest),
            "w" => Some(Self::West),
            _ => None,
        }
    }

    /// Neighbor slot index (0-5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The token a player types for this direction.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Northwest => "nw",
            Self::Northeast => "ne",
            Self::East => "e",
            Self::Southeast => "se",
            Self::Southwest => "sw",
            Self::West => "w",
        }
    }

    /// Name used when listing exits, e.g. `northwest (nw)`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Northwest => "northwest (nw)",
            Self::Northeast => "northeast (ne)",
            Self::East => "east (e)",
            Self::Southeast => "southeast (se)",
            Self::Southwest => "southwest (sw)",
            Self::West => "west (w)",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
