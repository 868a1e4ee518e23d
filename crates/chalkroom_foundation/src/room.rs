//! Room identities.

use std::fmt;

/// Room keys in keyboard order (top row, home row, bottom row).
pub const ROOM_KEYS: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

/// Number of rooms in the dungeon.
pub const ROOM_COUNT: usize = 26;

/// Identity of a room, named after the keyboard key it sits under.
///
/// Internally this is the position of the key in [`ROOM_KEYS`], so the
/// derived ordering follows the keyboard rather than the alphabet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(u8);

impl RoomId {
    /// Looks up a room by its key letter (either case).
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        let upper = key.to_ascii_uppercase();
        ROOM_KEYS
            .bytes()
            .position(|b| char::from(b) == upper)
            .and_then(|i| u8::try_from(i).ok())
            .map(Self)
    }

    /// Returns the room at the given keyboard position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < ROOM_COUNT {
            u8::try_from(index).ok().map(Self)
        } else {
            None
        }
    }

    /// Position of this room's key in [`ROOM_KEYS`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The uppercase key letter.
    #[must_use]
    pub const fn key(self) -> char {
        ROOM_KEYS.as_bytes()[self.0 as usize] as char
    }

    /// The character recorded in the press log when this room's button is pressed.
    #[must_use]
    pub const fn button(self) -> char {
        self.key().to_ascii_lowercase()
    }

    /// Iterates over every room in keyboard order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ROOM_COUNT).filter_map(Self::from_index)
    }
}

impl fmt::Debug for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoomId({})", self.key())
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
