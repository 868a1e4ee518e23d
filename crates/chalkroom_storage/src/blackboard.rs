//! Per-room blackboard text.
//!
//! Boards are kept in a persistent map so a whole session's boards can be
//! cloned in O(1) for snapshots. A room with no entry has an empty board.

use chalkroom_foundation::RoomId;
use im::OrdMap;

/// The blackboards of every room.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blackboards {
    boards: OrdMap<RoomId, String>,
}

impl Blackboards {
    /// Creates a set of empty blackboards.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The text on a room's board.
    #[must_use]
    pub fn get(&self, room: RoomId) -> &str {
        self.boards.get(&room).map_or("", String::as_str)
    }

    /// Returns true if the room's board has nothing written on it.
    #[must_use]
    pub fn is_empty(&self, room: RoomId) -> bool {
        self.get(room).is_empty()
    }

    /// Length of the room's board in characters.
    #[must_use]
    pub fn char_len(&self, room: RoomId) -> usize {
        self.get(room).chars().count()
    }

    /// Replaces the room's board.
    pub fn write(&mut self, room: RoomId, text: &str) {
        if text.is_empty() {
            self.boards.remove(&room);
        } else {
            self.boards.insert(room, text.to_owned());
        }
    }

    /// Appends to the room's board.
    pub fn append(&mut self, room: RoomId, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.boards.get_mut(&room) {
            Some(board) => board.push_str(text),
            None => {
                self.boards.insert(room, text.to_owned());
            }
        }
    }

    /// Erases the last character, returning it. `None` if the board was empty.
    pub fn erase_last(&mut self, room: RoomId) -> Option<char> {
        let board = self.boards.get_mut(&room)?;
        let erased = board.pop();
        if board.is_empty() {
            self.boards.remove(&room);
        }
        erased
    }

    /// Iterates over rooms with non-empty boards, in keyboard order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &str)> {
        self.boards.iter().map(|(room, text)| (*room, text.as_str()))
    }

    /// Number of rooms with something written on their board.
    #[must_use]
    pub fn written_count(&self) -> usize {
        self.boards.len()
    }
}
