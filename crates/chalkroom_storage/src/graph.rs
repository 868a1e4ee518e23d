//! The static room topology.
//!
//! Rooms sit under the keys of a staggered keyboard, so each one touches up
//! to six others. Slot order in [`RoomSpec::neighbors`] follows
//! [`Direction::ALL`].

use chalkroom_foundation::room::ROOM_COUNT;
use chalkroom_foundation::{Direction, RoomId};

/// Letters engraved in the floors, indexed by alphabet position of the room key.
pub const FLOOR_MESSAGE: &str = "TYPESAMETHINGBOTHKEYBOARDS";

/// Key of the room every session starts in.
pub const START_KEY: char = 'H';

/// Static description of a single room.
#[derive(Clone, Debug)]
pub struct RoomSpec {
    /// The room's identity.
    pub id: RoomId,
    /// Neighbor per direction slot; `None` means no exit.
    pub neighbors: [Option<RoomId>; 6],
    /// Advice given by the ceiling monkey (may be empty).
    pub hint: &'static str,
    /// Letter engraved in the floor.
    pub letter: char,
}

/// The immutable room graph.
#[derive(Clone, Debug)]
pub struct RoomGraph {
    rooms: Vec<RoomSpec>,
    start: RoomId,
}

/// Raw table: key, neighbor keys (`.` = wall) in slot order, hint.
const TABLE: [(char, &str, &str); ROOM_COUNT] = [
    ('Q', "..WA..", "By default any actions you might take while reading from a blackboard are not displayed to you. You can turn these on by typing 'v'."),
    ('W', "..ESAQ", "You can type 'q' to reset the current game."),
    ('E', "..RDSW", ""),
    ('R', "..TFDE", "Including 'i' in your command will cause the remainder of your command to execute only if the blackboard in the current room is empty."),
    ('T', "..YGFR", ""),
    ('Y', "..UHGT", "Space is irrelevant; typing 'pes' and 'p e s' will have the same result."),
    ('U', "..IJHY", ""),
    ('I', "..OKJU", "Including 'j' in your command will cause the remainder of your command to execute only if the blackboard in the current room is not empty."),
    ('O', "..PLKI", ""),
    ('P', "....LO", "Be efficient! Rumor has it a terrible fate awaits those who take more than 1000000 steps in this dungeon. Similar tragedies are said to befall those who try to write more than 50000 characters on a blackboard or get stuck more than 1000 layers deep in their own head."),
    ('A', "QWSZ..", "The blackboards here are cursed. Actively reading from one forces you to follow whatever is written on it (as if you entered the contents of the blackboard as a single line)."),
    ('S', "WEDXZA", "You can read the contents of a blackboard by typing 'r'."),
    ('D', "ERFCXS", ""),
    ('F', "RTGVCD", ""),
    ('G', "TYHBVF", "You can chain commands together by typing them next to each other in the same line. For example, typing 'e ne' moves east then moves northeast."),
    ('H', "YUJNBG", "Welcome to this puzzle. To navigate around the dungeon, simply type the direction (e.g. 'ne') you wish to move in. More commands will be explained as you progress through this puzzle."),
    ('J', "UIKMNH", "You can press a button in a room by typing 'p'."),
    ('K', "IOL.MJ", ""),
    ('L', "OP...K", "Type 'l' to see a log of what you've typed during your current play through the game."),
    ('Z', "ASX...", "By typing 'd' you can erase the last character on a blackboard."),
    ('X', "SDC..Z", "Type 'k' to see a log of what you've typed during your current play through the game."),
    ('C', "DFV..X", "Pressing buttons sometimes causes reality to destabilize. Why is that? Who knows?"),
    ('V', "FGB..C", "Typing 't' lets you write on a blackboard. You will write the remainder of your line to this blackboard; for example, 't hello there' writes \"hellothere\" on the blackboard."),
    ('B', "GHN..V", ""),
    ('N', "HJM..B", ""),
    ('M', "JK...N", "Using 't' will erase what is currently on the blackboard before writing. To append to a blackboard instead, use 'a'."),
];

impl RoomGraph {
    /// Returns the shared standard dungeon.
    ///
    /// # Panics
    ///
    /// Panics if [`START_KEY`] is not a keyboard letter (it is a constant).
    #[must_use]
    pub fn standard() -> &'static Self {
        static GRAPH: std::sync::OnceLock<RoomGraph> = std::sync::OnceLock::new();
        GRAPH.get_or_init(Self::build)
    }

    fn build() -> Self {
        let mut rooms: Vec<RoomSpec> = TABLE
            .iter()
            .filter_map(|&(key, slots, hint)| {
                let id = RoomId::from_key(key)?;
                let mut neighbors = [None; 6];
                for (slot, c) in neighbors.iter_mut().zip(slots.chars()) {
                    *slot = RoomId::from_key(c);
                }
                Some(RoomSpec {
                    id,
                    neighbors,
                    hint,
                    letter: floor_letter(key),
                })
            })
            .collect();
        rooms.sort_by_key(|spec| spec.id);

        Self {
            rooms,
            start: RoomId::from_key(START_KEY).expect("start key is a keyboard letter"),
        }
    }

    /// The room every session starts in.
    #[must_use]
    pub const fn start(&self) -> RoomId {
        self.start
    }

    /// Returns the static description of a room.
    #[must_use]
    pub fn room(&self, room: RoomId) -> &RoomSpec {
        &self.rooms[room.index()]
    }

    /// Iterates over every room in keyboard order.
    pub fn rooms(&self) -> impl Iterator<Item = &RoomSpec> {
        self.rooms.iter()
    }

    /// The neighbor in the given direction, or `None` for a wall.
    #[must_use]
    pub fn neighbor(&self, room: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(room).neighbors[direction.index()]
    }

    /// The monkey's advice in this room (may be empty).
    #[must_use]
    pub fn hint(&self, room: RoomId) -> &'static str {
        self.room(room).hint
    }

    /// The letter engraved in this room's floor.
    #[must_use]
    pub fn letter(&self, room: RoomId) -> char {
        self.room(room).letter
    }

    /// Directions with an exit, in slot order.
    pub fn exits(&self, room: RoomId) -> impl Iterator<Item = Direction> + '_ {
        let spec = self.room(room);
        Direction::ALL
            .into_iter()
            .filter(move |d| spec.neighbors[d.index()].is_some())
    }
}

fn floor_letter(key: char) -> char {
    let offset = (key as usize).saturating_sub('A' as usize);
    FLOOR_MESSAGE.chars().nth(offset).unwrap_or('?')
}
