//! Room descriptions.
//!
//! The wording is fixed; downstream consumers match on it.

use chalkroom_foundation::RoomId;
use chalkroom_storage::{Blackboards, RoomGraph};

/// Describes a room as a block of lines (blank lines separate paragraphs).
#[must_use]
pub fn describe_room(graph: &RoomGraph, boards: &Blackboards, room: RoomId) -> Vec<String> {
    let mut lines = vec![
        format!(
            "You are in a large square room with a giant letter {} engraved in the floor. \
             In the middle of the room there is a blackboard. \
             Next to the blackboard is a small button.",
            graph.letter(room)
        ),
        String::new(),
    ];

    let board = boards.get(room);
    if board.is_empty() {
        lines.push("The blackboard in this room is empty.".to_string());
    } else {
        lines.push(format!(
            "The blackboard has the following text written on it: {board}"
        ));
    }
    lines.push(String::new());

    let hint = graph.hint(room);
    if !hint.is_empty() {
        lines.push(format!("A monkey pops out of the ceiling and says \"{hint}\""));
        lines.push(String::new());
    }

    lines.push(format!("There are exits to the {}.", exit_list(graph, room)));
    lines
}

/// Lists exits in slot order, with "and " before the last one.
#[must_use]
pub fn exit_list(graph: &RoomGraph, room: RoomId) -> String {
    let mut names: Vec<String> = graph.exits(room).map(|d| d.name().to_string()).collect();
    if let Some(last) = names.last_mut() {
        last.insert_str(0, "and ");
    }
    names.join(", ")
}
