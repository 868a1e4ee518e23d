//! Integration tests for the room graph

use chalkroom_foundation::{Direction, RoomId};
use chalkroom_storage::RoomGraph;
use chalkroom_storage::graph::FLOOR_MESSAGE;

fn room(key: char) -> RoomId {
    RoomId::from_key(key).unwrap()
}

fn opposite(direction: Direction) -> Direction {
    Direction::ALL[(direction.index() + 3) % 6]
}

#[test]
fn start_room_is_h() {
    assert_eq!(RoomGraph::standard().start(), room('H'));
}

#[test]
fn every_passage_is_two_way() {
    let graph = RoomGraph::standard();
    for spec in graph.rooms() {
        for direction in Direction::ALL {
            if let Some(next) = graph.neighbor(spec.id, direction) {
                assert_eq!(
                    graph.neighbor(next, opposite(direction)),
                    Some(spec.id),
                    "{} -> {} via {}",
                    spec.id,
                    next,
                    direction.token()
                );
            }
        }
    }
}

#[test]
fn floor_letters_spell_the_message() {
    let graph = RoomGraph::standard();
    let spelled: String = ('A'..='Z').map(|key| graph.letter(room(key))).collect();
    assert_eq!(spelled, FLOOR_MESSAGE);
}

#[test]
fn known_neighbors() {
    let graph = RoomGraph::standard();
    assert_eq!(graph.neighbor(room('H'), Direction::Northeast), Some(room('U')));
    assert_eq!(graph.neighbor(room('H'), Direction::East), Some(room('J')));
    assert_eq!(graph.neighbor(room('U'), Direction::Northeast), None);
    assert_eq!(graph.neighbor(room('Q'), Direction::West), None);
}

#[test]
fn exits_follow_slot_order() {
    let graph = RoomGraph::standard();
    let exits: Vec<Direction> = graph.exits(room('K')).collect();
    assert_eq!(
        exits,
        vec![
            Direction::Northwest,
            Direction::Northeast,
            Direction::East,
            Direction::Southwest,
            Direction::West,
        ]
    );
}

#[test]
fn some_rooms_have_no_hint() {
    let graph = RoomGraph::standard();
    assert!(graph.hint(room('U')).is_empty());
    assert!(graph.hint(room('J')).contains("'p'"));
}
