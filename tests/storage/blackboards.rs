//! Integration tests for blackboards

use chalkroom_foundation::RoomId;
use chalkroom_storage::Blackboards;

fn room(key: char) -> RoomId {
    RoomId::from_key(key).unwrap()
}

#[test]
fn unwritten_boards_are_empty() {
    let boards = Blackboards::new();
    assert_eq!(boards.get(room('A')), "");
    assert!(boards.is_empty(room('A')));
    assert_eq!(boards.written_count(), 0);
}

#[test]
fn write_replaces_append_extends() {
    let mut boards = Blackboards::new();
    boards.write(room('A'), "abc");
    boards.append(room('A'), "de");
    assert_eq!(boards.get(room('A')), "abcde");
    boards.write(room('A'), "x");
    assert_eq!(boards.get(room('A')), "x");
}

#[test]
fn erase_takes_the_last_letter() {
    let mut boards = Blackboards::new();
    boards.write(room('B'), "ab");
    assert_eq!(boards.erase_last(room('B')), Some('b'));
    assert_eq!(boards.erase_last(room('B')), Some('a'));
    assert_eq!(boards.erase_last(room('B')), None);
    assert!(boards.is_empty(room('B')));
}

#[test]
fn boards_are_independent() {
    let mut boards = Blackboards::new();
    boards.write(room('C'), "one");
    boards.write(room('D'), "two");
    assert_eq!(boards.written_count(), 2);
    assert_eq!(boards.char_len(room('C')), 3);

    let written: Vec<(RoomId, &str)> = boards.iter().collect();
    assert_eq!(written.len(), 2);
}

#[test]
fn clones_share_nothing_observable() {
    let mut boards = Blackboards::new();
    boards.write(room('E'), "before");
    let saved = boards.clone();
    boards.write(room('E'), "after");
    assert_eq!(saved.get(room('E')), "before");
    assert_ne!(saved, boards);
}
