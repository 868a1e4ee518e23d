//! Integration tests for room identities

use chalkroom_foundation::RoomId;
use chalkroom_foundation::room::{ROOM_COUNT, ROOM_KEYS};

#[test]
fn every_keyboard_letter_is_a_room() {
    assert_eq!(ROOM_COUNT, 26);
    for key in ROOM_KEYS.chars() {
        let id = RoomId::from_key(key).unwrap();
        assert_eq!(id.key(), key);
        assert_eq!(RoomId::from_index(id.index()), Some(id));
    }
}

#[test]
fn keys_are_case_insensitive() {
    assert_eq!(RoomId::from_key('h'), RoomId::from_key('H'));
}

#[test]
fn non_letters_are_not_rooms() {
    assert_eq!(RoomId::from_key('1'), None);
    assert_eq!(RoomId::from_key(' '), None);
    assert_eq!(RoomId::from_index(ROOM_COUNT), None);
}

#[test]
fn button_is_lowercase_key() {
    let q = RoomId::from_key('Q').unwrap();
    assert_eq!(q.button(), 'q');
}

#[test]
fn all_rooms_in_keyboard_order() {
    let keys: String = RoomId::all().map(RoomId::key).collect();
    assert_eq!(keys, ROOM_KEYS);
}

#[test]
fn display_and_debug() {
    let h = RoomId::from_key('H').unwrap();
    assert_eq!(format!("{h}"), "H");
    assert_eq!(format!("{h:?}"), "RoomId(H)");
}
