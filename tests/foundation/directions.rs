//! Integration tests for compass directions

use chalkroom_foundation::Direction;

#[test]
fn tokens_parse_back() {
    for direction in Direction::ALL {
        assert_eq!(Direction::from_token(direction.token()), Some(direction));
    }
}

#[test]
fn north_and_south_need_a_second_letter() {
    assert_eq!(Direction::from_token("n"), None);
    assert_eq!(Direction::from_token("s"), None);
    assert_eq!(Direction::from_token("nn"), None);
    assert_eq!(Direction::from_token("se"), Some(Direction::Southeast));
}

#[test]
fn slot_order() {
    let tokens: Vec<&str> = Direction::ALL.iter().map(|d| d.token()).collect();
    assert_eq!(tokens, ["nw", "ne", "e", "se", "sw", "w"]);
    for (slot, direction) in Direction::ALL.iter().enumerate() {
        assert_eq!(direction.index(), slot);
    }
}

#[test]
fn names_carry_the_token() {
    assert_eq!(Direction::Northwest.name(), "northwest (nw)");
    assert_eq!(Direction::West.name(), "west (w)");
}
