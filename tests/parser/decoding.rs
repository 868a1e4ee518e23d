//! Command decoding tests.

use chalkroom_foundation::Direction;
use chalkroom_parser::{Command, CommandReader, Decoded};

#[test]
fn moves() {
    let steps = CommandReader::decode_all("nwneesesww");
    let dirs: Vec<Direction> = steps
        .into_iter()
        .map(|step| match step {
            Decoded::Command(Command::Move(dir)) => dir,
            other => panic!("expected a move, got {other:?}"),
        })
        .collect();
    assert_eq!(dirs, Direction::ALL);
}

#[test]
fn write_takes_the_rest() {
    assert_eq!(
        CommandReader::decode_all("etabc"),
        vec![
            Decoded::Command(Command::Move(Direction::East)),
            Decoded::Command(Command::Write("abc")),
        ]
    );
}

#[test]
fn append_takes_the_rest_even_when_empty() {
    assert_eq!(
        CommandReader::next("a"),
        Some((Decoded::Command(Command::Append("")), ""))
    );
}

#[test]
fn trailing_half_direction() {
    assert_eq!(
        CommandReader::decode_all("es"),
        vec![
            Decoded::Command(Command::Move(Direction::East)),
            Decoded::MissingDirection,
        ]
    );
}

#[test]
fn bad_second_letter() {
    let (step, rest) = CommandReader::next("nxe").unwrap();
    assert_eq!(step, Decoded::InvalidDirection("nx".to_string()));
    assert_eq!(rest, "e");
}

#[test]
fn unknown_letter() {
    let (step, rest) = CommandReader::next("xe").unwrap();
    assert_eq!(step, Decoded::Unknown('x'));
    assert_eq!(rest, "e");
}

#[test]
fn single_letter_commands() {
    let letters: String = CommandReader::decode_all("prdijlkqv")
        .into_iter()
        .map(|step| match step {
            Decoded::Command(command) => command.letter(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(letters, "prdijlkqv");
}

#[test]
fn exhausted_line() {
    assert_eq!(CommandReader::next(""), None);
}
