//! Full play-throughs.

use chalkroom_engine::Termination;
use chalkroom_engine::narration::{READ, STARVATION, UNCONSCIOUS, VICTORY};
use chalkroom_foundation::{RoomId, SemanticLimit};
use chalkroom_runtime::Session;
use chalkroom_runtime::repl::script_lines;

const SOLUTION: &str = include_str!("../../demos/solution.txt");

fn room(key: char) -> RoomId {
    RoomId::from_key(key).unwrap()
}

#[test]
fn the_bundled_solution_wins() {
    let mut session = Session::new();
    let lines: Vec<&str> = script_lines(SOLUTION).collect();
    let (last, setup) = lines.split_last().unwrap();

    for line in setup {
        session.submit(line);
        assert!(session.is_running(), "ended early on {line:?}");
    }

    session.submit(last);
    assert!(session.is_won());
    assert_eq!(session.termination(), Some(&Termination::Victory));
    assert!(session.current_output().ends_with(&format!("{VICTORY}\n")));
    assert_eq!(session.state().commands_executed, 5518);
    assert_eq!(session.input_log().len(), 1353);
    assert_eq!(session.press_log(), session.input_log());
}

#[test]
fn victory_repeats_after_winning() {
    let mut session = Session::new();
    for line in script_lines(SOLUTION) {
        session.submit(line);
    }
    session.submit("e");
    assert_eq!(session.current_output(), format!("{VICTORY}\n"));
}

#[test]
fn moving_describes_the_new_room() {
    let mut session = Session::new();
    session.submit("ne");
    assert_eq!(session.location(), room('U'));
    let out = session.current_output();
    assert!(out.starts_with(
        "You are in a large square room with a giant letter B engraved in the floor."
    ));
    assert!(out.contains("The blackboard in this room is empty."));
    assert!(out.ends_with(
        "There are exits to the east (e), southeast (se), southwest (sw), and west (w).\n"
    ));
}

#[test]
fn writing_then_leaving_shows_the_board_on_return() {
    let mut session = Session::new();
    session.submit("t w nw");
    assert_eq!(
        session.current_output(),
        "You write on the blackboard. The blackboard now says: wnw\n"
    );
    session.submit("e w");
    assert!(session.current_output().is_empty());
    session.submit("ne");
    session.submit("sw");
    assert!(
        session
            .current_output()
            .contains("The blackboard has the following text written on it: wnw")
    );
}

#[test]
fn reading_the_board_moves_you() {
    let mut session = Session::new();
    session.submit("twnw");
    session.submit("r");
    // West to G, then northwest to T.
    assert_eq!(session.location(), room('T'));
    assert!(session.current_output().starts_with(&format!(
        "{READ}\nYou are in a large square room with a giant letter Y"
    )));
}

#[test]
fn reading_yourself_to_sleep() {
    let mut session = Session::new();
    session.submit("tr");
    session.submit("r");
    assert!(!session.is_running());
    assert_eq!(session.current_output(), format!("{READ}\n{UNCONSCIOUS}\n"));
    assert_eq!(session.state().commands_executed, 1002);
}

#[test]
fn reading_a_wrong_press_loses() {
    let mut session = Session::new();
    session.submit("tp");
    session.submit("r");
    assert_eq!(session.termination(), Some(&Termination::Mistake));
    assert_eq!(session.current_output(), format!("{READ}\n"));
}

#[test]
fn wandering_forever_starves() {
    let mut session = Session::new();
    session.submit(&"ew".repeat(500_001));
    assert_eq!(session.location(), room('H'));
    assert_eq!(session.current_output(), format!("{STARVATION}\n"));
    assert_eq!(
        session.termination(),
        Some(&Termination::LimitExceeded(SemanticLimit::MaxCommands {
            limit: 1_000_000
        }))
    );
}
