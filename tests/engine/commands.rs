//! Command execution tests.

use crate::{play, play_default, room};
use chalkroom_engine::GameConfig;
use chalkroom_engine::narration::{BOARD_EMPTY, CANNOT_MOVE, INVALID_COMMAND, VERBOSE_OFF};

#[test]
fn walking_around() {
    let state = play_default(&["ne"]);
    assert_eq!(state.location, room('U'));
    let state = play_default(&["nw"]);
    assert_eq!(state.location, room('Y'));
    let state = play_default(&["w"]);
    assert_eq!(state.location, room('G'));
}

#[test]
fn walls_keep_you_in_place() {
    let state = play_default(&["se se se"]);
    assert_eq!(state.location, room('N'));
    let state = play_default(&["sesese"]);
    assert_eq!(
        state.output.as_str(),
        format!("{CANNOT_MOVE}\n{CANNOT_MOVE}\n")
    );
}

#[test]
fn invalid_direction_stops_the_line() {
    let state = play_default(&["nxe"]);
    assert_eq!(state.location, room('H'));
    assert_eq!(state.output.as_str(), "nx is not a valid direction.\n");
}

#[test]
fn invalid_command_stops_the_line() {
    let state = play_default(&["xe"]);
    assert_eq!(state.location, room('H'));
    assert_eq!(state.output.as_str(), format!("{INVALID_COMMAND}\n"));
}

#[test]
fn write_and_append_report_the_board() {
    let state = play_default(&["thi"]);
    assert_eq!(
        state.output.as_str(),
        "You write on the blackboard. The blackboard now says: hi\n"
    );
    let state = play_default(&["thi", "athere"]);
    assert_eq!(
        state.output.as_str(),
        "You add some text to the blackboard. The blackboard now says: hithere\n"
    );
}

#[test]
fn erase() {
    let state = play_default(&["tab", "d"]);
    assert_eq!(state.board(), "a");
    assert_eq!(
        state.output.as_str(),
        "You erase the last letter from the text on the blackboard. The blackboard now says: a\n"
    );
    let state = play_default(&["d"]);
    assert_eq!(state.output.as_str(), format!("{BOARD_EMPTY}\n"));
}

#[test]
fn reading_follows_the_board() {
    // H's board walks east twice; the read is quiet at depth 1.
    let state = play_default(&["tee", "r"]);
    assert_eq!(state.location, room('K'));
    assert_eq!(state.depth, 0);
    assert_eq!(
        state.output.as_str(),
        "You read the text on the blackboard. You suddenly feel compelled to obey its instructions...\n"
    );
}

#[test]
fn nested_reads_use_the_board_where_you_stand() {
    // H says go east and read; J says go east.
    let state = play_default(&["e", "te", "w", "ter", "r"]);
    assert_eq!(state.location, room('K'));
}

#[test]
fn logs_show_everything_typed() {
    let state = play_default(&["e", "wl"]);
    assert_eq!(state.output.as_str(), "ewl\n");
    let state = play_default(&["k"]);
    assert_eq!(state.output.as_str(), "\n");
}

#[test]
fn verbose_toggles_back() {
    let state = play_default(&["vv"]);
    assert!(!state.verbose);
    assert!(state.output.as_str().ends_with(&format!("{VERBOSE_OFF}\n")));
}

#[test]
fn verbose_config_shows_nested_narration() {
    let state = play(GameConfig::default().with_verbose(true), &["tw", "r"]);
    assert_eq!(state.location, room('G'));
    assert_eq!(
        state.output.as_str(),
        "You read the text on the blackboard. You suddenly feel compelled to obey its instructions...\n"
    );
    let state = play(GameConfig::default().with_verbose(true), &["twx", "r"]);
    assert!(state.output.as_str().ends_with(&format!("{INVALID_COMMAND}\n")));
}

#[test]
fn quit_ends_the_session() {
    let state = play_default(&["qe"]);
    assert!(!state.is_running());
    assert_eq!(state.location, room('H'));
}
