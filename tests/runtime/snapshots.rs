//! Snapshot tests across the public API.

use chalkroom_runtime::Session;
use chalkroom_runtime::repl::script_lines;
use chalkroom_runtime::serialize::{from_bytes, load_from_file, save_to_file, to_bytes};

const SOLUTION: &str = include_str!("../../demos/solution.txt");

#[test]
fn resuming_midway_still_wins() {
    let lines: Vec<&str> = script_lines(SOLUTION).collect();
    let (first_half, second_half) = lines.split_at(lines.len() / 2);

    let mut session = Session::new();
    for line in first_half {
        session.submit(line);
    }
    let bytes = to_bytes(&session.snapshot()).unwrap();

    let mut resumed = Session::new();
    resumed.restore(from_bytes(&bytes).unwrap());
    for line in second_half {
        resumed.submit(line);
    }
    assert!(resumed.is_won());
    assert_eq!(resumed.state().commands_executed, 5518);
}

#[test]
fn snapshot_files_survive_a_round_trip() {
    let path = std::env::temp_dir().join(format!(
        "chalkroom-integration-{}.msgpack",
        std::process::id()
    ));

    let mut session = Session::new();
    session.submit("t hello");
    session.submit("v");
    save_to_file(&session.snapshot(), &path).unwrap();

    let snapshot = load_from_file(&path).unwrap();
    assert_eq!(snapshot, session.snapshot());
    assert!(snapshot.verbose);
    assert_eq!(snapshot.input_log, "thellov");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn loading_garbage_names_the_file() {
    let path = std::env::temp_dir().join(format!(
        "chalkroom-garbage-{}.msgpack",
        std::process::id()
    ));
    std::fs::write(&path, b"not a snapshot").unwrap();

    let err = load_from_file(&path).unwrap_err();
    let context = err.context.unwrap();
    assert_eq!(context.source, Some(path.display().to_string()));

    let _ = std::fs::remove_file(&path);
}
