//! Button press tests.

use crate::{play, play_default};
use chalkroom_engine::narration::{MISTAKE, PRESS, READ};
use chalkroom_engine::{GameConfig, PressTarget, PressVerdict, Termination};

#[test]
fn verdicts() {
    assert_eq!(PressVerdict::judge("abc", "ab"), PressVerdict::Pending);
    assert_eq!(PressVerdict::judge("abc", "abc"), PressVerdict::Victory);
    assert_eq!(PressVerdict::judge("abc", "b"), PressVerdict::Mistake);
    assert_eq!(PressVerdict::judge("ab", "abc"), PressVerdict::Mistake);
}

#[test]
fn fixed_targets_are_normalized() {
    assert_eq!(PressTarget::fixed("H, J"), PressTarget::Fixed("hj".to_string()));
}

#[test]
fn default_target_is_the_input_log() {
    let target = PressTarget::default();
    assert_eq!(target.reference("nep"), "nep");
    assert_eq!(PressTarget::fixed("x").reference("nep"), "x");
}

#[test]
fn wrong_press_is_fatal() {
    let state = play_default(&["p"]);
    assert_eq!(state.press_log, "h");
    assert_eq!(state.output.as_str(), format!("{PRESS}\n{MISTAKE}\n"));
    assert_eq!(state.termination(), Some(&Termination::Mistake));
    assert!(!state.is_won());
}

#[test]
fn wrong_press_while_reading_is_quiet() {
    let state = play_default(&["tp", "r"]);
    assert_eq!(state.output.as_str(), format!("{READ}\n"));
    assert_eq!(state.termination(), Some(&Termination::Mistake));
}

#[test]
fn fixed_target_can_be_won() {
    let config = GameConfig::default().with_target(PressTarget::fixed("hj"));
    let state = play(config.clone(), &["p"]);
    assert!(state.is_running());
    assert_eq!(state.output.as_str(), format!("{PRESS}\n"));

    let state = play(config, &["p", "epe"]);
    assert!(state.is_won());
    assert_eq!(state.press_log, "hj");
    // The trailing move never runs.
    assert_eq!(state.location, crate::room('J'));
}
