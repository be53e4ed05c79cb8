use crate::domain::fixtures::{ledger, perfect_game, tenth_strike_seven_two};
use crate::domain::game::Game;
use crate::errors::domain::{DomainError, InvalidRollKind};

#[test]
fn submit_roll_reports_frame_and_version() {
    let mut game = Game::new();
    let first = game.submit_roll(10).unwrap();
    assert_eq!(first.frame, 0);
    assert_eq!(first.version, 1);
    assert!(!first.game_over);

    let second = game.submit_roll(6).unwrap();
    assert_eq!(second.frame, 1);
    let third = game.submit_roll(3).unwrap();
    assert_eq!(third.frame, 1);
    assert_eq!(game.version(), 3);
}

#[test]
fn rejected_roll_leaves_game_untouched() {
    let mut game = Game::new();
    game.submit_roll(6).unwrap();
    let before = game.snapshot();

    let err = game.submit_roll(5).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidRoll(InvalidRollKind::NotAllowed, _)
    ));
    assert_eq!(game.snapshot(), before);

    let err = game.submit_roll(11).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidRoll(InvalidRollKind::OutOfRange, _)
    ));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn finished_game_rejects_rolls() {
    let mut game = Game::from_ledger(ledger(&tenth_strike_seven_two()));
    assert!(game.is_over());
    let err = game.submit_roll(0).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidRoll(InvalidRollKind::GameOver, _)
    ));
    assert_eq!(game.ledger().len(), 21);
}

#[test]
fn last_roll_marks_game_over() {
    let mut game = Game::new();
    let mut outcomes = Vec::new();
    for pins in perfect_game() {
        outcomes.push(game.submit_roll(pins).unwrap());
    }
    assert!(outcomes[..11].iter().all(|o| !o.game_over));
    let last = outcomes[11];
    assert!(last.game_over);
    assert_eq!(last.frame, 9);

    let snap = game.snapshot();
    assert!(snap.game_over);
    assert!(snap.allowed.is_empty());
    assert_eq!(snap.current_frame, None);
    assert_eq!(snap.scores.last(), Some(&Some(300)));
}

#[test]
fn reset_clears_ledger_and_bumps_version() {
    let mut game = Game::new();
    game.submit_roll(4).unwrap();
    game.reset();

    let snap = game.snapshot();
    assert!(snap.rolls.is_empty());
    assert!(snap.frames.is_empty());
    assert!(snap.scores.is_empty());
    assert!(!snap.game_over);
    assert_eq!(snap.current_frame, Some(0));
    assert_eq!(snap.version, 2);
}

#[test]
fn snapshot_serializes_observable_surface() {
    let mut game = Game::new();
    for pins in [10, 6] {
        game.submit_roll(pins).unwrap();
    }
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "rolls": [10, 6],
            "frames": [[10], [6]],
            "scores": [null, null],
            "gameOver": false,
            "allowed": [0, 1, 2, 3, 4],
            "currentFrame": 1,
            "version": 2,
        })
    );
}

#[test]
fn finished_snapshot_reports_game_over_in_camel_case() {
    let mut game = Game::new();
    for _ in 0..12 {
        game.submit_roll(10).unwrap();
    }
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["gameOver"], true);
    assert_eq!(json["currentFrame"], serde_json::Value::Null);
    assert!(json.get("game_over").is_none());
    assert!(json.get("current_frame").is_none());
}
