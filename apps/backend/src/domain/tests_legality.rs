use crate::domain::completion::is_game_over;
use crate::domain::fixtures::{gutter_game, ledger, perfect_game, tenth_strike_seven_two};
use crate::domain::ledger::Ledger;
use crate::domain::legality::allowed_next_rolls;
use crate::domain::rules::Pins;

fn allowed(rolls: &[Pins]) -> Vec<Pins> {
    allowed_next_rolls(&ledger(rolls)).to_vec()
}

fn zeros_then(tenth: &[Pins]) -> Vec<Pins> {
    let mut rolls = vec![0; 18];
    rolls.extend_from_slice(tenth);
    rolls
}

#[test]
fn fresh_frame_allows_everything() {
    assert_eq!(allowed_next_rolls(&Ledger::new()).to_vec(), (0..=10).collect::<Vec<_>>());
    assert_eq!(allowed(&[10]), (0..=10).collect::<Vec<_>>());
    assert_eq!(allowed(&[3, 4]), (0..=10).collect::<Vec<_>>());
}

#[test]
fn second_roll_capped_by_pins_standing() {
    assert_eq!(allowed(&[6]), vec![0, 1, 2, 3, 4]);
    assert_eq!(allowed(&[0]), (0..=10).collect::<Vec<_>>());
    assert_eq!(allowed(&[3, 4, 9]), vec![0, 1]);
}

#[test]
fn tenth_frame_first_and_second_rolls() {
    assert_eq!(allowed(&zeros_then(&[])), (0..=10).collect::<Vec<_>>());
    assert_eq!(allowed(&zeros_then(&[8])), vec![0, 1, 2]);
    assert_eq!(allowed(&zeros_then(&[10])), (0..=10).collect::<Vec<_>>());
}

#[test]
fn tenth_frame_bonus_rolls() {
    // Strike then strike: fresh rack for the third roll.
    assert_eq!(allowed(&zeros_then(&[10, 10])), (0..=10).collect::<Vec<_>>());
    // Strike then 7: the third roll finishes that rack.
    assert_eq!(allowed(&zeros_then(&[10, 7])), vec![0, 1, 2, 3]);
    // Spare: one bonus roll on a fresh rack.
    assert_eq!(allowed(&zeros_then(&[4, 6])), (0..=10).collect::<Vec<_>>());
}

#[test]
fn finished_games_allow_nothing() {
    for rolls in [
        gutter_game(),
        perfect_game(),
        tenth_strike_seven_two(),
        zeros_then(&[4, 6, 3]),
        zeros_then(&[10, 10, 10]),
    ] {
        let l = ledger(&rolls);
        assert!(allowed_next_rolls(&l).is_empty(), "rolls: {rolls:?}");
        assert!(is_game_over(&l), "rolls: {rolls:?}");
    }
}

#[test]
fn game_not_over_while_tenth_frame_is_pending() {
    let pending: [&[Pins]; 6] = [&[], &[3], &[10], &[10, 4], &[10, 10], &[4, 6]];
    for tenth in pending {
        let l = ledger(&zeros_then(tenth));
        assert!(!is_game_over(&l), "tenth: {tenth:?}");
        assert!(!allowed_next_rolls(&l).is_empty());
    }
}

#[test]
fn perfect_game_ends_on_twelfth_strike_only() {
    for n in 0..12 {
        assert!(!is_game_over(&ledger(&vec![10; n])), "after {n} strikes");
    }
    assert!(is_game_over(&ledger(&perfect_game())));
}
