use crate::domain::fixtures::{
    gutter_game, ledger, perfect_game, sample_133, spare_then_gutters, tenth_strike_seven_two,
};
use crate::domain::ledger::Ledger;
use crate::domain::rules::Pins;
use crate::domain::scoring::{cumulative_scores, total_score};

fn scores(rolls: &[Pins]) -> Vec<Option<u16>> {
    cumulative_scores(&ledger(rolls))
}

#[test]
fn empty_ledger_has_no_scores() {
    assert!(cumulative_scores(&Ledger::new()).is_empty());
    assert_eq!(total_score(&Ledger::new()), 0);
}

#[test]
fn perfect_game_scores_300() {
    let s = scores(&perfect_game());
    assert_eq!(
        s,
        [30, 60, 90, 120, 150, 180, 210, 240, 270, 300]
            .map(Some)
            .to_vec()
    );
}

#[test]
fn gutter_game_scores_zero() {
    let s = scores(&gutter_game());
    assert_eq!(s, vec![Some(0); 10]);
}

#[test]
fn spare_waits_for_its_bonus_roll() {
    assert_eq!(scores(&[5, 5]), vec![None]);
    assert_eq!(scores(&[5, 5, 0]), vec![Some(10), None]);

    let mut rolls = spare_then_gutters();
    assert_eq!(rolls.len(), 18);
    assert_eq!(scores(&rolls).len(), 9);
    rolls.push(10);
    let s = scores(&rolls);
    assert_eq!(s[0], Some(10));
    assert_eq!(s[8], Some(10));
    assert_eq!(s[9], None);
}

#[test]
fn spare_bonus_of_five_scores_fifteen() {
    assert_eq!(scores(&[5, 5]), vec![None]);
    assert_eq!(scores(&[5, 5, 5]), vec![Some(15), None]);
    assert_eq!(scores(&[5, 5, 5, 0]), vec![Some(15), Some(20)]);
}

#[test]
fn strike_waits_for_two_rolls() {
    assert_eq!(scores(&[10]), vec![None]);
    assert_eq!(scores(&[10, 3]), vec![None, None]);
    assert_eq!(scores(&[10, 3, 4]), vec![Some(17), Some(24)]);
    assert_eq!(scores(&[10, 10]), vec![None, None]);
    assert_eq!(scores(&[10, 10, 10]), vec![Some(30), None, None]);
}

#[test]
fn unresolved_strike_blocks_later_open_frames() {
    // Frame 2 is open and complete, but frame 1's strike bonus is known,
    // so both resolve; frame 3's spare then waits.
    assert_eq!(scores(&[10, 2, 3, 6, 4]), vec![Some(15), Some(20), None]);
}

#[test]
fn tenth_frame_strike_seven_two() {
    let mut rolls = tenth_strike_seven_two();
    rolls.pop();
    let partial = scores(&rolls);
    assert_eq!(partial[8], Some(63));
    assert_eq!(partial[9], None);

    let s = scores(&tenth_strike_seven_two());
    assert_eq!(s[8], Some(63));
    assert_eq!(s[9], Some(63 + 19));
    assert_eq!(total_score(&ledger(&tenth_strike_seven_two())), 82);
}

#[test]
fn ninth_frame_strike_reaches_into_tenth() {
    let mut rolls = vec![0; 16];
    rolls.extend([10, 10]);
    assert_eq!(scores(&rolls)[8], None);
    rolls.push(3);
    let s = scores(&rolls);
    assert_eq!(s[8], Some(23));
    assert_eq!(s[9], None);
    rolls.push(4);
    assert_eq!(scores(&rolls)[9], Some(23 + 17));
}

#[test]
fn sample_game_running_totals() {
    assert_eq!(
        scores(&sample_133()),
        [5, 14, 29, 49, 60, 61, 77, 97, 117, 133]
            .map(Some)
            .to_vec()
    );
}
