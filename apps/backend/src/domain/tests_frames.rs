use crate::domain::fixtures::{ledger, perfect_game, sample_133, tenth_strike_seven_two};
use crate::domain::frames::{build_frames, current_frame_index};
use crate::domain::ledger::Ledger;

#[test]
fn empty_ledger_has_no_frames() {
    assert!(build_frames(&Ledger::new()).is_empty());
    assert_eq!(current_frame_index(&Ledger::new()), Some(0));
}

#[test]
fn partial_frame_is_emitted() {
    let frames = build_frames(&ledger(&[3, 4, 6]));
    assert_eq!(frames, vec![vec![3, 4], vec![6]]);
    assert_eq!(current_frame_index(&ledger(&[3, 4, 6])), Some(1));
}

#[test]
fn strikes_occupy_single_roll_frames() {
    let frames = build_frames(&ledger(&[10, 10, 4]));
    assert_eq!(frames, vec![vec![10], vec![10], vec![4]]);
}

#[test]
fn completed_frame_points_at_next_frame() {
    // The next roll opens frame 3 even though it has no rolls yet.
    let l = ledger(&[10, 3, 4]);
    assert_eq!(build_frames(&l).len(), 2);
    assert_eq!(current_frame_index(&l), Some(2));
}

#[test]
fn perfect_game_tenth_frame_holds_three_rolls() {
    let frames = build_frames(&ledger(&perfect_game()));
    assert_eq!(frames.len(), 10);
    assert!(frames[..9].iter().all(|f| f == &vec![10]));
    assert_eq!(frames[9], vec![10, 10, 10]);
    assert_eq!(current_frame_index(&ledger(&perfect_game())), None);
}

#[test]
fn no_tenth_frame_until_it_has_a_roll() {
    let frames = build_frames(&ledger(&[10; 9]));
    assert_eq!(frames.len(), 9);
    assert_eq!(current_frame_index(&ledger(&[10; 9])), Some(9));
}

#[test]
fn tenth_frame_partial_and_complete() {
    let mut rolls = tenth_strike_seven_two();
    rolls.pop();
    let frames = build_frames(&ledger(&rolls));
    assert_eq!(frames.len(), 10);
    assert_eq!(frames[9], vec![10, 7]);

    let frames = build_frames(&ledger(&tenth_strike_seven_two()));
    assert_eq!(frames[9], vec![10, 7, 2]);
}

#[test]
fn sample_game_partition() {
    let frames = build_frames(&ledger(&sample_133()));
    assert_eq!(
        frames,
        vec![
            vec![1, 4],
            vec![4, 5],
            vec![6, 4],
            vec![5, 5],
            vec![10],
            vec![0, 1],
            vec![7, 3],
            vec![6, 4],
            vec![10],
            vec![2, 8, 6],
        ]
    );
}
