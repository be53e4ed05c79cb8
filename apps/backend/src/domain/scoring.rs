//! Scorer: cumulative frame totals, resolved only once their bonuses are known.

use crate::domain::frames::build_frames;
use crate::domain::ledger::Ledger;
use crate::domain::rules::{is_strike, Pins, FRAMES, PINS};

/// One entry per built frame. `Some(total)` is the running total through
/// that frame; `None` marks a frame still waiting on rolls (its own or a
/// bonus). A `None` is never followed by a `Some`.
pub type FrameScores = Vec<Option<u16>>;

pub fn cumulative_scores(ledger: &Ledger) -> FrameScores {
    let frame_count = build_frames(ledger).len();
    let mut scores: FrameScores = resolved_totals(ledger.rolls())
        .into_iter()
        .map(Some)
        .collect();
    scores.resize(frame_count, None);
    scores
}

/// Running total through the last resolved frame (0 before any resolves).
pub fn total_score(ledger: &Ledger) -> u16 {
    resolved_totals(ledger.rolls()).last().copied().unwrap_or(0)
}

/// Totals for the longest prefix of frames whose score is fully determined.
fn resolved_totals(rolls: &[Pins]) -> Vec<u16> {
    let at = |i: usize| rolls.get(i).copied().map(u16::from);
    let pins = u16::from(PINS);

    let mut totals = Vec::with_capacity(FRAMES);
    let mut total = 0u16;
    let mut i = 0;

    for frame in 0..FRAMES {
        let Some(first) = at(i) else { break };

        if frame == FRAMES - 1 {
            let Some(second) = at(i + 1) else { break };
            let frame_score = if first == pins || first + second == pins {
                let Some(third) = at(i + 2) else { break };
                first + second + third
            } else {
                first + second
            };
            total += frame_score;
            totals.push(total);
            break;
        }

        if is_strike(rolls[i]) {
            let (Some(next), Some(next_next)) = (at(i + 1), at(i + 2)) else {
                break;
            };
            total += pins + next + next_next;
            i += 1;
        } else {
            let Some(second) = at(i + 1) else { break };
            if first + second == pins {
                let Some(bonus) = at(i + 2) else { break };
                total += pins + bonus;
            } else {
                total += first + second;
            }
            i += 2;
        }
        totals.push(total);
    }

    totals
}
