//! Running score computation.
//!
//! Scoring is a pure function of the ledger: the rolls are flattened to pin
//! values and walked frame by frame, looking ahead across frame boundaries
//! for strike and spare bonuses.

use serde::{Deserialize, Serialize};

use crate::frame::{FRAME_COUNT, Frame, PIN_COUNT};
use crate::game::Game;

/// A derived view of a game's score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Sum of every scored frame.
    pub total: u32,
    /// Running total after each frame. `None` marks a frame not yet played,
    /// which is distinct from a frame that scored zero.
    pub cumulative: [Option<u32>; FRAME_COUNT],
}

impl Score {
    /// Points earned by each frame on its own, bonuses included.
    pub fn frame_scores(&self) -> [Option<u32>; FRAME_COUNT] {
        let mut scores = [None; FRAME_COUNT];
        let mut previous = 0;
        for (slot, cumulative) in scores.iter_mut().zip(self.cumulative) {
            if let Some(running) = cumulative {
                *slot = Some(running - previous);
                previous = running;
            }
        }
        scores
    }
}

/// Score a game.
pub fn score(game: &Game) -> Score {
    score_frames(game.frames())
}

/// Score a ledger of frames, complete or in progress.
///
/// Missing bonus balls count as zero, so a strike in the frame just bowled
/// shows a provisional ten. Balls past the tenth frame's own count only
/// toward the tenth frame.
pub fn score_frames(frames: &[Frame]) -> Score {
    let rolls: Vec<u32> = frames
        .iter()
        .flat_map(Frame::values)
        .map(u32::from)
        .collect();
    let at = |index: usize| rolls.get(index).copied().unwrap_or(0);
    let rack = u32::from(PIN_COUNT);

    let mut score = Score::default();
    let mut index = 0;
    for (i, frame) in frames.iter().take(FRAME_COUNT).enumerate() {
        if index >= rolls.len() {
            break;
        }

        let first = at(index);
        let second = at(index + 1);
        let (frame_score, consumed) = if first == rack {
            (rack + second + at(index + 2), 1)
        } else if first + second == rack {
            (rack + at(index + 2), 2)
        } else {
            (first + second, 2)
        };
        index += consumed;

        score.total += frame_score;
        if !frame.is_empty() {
            score.cumulative[i] = Some(score.total);
        }
    }
    score
}
