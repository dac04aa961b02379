//! The frame ledger and roll cursor of a single game.
//!
//! `Game` owns the ten frames and decides, for every incoming ball, which
//! frame and slot it lands in and which symbol gets written there. Calls made
//! while the game is idle or already finished are ignored, and pin counts
//! above what is standing are cut down to the legal maximum.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::frame::{FRAME_COUNT, Frame, PIN_COUNT};
use crate::input::Delivery;
use crate::roll::{Mark, Roll};
use crate::score::{Score, score_frames};

const LAST_FRAME: usize = FRAME_COUNT - 1;

/// Where the next ball will be recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    /// Frame index, 0-9. Reaches 10 once the game is complete.
    pub frame: usize,
    /// Ball within the frame, 0-2.
    pub roll: usize,
}

/// A single game: ten frames plus the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    frames: [Frame; FRAME_COUNT],
    cursor: Cursor,
    started: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// An empty game, ready to take its first ball.
    pub fn new() -> Self {
        Self {
            started: true,
            ..Self::idle()
        }
    }

    /// An empty game that has not been started. Rolls and undos are ignored
    /// until [`Game::start`] is called.
    pub fn idle() -> Self {
        Self {
            frames: Default::default(),
            cursor: Cursor::default(),
            started: false,
        }
    }

    /// Clear the ledger and begin play.
    pub fn start(&mut self) {
        *self = Self::new();
    }

    /// Discard every roll and return to the idle state.
    pub fn reset(&mut self) {
        *self = Self::idle();
    }

    /// Whether the game has been started.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether all ten frames are finished.
    pub fn is_complete(&self) -> bool {
        self.cursor.frame > LAST_FRAME
    }

    /// The current cursor position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// All ten frames.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame at `index`, if in range.
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Total number of balls recorded so far.
    pub fn roll_count(&self) -> usize {
        self.frames.iter().map(Frame::len).sum()
    }

    /// Whether the next ball is thrown at a full rack of ten.
    pub fn on_fresh_rack(&self) -> bool {
        let Cursor { frame, roll } = self.cursor;
        self.frames
            .get(frame)
            .is_some_and(|current| fresh_rack(current, frame, roll))
    }

    /// The most pins the next ball can knock down. Zero once complete.
    pub fn remaining_pins(&self) -> u8 {
        let Cursor { frame, roll } = self.cursor;
        let Some(current) = self.frames.get(frame) else {
            return 0;
        };
        if fresh_rack(current, frame, roll) {
            PIN_COUNT
        } else if roll > 0 && fresh_rack(current, frame, roll - 1) {
            PIN_COUNT.saturating_sub(current.value_at(roll - 1))
        } else {
            0
        }
    }

    /// Record one ball at the cursor and advance it.
    ///
    /// `pins` above [`Game::remaining_pins`] is clamped. A `mark` replaces
    /// the pin count with a foul or miss symbol worth zero.
    pub fn add_roll(&mut self, pins: u8, mark: Option<Mark>) {
        if !self.started {
            debug!(pins, "ignoring roll: game not started");
            return;
        }
        if self.is_complete() {
            debug!(pins, "ignoring roll: game already complete");
            return;
        }

        let max = self.remaining_pins();
        if pins > max {
            debug!(pins, max, "clamping pin count");
        }
        let pins = pins.min(max);

        let Cursor { frame, roll } = self.cursor;
        let symbol = match mark {
            Some(mark) => mark.roll(),
            None => self.symbol_for(frame, roll, pins),
        };
        self.frames[frame].record(roll, symbol);
        self.cursor = self.next_cursor(frame, roll);
    }

    /// Record a parsed delivery.
    pub fn bowl(&mut self, delivery: Delivery) {
        self.add_roll(delivery.pins, delivery.mark);
    }

    /// Remove the most recent ball and rewind the cursor onto its slot.
    pub fn undo(&mut self) {
        if !self.started {
            debug!("ignoring undo: game not started");
            return;
        }

        let mut frame = self.cursor.frame.min(LAST_FRAME);
        if self.frames[frame].is_empty() && frame > 0 {
            frame -= 1;
        }
        if self.frames[frame].pop().is_some() {
            self.cursor = Cursor {
                frame,
                roll: self.frames[frame].len(),
            };
        }
    }

    /// The running score. Recomputed from the ledger on every call.
    pub fn score(&self) -> Score {
        score_frames(&self.frames)
    }

    /// A frozen copy of the ledger and its total, for storage.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            total: self.score().total,
            frames: self.frames.to_vec(),
            complete: self.is_complete(),
        }
    }

    fn symbol_for(&self, frame: usize, roll: usize, pins: u8) -> Roll {
        let current = &self.frames[frame];
        if fresh_rack(current, frame, roll) {
            return if pins == PIN_COUNT {
                Roll::Strike
            } else {
                Roll::Pins(pins)
            };
        }
        if current.value_at(roll - 1).saturating_add(pins) == PIN_COUNT {
            Roll::Spare
        } else {
            Roll::Pins(pins)
        }
    }

    fn next_cursor(&self, frame: usize, roll: usize) -> Cursor {
        let current = &self.frames[frame];
        let next_frame = Cursor {
            frame: frame + 1,
            roll: 0,
        };
        let stay = Cursor {
            frame,
            roll: roll + 1,
        };

        if frame < LAST_FRAME {
            let strike = roll == 0 && current.get(0).is_some_and(Roll::is_strike);
            return if roll == 0 && !strike { stay } else { next_frame };
        }

        match roll {
            0 => stay,
            1 if earns_fill_ball(current) => stay,
            _ => next_frame,
        }
    }
}

/// Whether the ball at `roll` is thrown at ten standing pins.
fn fresh_rack(current: &Frame, frame: usize, roll: usize) -> bool {
    match roll {
        0 => true,
        1 => frame == LAST_FRAME && current.get(0).is_some_and(Roll::is_strike),
        2 => match (current.get(0), current.get(1)) {
            (Some(Roll::Strike), Some(Roll::Strike)) => true,
            (Some(Roll::Strike), _) => false,
            _ => current.value_at(0).saturating_add(current.value_at(1)) == PIN_COUNT,
        },
        _ => false,
    }
}

/// A strike or spare in the tenth frame earns a third ball.
fn earns_fill_ball(tenth: &Frame) -> bool {
    tenth.get(0).is_some_and(Roll::is_strike)
        || tenth
            .get(1)
            .is_some_and(|r| r.is_strike() || r.is_spare())
}

/// An immutable copy of a game handed to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Final (or running) total.
    pub total: u32,
    /// The ten frames as recorded.
    pub frames: Vec<Frame>,
    /// Whether all ten frames were finished.
    pub complete: bool,
}
