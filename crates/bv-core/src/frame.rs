//! A single frame of the ledger.

use serde::{Deserialize, Serialize};

use crate::roll::Roll;

/// Number of pins in a rack.
pub const PIN_COUNT: u8 = 10;

/// Number of frames in a game.
pub const FRAME_COUNT: usize = 10;

/// How a frame finished, judged on its first two balls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    /// Ten pins on the first ball.
    Strike,
    /// Ten pins over the first two balls.
    Spare,
    /// Pins left standing after two balls.
    Open,
}

/// The ordered rolls recorded in one frame.
///
/// Frames 1-9 hold at most two rolls; the tenth holds up to three.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame {
    rolls: Vec<Roll>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from already-recorded rolls.
    pub fn from_rolls(rolls: Vec<Roll>) -> Self {
        Self { rolls }
    }

    /// The recorded rolls in delivery order.
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    /// The roll at `slot`, if recorded.
    pub fn get(&self, slot: usize) -> Option<Roll> {
        self.rolls.get(slot).copied()
    }

    /// Number of recorded rolls.
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// Whether no roll has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    pub(crate) fn record(&mut self, slot: usize, roll: Roll) {
        self.rolls.truncate(slot);
        self.rolls.push(roll);
    }

    pub(crate) fn pop(&mut self) -> Option<Roll> {
        self.rolls.pop()
    }

    /// Pin value of the roll at `slot`, reading spares against the ball
    /// before them. Unrecorded slots count as zero.
    pub fn value_at(&self, slot: usize) -> u8 {
        let Some(roll) = self.get(slot) else {
            return 0;
        };
        let previous = match slot {
            0 => 0,
            _ => self.value_at(slot - 1),
        };
        roll.value(previous)
    }

    /// Numeric pin values of every recorded roll.
    pub fn values(&self) -> Vec<u8> {
        (0..self.rolls.len()).map(|slot| self.value_at(slot)).collect()
    }

    /// Whether every plain pin count fits on a rack.
    pub fn is_well_formed(&self) -> bool {
        self.rolls.iter().all(|roll| match roll {
            Roll::Pins(n) => *n <= PIN_COUNT,
            _ => true,
        })
    }

    /// Classify the frame, or `None` if nothing has been bowled.
    pub fn kind(&self) -> Option<FrameKind> {
        let first = self.get(0)?;
        if first.is_strike() {
            return Some(FrameKind::Strike);
        }
        let spare = self.get(1).is_some_and(Roll::is_spare)
            || self.value_at(0).saturating_add(self.value_at(1)) == PIN_COUNT;
        Some(if spare {
            FrameKind::Spare
        } else {
            FrameKind::Open
        })
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbols: Vec<String> = self.rolls.iter().map(Roll::to_string).collect();
        write!(f, "{}", symbols.join(" "))
    }
}
