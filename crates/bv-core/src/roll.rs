//! Roll symbols and delivery marks.

use serde::{Deserialize, Serialize};

use crate::frame::PIN_COUNT;

/// One recorded delivery, stored as the symbol a scoresheet would show.
///
/// A roll is always read relative to the pins it was thrown at: a
/// [`Roll::Spare`] is worth whatever the previous ball in the frame left
/// standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Roll {
    /// A plain pin count.
    Pins(u8),
    /// All ten pins on a fresh rack.
    Strike,
    /// The remaining pins of a rack on its second ball.
    Spare,
    /// A foul line violation. Scores zero.
    Foul,
    /// An explicit miss. Scores zero.
    Miss,
}

impl Roll {
    /// Pins this roll knocked down, given the value of the ball before it in
    /// the same frame (only used by spares).
    pub fn value(self, previous: u8) -> u8 {
        match self {
            Self::Pins(n) => n,
            Self::Strike => PIN_COUNT,
            Self::Spare => PIN_COUNT.saturating_sub(previous),
            Self::Foul | Self::Miss => 0,
        }
    }

    /// Whether this roll is a strike.
    pub fn is_strike(self) -> bool {
        matches!(self, Self::Strike)
    }

    /// Whether this roll is a spare.
    pub fn is_spare(self) -> bool {
        matches!(self, Self::Spare)
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pins(n) => write!(f, "{n}"),
            Self::Strike => write!(f, "X"),
            Self::Spare => write!(f, "/"),
            Self::Foul => write!(f, "F"),
            Self::Miss => write!(f, "-"),
        }
    }
}

/// An annotation that overrides the pin count of a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Record the ball as a foul.
    Foul,
    /// Record the ball as a miss.
    Miss,
}

impl Mark {
    /// The symbol stored for a ball carrying this mark.
    pub fn roll(self) -> Roll {
        match self {
            Self::Foul => Roll::Foul,
            Self::Miss => Roll::Miss,
        }
    }
}
