//! Parsing typed deliveries into engine input.

use crate::error::{CoreError, CoreResult};
use crate::frame::PIN_COUNT;
use crate::game::Game;
use crate::roll::Mark;

/// A ball as the caller describes it: a pin count and an optional mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// Pins knocked down. Clamped by the engine if too high.
    pub pins: u8,
    /// Foul or miss annotation.
    pub mark: Option<Mark>,
}

impl Delivery {
    /// A plain pin count.
    pub fn pins(pins: u8) -> Self {
        Self { pins, mark: None }
    }

    /// A foul.
    pub fn foul() -> Self {
        Self {
            pins: 0,
            mark: Some(Mark::Foul),
        }
    }

    /// A miss.
    pub fn miss() -> Self {
        Self {
            pins: 0,
            mark: Some(Mark::Miss),
        }
    }

    /// Parse one scoresheet token against the state of `game`.
    ///
    /// Accepts a pin count `0`-`10`, `x` (everything standing), `/` (the
    /// rest of the rack), `f` (foul) and `-` (miss), case-insensitively.
    pub fn parse(text: &str, game: &Game) -> CoreResult<Self> {
        let token = text.trim().to_lowercase();
        match token.as_str() {
            "x" => Ok(Self::pins(game.remaining_pins())),
            "/" if game.on_fresh_rack() => Err(CoreError::SpareOnFirstBall),
            "/" => Ok(Self::pins(game.remaining_pins())),
            "f" => Ok(Self::foul()),
            "-" => Ok(Self::miss()),
            other => {
                let pins: u32 = other
                    .parse()
                    .map_err(|_| CoreError::InvalidDelivery(text.trim().to_string()))?;
                if pins > u32::from(PIN_COUNT) {
                    return Err(CoreError::PinsOutOfRange(pins));
                }
                Ok(Self::pins(pins as u8))
            }
        }
    }
}
