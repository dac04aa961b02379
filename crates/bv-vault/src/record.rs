//! Finished-game records.

use bv_core::{FRAME_COUNT, Frame, Score, Snapshot, score_frames};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{VaultError, VaultResult};
use crate::setup::{GameMode, GameSetup, HOUSE_BALL, label_or_unknown};

/// Highest score a game of ten-pin can reach.
pub const MAX_SCORE: u32 = 300;

/// A saved game, detached from the live ledger it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique id.
    pub id: Uuid,
    /// When the game was saved.
    pub date: DateTime<Utc>,
    /// Final total.
    pub score: u32,
    /// The frames as bowled.
    pub frames: Vec<Frame>,
    /// Ball label, e.g. `"House Ball"` or `"Phaze II, Spare Ball"`.
    pub ball: String,
    /// Lane, `?` if unknown.
    pub lane: String,
    /// Bowling center, `?` if unknown.
    pub place: String,
    /// League or practice.
    pub mode: GameMode,
    /// Other bowlers on the pair, stored verbatim.
    #[serde(default)]
    pub players: Vec<String>,
    /// Whether all ten frames were bowled before saving.
    #[serde(default = "finished")]
    pub complete: bool,
}

fn finished() -> bool {
    true
}

/// Changes to a saved game's details. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEdit {
    /// New calendar day; the time of day is kept.
    pub date: Option<NaiveDate>,
    /// New ball label. Blank means the house ball.
    pub ball: Option<String>,
    /// New lane. Blank means unknown.
    pub lane: Option<String>,
    /// New bowling center. Blank means unknown.
    pub place: Option<String>,
    /// Corrected final score.
    pub score: Option<u32>,
}

impl GameEdit {
    /// Whether the edit changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> VaultResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| VaultError::InvalidDate(text.to_string()))
}

impl GameRecord {
    /// Build a record dated now from a game snapshot.
    pub fn new(snapshot: Snapshot, setup: &GameSetup) -> VaultResult<Self> {
        Self::dated(snapshot, setup, Utc::now())
    }

    /// Build a record with an explicit date.
    pub fn dated(snapshot: Snapshot, setup: &GameSetup, date: DateTime<Utc>) -> VaultResult<Self> {
        if snapshot.frames.iter().all(Frame::is_empty) {
            return Err(VaultError::EmptyGame);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            date,
            score: snapshot.total,
            frames: snapshot.frames,
            ball: setup.ball_label(),
            lane: setup.lane_label(),
            place: setup.place_label(),
            mode: setup.mode,
            players: setup.players.clone(),
            complete: snapshot.complete,
        })
    }

    /// Check that the stored frames could come from a real game.
    pub fn validate(&self) -> VaultResult<()> {
        if self.frames.len() <= FRAME_COUNT && self.frames.iter().all(Frame::is_well_formed) {
            Ok(())
        } else {
            Err(VaultError::CorruptRecord(self.id.to_string()))
        }
    }

    /// Apply an edit. Nothing changes if any field is invalid.
    pub fn apply(&mut self, edit: GameEdit) -> VaultResult<()> {
        if let Some(score) = edit.score.filter(|&s| s > MAX_SCORE) {
            return Err(VaultError::InvalidScore(score));
        }
        if let Some(day) = edit.date {
            self.date = day.and_time(self.date.time()).and_utc();
        }
        if let Some(ball) = edit.ball {
            self.ball = match ball.trim() {
                "" => HOUSE_BALL.to_string(),
                label => label.to_string(),
            };
        }
        if let Some(lane) = edit.lane {
            self.lane = label_or_unknown(Some(&lane));
        }
        if let Some(place) = edit.place {
            self.place = label_or_unknown(Some(&place));
        }
        if let Some(score) = edit.score {
            self.score = score;
        }
        Ok(())
    }

    /// Frame-by-frame running score of the stored ledger.
    pub fn score_card(&self) -> Score {
        score_frames(&self.frames)
    }

    /// The first eight characters of the id, for listings.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}
